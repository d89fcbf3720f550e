use niche_portal_shared::ServiceOrder;
use niche_portal_shared::protocol::Endpoint;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct ServiceOrderApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> ServiceOrderApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn create(&self, order: &ServiceOrder) -> ApiResult<ServiceOrder> {
        self.client
            .request_with(Endpoint::ServiceOrderCreate, &[], order)
            .await
    }

    pub async fn list_by_customer(&self, customer_id: &str) -> ApiResult<Vec<ServiceOrder>> {
        self.client
            .request(Endpoint::ServiceOrdersByCustomer, &[customer_id])
            .await
    }
}
