use niche_portal_shared::Customer;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct CustomerApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> CustomerApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Customer>> {
        self.client.request(Endpoint::CustomersList, &[]).await
    }

    pub async fn get(&self, customer_id: &str) -> ApiResult<Customer> {
        self.client
            .request(Endpoint::CustomerGet, &[customer_id])
            .await
    }

    pub async fn create(&self, customer: &Customer) -> ApiResult<Customer> {
        self.client
            .request_with(Endpoint::CustomerCreate, &[], customer)
            .await
    }

    pub async fn update(&self, customer_id: &str, customer: &Customer) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::CustomerUpdate, &[customer_id], customer)
            .await
            .map(|_| ())
    }
}
