use niche_portal_shared::Contract;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct ContractApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> ContractApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list_by_customer(&self, customer_id: &str) -> ApiResult<Vec<Contract>> {
        self.client
            .request(Endpoint::ContractsByCustomer, &[customer_id])
            .await
    }

    pub async fn get(&self, contract_id: &str) -> ApiResult<Contract> {
        self.client
            .request(Endpoint::ContractGet, &[contract_id])
            .await
    }

    pub async fn create(&self, contract: &Contract) -> ApiResult<Contract> {
        self.client
            .request_with(Endpoint::ContractCreate, &[], contract)
            .await
    }

    pub async fn update(&self, contract_id: &str, contract: &Contract) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::ContractUpdate, &[contract_id], contract)
            .await
            .map(|_| ())
    }
}
