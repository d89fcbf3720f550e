use niche_portal_shared::Service;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

/// 可购买的服务目录
pub struct ServiceApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> ServiceApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Service>> {
        self.client.request(Endpoint::ServicesList, &[]).await
    }

    pub async fn get(&self, service_id: &str) -> ApiResult<Service> {
        self.client
            .request(Endpoint::ServiceGet, &[service_id])
            .await
    }

    pub async fn create(&self, service: &Service) -> ApiResult<Service> {
        self.client
            .request_with(Endpoint::ServiceCreate, &[], service)
            .await
    }

    pub async fn update(&self, service_id: &str, service: &Service) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::ServiceUpdate, &[service_id], service)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, service_id: &str) -> ApiResult<()> {
        self.client
            .request::<IgnoredAny>(Endpoint::ServiceDelete, &[service_id])
            .await
            .map(|_| ())
    }
}
