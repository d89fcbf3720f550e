use niche_portal_shared::VisitRegistration;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct VisitRegistrationApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> VisitRegistrationApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<VisitRegistration>> {
        self.client
            .request(Endpoint::VisitRegistrationsList, &[])
            .await
    }

    pub async fn get(&self, visit_id: &str) -> ApiResult<VisitRegistration> {
        self.client
            .request(Endpoint::VisitRegistrationGet, &[visit_id])
            .await
    }

    pub async fn create(&self, visit: &VisitRegistration) -> ApiResult<VisitRegistration> {
        self.client
            .request_with(Endpoint::VisitRegistrationCreate, &[], visit)
            .await
    }

    pub async fn update(&self, visit_id: &str, visit: &VisitRegistration) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::VisitRegistrationUpdate, &[visit_id], visit)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, visit_id: &str) -> ApiResult<()> {
        self.client
            .request::<IgnoredAny>(Endpoint::VisitRegistrationDelete, &[visit_id])
            .await
            .map(|_| ())
    }
}
