use niche_portal_shared::Niche;
use niche_portal_shared::protocol::Endpoint;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct NicheApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> NicheApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self, building_id: &str, floor_id: &str, area_id: &str) -> ApiResult<Vec<Niche>> {
        self.client
            .request(Endpoint::NichesList, &[building_id, floor_id, area_id])
            .await
    }

    pub async fn get(
        &self,
        building_id: &str,
        floor_id: &str,
        area_id: &str,
        niche_id: &str,
    ) -> ApiResult<Niche> {
        self.client
            .request(
                Endpoint::NicheGet,
                &[building_id, floor_id, area_id, niche_id],
            )
            .await
    }
}
