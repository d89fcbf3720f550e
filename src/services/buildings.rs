use niche_portal_shared::protocol::Endpoint;
use niche_portal_shared::{Area, Building, Floor};

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

/// 建筑、楼层、区域（Zone）
pub struct BuildingApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> BuildingApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn get_all_data(&self) -> ApiResult<Vec<Building>> {
        self.client.request(Endpoint::BuildingsAll, &[]).await
    }

    pub async fn get(&self, building_id: &str) -> ApiResult<Building> {
        self.client
            .request(Endpoint::BuildingGet, &[building_id])
            .await
    }

    pub async fn floors(&self, building_id: &str) -> ApiResult<Vec<Floor>> {
        self.client
            .request(Endpoint::FloorsList, &[building_id])
            .await
    }

    pub async fn floor(&self, building_id: &str, floor_id: &str) -> ApiResult<Floor> {
        self.client
            .request(Endpoint::FloorGet, &[building_id, floor_id])
            .await
    }

    pub async fn areas(&self, building_id: &str, floor_id: &str) -> ApiResult<Vec<Area>> {
        self.client
            .request(Endpoint::AreasList, &[building_id, floor_id])
            .await
    }
}
