use niche_portal_shared::NicheReservation;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct NicheReservationApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> NicheReservationApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<NicheReservation>> {
        self.client
            .request(Endpoint::NicheReservationsList, &[])
            .await
    }

    pub async fn get(&self, reservation_id: &str) -> ApiResult<NicheReservation> {
        self.client
            .request(Endpoint::NicheReservationGet, &[reservation_id])
            .await
    }

    pub async fn create(&self, reservation: &NicheReservation) -> ApiResult<NicheReservation> {
        self.client
            .request_with(Endpoint::NicheReservationCreate, &[], reservation)
            .await
    }

    pub async fn update(
        &self,
        reservation_id: &str,
        reservation: &NicheReservation,
    ) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(
                Endpoint::NicheReservationUpdate,
                &[reservation_id],
                reservation,
            )
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, reservation_id: &str) -> ApiResult<()> {
        self.client
            .request::<IgnoredAny>(Endpoint::NicheReservationDelete, &[reservation_id])
            .await
            .map(|_| ())
    }
}
