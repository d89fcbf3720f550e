use std::collections::BTreeMap;

use niche_portal::{ApiClient, ApiResult, HttpClient};
use niche_portal_shared::format::status_label;
use serde::Serialize;

/// 员工门户首页统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub buildings: usize,
    pub customers: usize,
    pub reservations: usize,
    pub visits: usize,
    /// 状态标签 -> 预约数量
    pub reservations_by_status: BTreeMap<&'static str, usize>,
}

/// 并发加载统计所需的全部列表，任一失败即整体失败
pub async fn load_dashboard<C: HttpClient>(api: &ApiClient<C>) -> ApiResult<DashboardSummary> {
    let buildings = api.buildings();
    let customers = api.customers();
    let reservations = api.niche_reservations();
    let visits = api.visit_registrations();

    let (buildings, customers, reservations, visits) = futures::try_join!(
        buildings.get_all_data(),
        customers.list(),
        reservations.list(),
        visits.list(),
    )
    .map_err(|e| e.in_op("dashboard.load"))?;

    let mut reservations_by_status = BTreeMap::new();
    for reservation in &reservations {
        let label = status_label(reservation.status.as_deref().unwrap_or_default());
        *reservations_by_status.entry(label).or_insert(0) += 1;
    }

    Ok(DashboardSummary {
        buildings: buildings.len(),
        customers: customers.len(),
        reservations: reservations.len(),
        visits: visits.len(),
        reservations_by_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_portal::MockHttpClient;
    use niche_portal::shared::protocol::HttpMethod;
    use serde_json::json;

    fn mocked_api() -> ApiClient<MockHttpClient> {
        let api = ApiClient::new(MockHttpClient::new(), "http://api.test");
        let http = api.http();
        http.mock_response(
            HttpMethod::Get,
            "http://api.test/api/Buildings/all",
            200,
            json!([{ "buildingId": "B1", "buildingName": "Tháp A" }]),
        );
        http.mock_response(
            HttpMethod::Get,
            "http://api.test/api/Customers",
            200,
            json!([
                { "fullName": "A", "phoneNumber": "0901" },
                { "fullName": "B", "phoneNumber": "0902" }
            ]),
        );
        http.mock_response(
            HttpMethod::Get,
            "http://api.test/api/NicheReservations",
            200,
            json!([
                { "nicheId": "N1", "name": "A", "phoneNumber": "0901", "status": "Pending" },
                { "nicheId": "N2", "name": "B", "phoneNumber": "0902", "status": "Pending" },
                { "nicheId": "N3", "name": "C", "phoneNumber": "0903", "status": "Approved" },
                { "nicheId": "N4", "name": "D", "phoneNumber": "0904" }
            ]),
        );
        api
    }

    #[tokio::test]
    async fn test_load_dashboard_counts() {
        let api = mocked_api();
        api.http().mock_response(
            HttpMethod::Get,
            "http://api.test/api/VisitRegistrations",
            200,
            json!([]),
        );

        let summary = load_dashboard(&api).await.unwrap();
        assert_eq!(summary.buildings, 1);
        assert_eq!(summary.customers, 2);
        assert_eq!(summary.reservations, 4);
        assert_eq!(summary.visits, 0);
        assert_eq!(summary.reservations_by_status["Đang Chờ Duyệt"], 2);
        assert_eq!(summary.reservations_by_status["Đã Duyệt"], 1);
        assert_eq!(summary.reservations_by_status["Không xác định"], 1);
    }

    #[tokio::test]
    async fn test_load_dashboard_fails_when_any_list_fails() {
        // VisitRegistrations 未配置，MockHttpClient 返回 404
        let err = load_dashboard(&mocked_api()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.spans().last().unwrap().operation, "dashboard.load");
    }
}
