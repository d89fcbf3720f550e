use niche_portal::{ApiClient, ApiResult, HttpClient};
use niche_portal_shared::Contract;
use niche_portal_shared::date::format_date;
use niche_portal_shared::format::{format_vnd, status_label};
use serde::Serialize;

/// 客户合同列表中的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRow {
    pub contract_id: String,
    pub niche_id: String,
    pub deceased: String,
    pub period: String,
    pub status: &'static str,
    pub total: String,
}

impl From<&Contract> for ContractRow {
    fn from(c: &Contract) -> Self {
        Self {
            contract_id: c.contract_id.clone(),
            niche_id: c.niche_id.clone(),
            deceased: c.deceased_name.clone().unwrap_or_default(),
            period: format!("{} - {}", format_date(c.start_date), format_date(c.end_date)),
            status: status_label(&c.status),
            total: format_vnd(c.total_amount),
        }
    }
}

pub async fn load_contract_rows<C: HttpClient>(
    api: &ApiClient<C>,
    customer_id: &str,
) -> ApiResult<Vec<ContractRow>> {
    let contracts = api.contracts().list_by_customer(customer_id).await?;
    Ok(contracts.iter().map(ContractRow::from).collect())
}
