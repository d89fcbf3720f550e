use niche_portal::{ApiClient, ApiResult, HttpClient};
use niche_portal_shared::Niche;
use niche_portal_shared::date::format_datetime;
use niche_portal_shared::format::status_label;
use serde::Serialize;

const EMPTY: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub date: String,
    pub action: String,
    pub note: String,
}

/// 墓位详情对话框的显示数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheDetails {
    pub title: String,
    pub status: &'static str,
    /// (标签, 值)
    pub rows: Vec<(&'static str, String)>,
    pub history: Vec<HistoryRow>,
}

impl NicheDetails {
    pub fn from_niche(niche: &Niche) -> Self {
        let or_empty = |v: &Option<String>| v.clone().unwrap_or_else(|| EMPTY.to_string());

        let mut entries: Vec<_> = niche.history.iter().collect();
        // 最新记录在前，与后端返回顺序无关
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        let history = entries
            .into_iter()
            .map(|h| HistoryRow {
                date: format_datetime(h.date),
                action: h.action.clone(),
                note: or_empty(&h.note),
            })
            .collect();

        Self {
            title: niche.niche_name.clone(),
            status: status_label(&niche.status),
            rows: vec![
                ("Mã ô", niche.niche_id.clone()),
                ("Khách hàng", or_empty(&niche.customer)),
                ("Số điện thoại", or_empty(&niche.phone)),
                ("Người đã khuất", or_empty(&niche.deceased)),
            ],
            history,
        }
    }
}

pub async fn load_niche_details<C: HttpClient>(
    api: &ApiClient<C>,
    building_id: &str,
    floor_id: &str,
    area_id: &str,
    niche_id: &str,
) -> ApiResult<NicheDetails> {
    let niche = api
        .niches()
        .get(building_id, floor_id, area_id, niche_id)
        .await?;
    Ok(NicheDetails::from_niche(&niche))
}
