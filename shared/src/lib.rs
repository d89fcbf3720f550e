use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod format;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 用户与会话 (User / Session)
// =========================================================

/// 账户角色
///
/// 后端返回的未知角色字符串统一归为 `Unknown`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    Customer,
    Staff,
    Manager,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// 是否可以进入员工门户
    pub fn is_staff_side(&self) -> bool {
        matches!(self, Role::Staff | Role::Manager | Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// 登录响应：令牌必有，用户信息视后端版本而定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

// =========================================================
// 建筑层级 (Building -> Floor -> Area -> Niche)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub building_id: String,
    pub building_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub floor_id: String,
    pub building_id: String,
    pub floor_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub area_id: String,
    pub floor_id: String,
    pub area_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheHistoryEntry {
    #[serde(with = "date::lenient_datetime")]
    pub date: NaiveDateTime,
    pub action: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// 后端的只读投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Niche {
    pub niche_id: String,
    pub niche_name: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub deceased: Option<String>,
    pub status: String,
    #[serde(default)]
    pub history: Vec<NicheHistoryEntry>,
}

// =========================================================
// 合同与服务 (Contracts / Services)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_id: String,
    pub customer_id: String,
    pub niche_id: String,
    #[serde(default)]
    pub deceased_name: Option<String>,
    #[serde(with = "date::lenient_date")]
    pub start_date: NaiveDate,
    #[serde(with = "date::lenient_date")]
    pub end_date: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_id: String,
    pub service_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderItem {
    pub service_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_order_id: Option<String>,
    pub customer_id: String,
    pub niche_id: String,
    pub items: Vec<ServiceOrderItem>,
}

// =========================================================
// 探访与预订 (Visits / Reservations)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRegistration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<String>,
    pub customer_id: String,
    pub niche_id: String,
    #[serde(with = "date::lenient_datetime")]
    pub visit_date: NaiveDateTime,
    #[serde(default)]
    pub accompanying_people: u32,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheReservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    pub niche_id: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, with = "date::lenient_datetime_opt")]
    pub signing_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// =========================================================
// 支付 (Payments)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: f64,
    pub order_info: String,
    pub order_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub payment_url: String,
}

// =========================================================
// 客户与员工 (Customers / Employees)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub citizen_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Option<String>,
}
