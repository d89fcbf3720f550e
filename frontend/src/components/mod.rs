//! 页面视图模型
//!
//! 每个模块负责把服务层返回的数据整理成页面直接展示的行/字段。

pub mod checkout;
pub mod contracts;
pub mod dashboard;
pub mod login;
pub mod niche_details;

pub use checkout::{CheckoutView, PaymentResult, pay, pay_order};
pub use contracts::{ContractRow, load_contract_rows};
pub use dashboard::{DashboardSummary, load_dashboard};
pub use login::LoginForm;
pub use niche_details::{NicheDetails, load_niche_details};
