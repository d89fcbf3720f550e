//! 路由层
//!
//! - `route`: 两个门户的路由表（领域模型）
//! - `router`: 守卫与导航历史（核心引擎）

pub mod route;
pub mod router;

pub use route::{AppRoute, Portal};
pub use router::{GuardOutcome, RouterService, guard};
