//! 墓位预约门户前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `cart`: 客户门户购物车
//! - `components`: 页面视图模型
//! - `cli`: 命令行入口

pub mod auth;
pub mod cart;
pub mod cli;
pub mod components;
pub mod web;

use niche_portal::{ApiClient, HttpClient};
use tokio::task::JoinHandle;

use crate::auth::{AuthContext, init_auth};
use crate::cart::CartContext;
use crate::web::{AppRoute, GuardOutcome, Portal, RouterService};

/// 路由对应的页面标题
pub fn page_title(portal: Portal, route: AppRoute) -> &'static str {
    match (portal, route) {
        (Portal::Customer, AppRoute::Home) => "Trang chủ",
        (Portal::Staff, AppRoute::Dashboard) => "Bảng điều khiển",
        (_, AppRoute::Login) => "Đăng nhập",
        (_, AppRoute::Register) => "Đăng ký",
        (_, AppRoute::Niches) => "Sơ đồ ô",
        (_, AppRoute::Contracts) => "Hợp đồng",
        (_, AppRoute::Services) => "Dịch vụ",
        (_, AppRoute::Cart) => "Giỏ hàng",
        (_, AppRoute::VisitRegistration) | (_, AppRoute::Visits) => "Đăng ký viếng",
        (_, AppRoute::Reservation) | (_, AppRoute::Reservations) => "Đặt ô",
        (_, AppRoute::Customers) => "Khách hàng",
        (_, AppRoute::Employees) => "Nhân viên",
        _ => "404",
    }
}

/// 一个门户的运行实例
///
/// 持有认证、路由与购物车上下文，相当于应用根组件。
pub struct App<C> {
    auth: AuthContext<C>,
    router: RouterService,
    cart: CartContext,
}

impl<C: HttpClient> App<C> {
    pub fn new(portal: Portal, api: ApiClient<C>, initial_path: &str) -> Self {
        let auth = AuthContext::new(api);
        let router = RouterService::new(portal, auth.subscribe(), initial_path);
        Self {
            auth,
            router,
            cart: CartContext::new(),
        }
    }

    /// 恢复会话并开始监听认证变化
    ///
    /// 返回的任务在 `App` 被丢弃后结束。
    pub async fn start(&self) -> JoinHandle<()> {
        init_auth(&self.auth).await;
        self.router.sync_with_auth();
        self.router.watch_auth()
    }

    pub fn portal(&self) -> Portal {
        self.router.portal()
    }

    pub fn auth(&self) -> &AuthContext<C> {
        &self.auth
    }

    pub fn router(&self) -> &RouterService {
        &self.router
    }

    pub fn cart(&self) -> &CartContext {
        &self.cart
    }

    pub fn api(&self) -> &ApiClient<C> {
        self.auth.api()
    }

    pub fn outlet(&self) -> GuardOutcome {
        self.router.outlet()
    }

    pub fn title(&self) -> &'static str {
        page_title(self.portal(), self.router.current_route())
    }
}
