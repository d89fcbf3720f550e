//! 路由服务模块 - 核心引擎
//!
//! 所有对导航历史的操作都集中在此模块。
//! 实现了"请求 -> 验证(Guard) -> 处理 -> 加载"的导航流程。

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::route::{AppRoute, Portal};
use crate::auth::AuthState;

/// 守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 认证状态尚未确定，渲染占位内容
    Loading,
    /// 需要跳转
    Redirect(AppRoute),
    /// 可以渲染该路由
    Render(AppRoute),
}

/// 当前会话能否进入该门户的受保护页面
fn is_allowed(portal: Portal, state: &AuthState) -> bool {
    match (&state.user, portal) {
        (None, _) => false,
        (Some(_), Portal::Customer) => true,
        (Some(user), Portal::Staff) => user.role.is_staff_side(),
    }
}

/// **核心守卫逻辑**
pub fn guard(portal: Portal, state: &AuthState, route: AppRoute) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }

    let allowed = is_allowed(portal, state);

    if route.requires_auth(portal) && !allowed {
        return GuardOutcome::Redirect(portal.login());
    }

    if route.should_redirect_when_authenticated() && allowed {
        return GuardOutcome::Redirect(portal.home());
    }

    GuardOutcome::Render(route)
}

struct History {
    // 最后一项即当前路由
    entries: Vec<AppRoute>,
}

impl History {
    fn current(&self) -> AppRoute {
        self.entries.last().copied().unwrap_or_default()
    }

    fn push(&mut self, route: AppRoute) {
        self.entries.push(route);
    }

    fn replace(&mut self, route: AppRoute) {
        match self.entries.last_mut() {
            Some(last) => *last = route,
            None => self.entries.push(route),
        }
    }
}

/// 路由器服务
///
/// 通过注入认证状态通道实现与认证系统的解耦。
#[derive(Clone)]
pub struct RouterService {
    portal: Portal,
    history: Arc<Mutex<History>>,
    auth: watch::Receiver<AuthState>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `portal` - 所属门户
    /// * `auth` - 认证状态订阅，由外部注入实现解耦
    /// * `initial_path` - 启动时的路径
    pub fn new(portal: Portal, auth: watch::Receiver<AuthState>, initial_path: &str) -> Self {
        let initial_route = AppRoute::from_path(portal, initial_path);
        Self {
            portal,
            history: Arc::new(Mutex::new(History {
                entries: vec![initial_route],
            })),
            auth,
        }
    }

    pub fn portal(&self) -> Portal {
        self.portal
    }

    fn with_history<R>(&self, f: impl FnOnce(&mut History) -> R) -> R {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut history)
    }

    pub fn current_route(&self) -> AppRoute {
        self.with_history(|h| h.current())
    }

    pub fn current_path(&self) -> &'static str {
        self.current_route().to_path(self.portal)
    }

    pub fn history_len(&self) -> usize {
        self.with_history(|h| h.entries.len())
    }

    /// 当前路由出口应渲染的内容
    pub fn outlet(&self) -> GuardOutcome {
        let state = self.auth.borrow().clone();
        guard(self.portal, &state, self.current_route())
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) -> GuardOutcome {
        let target_route = AppRoute::from_path(self.portal, path);
        self.navigate_to_route(target_route, true)
    }

    /// 返回上一页，历史只剩一项时返回 None
    pub fn back(&self) -> Option<GuardOutcome> {
        let popped = self.with_history(|h| {
            if h.entries.len() > 1 {
                h.entries.pop();
                Some(h.current())
            } else {
                None
            }
        })?;
        Some(self.navigate_to_route(popped, false))
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 压入历史, false 替换当前项
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) -> GuardOutcome {
        let state = self.auth.borrow().clone();
        let outcome = guard(self.portal, &state, target_route);

        // 加载中先停在目标路由，认证确定后由 sync_with_auth 重新判定
        let landed = match outcome {
            GuardOutcome::Loading | GuardOutcome::Render(_) => target_route,
            GuardOutcome::Redirect(redirect) => {
                warn!(
                    portal = %self.portal,
                    from = target_route.to_path(self.portal),
                    to = redirect.to_path(self.portal),
                    "access denied, redirecting"
                );
                redirect
            }
        };

        self.with_history(|h| {
            if use_push {
                h.push(landed);
            } else {
                h.replace(landed);
            }
        });
        outcome
    }

    /// 认证状态变化后重新判定当前路由，发生跳转时返回新路由
    pub fn sync_with_auth(&self) -> Option<AppRoute> {
        let state = self.auth.borrow().clone();
        let current = self.current_route();

        match guard(self.portal, &state, current) {
            GuardOutcome::Redirect(redirect) => {
                info!(
                    portal = %self.portal,
                    from = current.to_path(self.portal),
                    to = redirect.to_path(self.portal),
                    "auth state changed, redirecting"
                );
                self.with_history(|h| h.push(redirect));
                Some(redirect)
            }
            GuardOutcome::Loading | GuardOutcome::Render(_) => None,
        }
    }

    /// 监听认证状态变化并自动重定向
    ///
    /// 认证上下文被丢弃（发送端关闭）时任务结束。
    pub fn watch_auth(&self) -> JoinHandle<()> {
        let router = self.clone();
        let mut auth = self.auth.clone();
        tokio::spawn(async move {
            while auth.changed().await.is_ok() {
                router.sync_with_auth();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_portal_shared::{Role, User};

    fn user(role: Role) -> User {
        User {
            id: "1".to_string(),
            name: "Test".to_string(),
            email: "t@x.vn".to_string(),
            role,
        }
    }

    fn resolved(user: Option<User>) -> AuthState {
        AuthState {
            user,
            loading: false,
        }
    }

    #[test]
    fn test_guard_loading_renders_placeholder() {
        let state = AuthState::default();
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Dashboard),
            GuardOutcome::Loading
        );
        assert_eq!(
            guard(Portal::Customer, &state, AppRoute::Home),
            GuardOutcome::Loading
        );
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        let state = resolved(None);
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Dashboard),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(Portal::Customer, &state, AppRoute::Cart),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(Portal::Customer, &state, AppRoute::Services),
            GuardOutcome::Render(AppRoute::Services)
        );
    }

    #[test]
    fn test_guard_renders_for_user() {
        let state = resolved(Some(user(Role::Staff)));
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Employees),
            GuardOutcome::Render(AppRoute::Employees)
        );
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Login),
            GuardOutcome::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn test_guard_rejects_customer_on_staff_portal() {
        let state = resolved(Some(user(Role::Customer)));
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Dashboard),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        // 登录页保持可见，便于切换账户
        assert_eq!(
            guard(Portal::Staff, &state, AppRoute::Login),
            GuardOutcome::Render(AppRoute::Login)
        );
        assert_eq!(
            guard(Portal::Customer, &state, AppRoute::Login),
            GuardOutcome::Redirect(AppRoute::Home)
        );
    }

    #[test]
    fn test_navigate_pushes_history_and_redirects() {
        let (_tx, rx) = watch::channel(resolved(None));
        let router = RouterService::new(Portal::Customer, rx, "/");

        assert_eq!(
            router.navigate("/services"),
            GuardOutcome::Render(AppRoute::Services)
        );
        assert_eq!(
            router.navigate("/cart"),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(router.current_route(), AppRoute::Login);
        assert_eq!(router.current_path(), "/login");
        assert_eq!(router.history_len(), 3);

        assert_eq!(
            router.back(),
            Some(GuardOutcome::Render(AppRoute::Services))
        );
        assert_eq!(router.back(), Some(GuardOutcome::Render(AppRoute::Home)));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_sync_with_auth_after_resolution() {
        let (tx, rx) = watch::channel(AuthState::default());
        let router = RouterService::new(Portal::Staff, rx, "/dashboard");
        assert_eq!(router.outlet(), GuardOutcome::Loading);
        assert_eq!(router.sync_with_auth(), None);

        tx.send_replace(resolved(None));
        assert_eq!(router.sync_with_auth(), Some(AppRoute::Login));
        assert_eq!(router.current_route(), AppRoute::Login);

        tx.send_replace(resolved(Some(user(Role::Admin))));
        assert_eq!(router.sync_with_auth(), Some(AppRoute::Dashboard));
        assert_eq!(router.outlet(), GuardOutcome::Render(AppRoute::Dashboard));
    }

    #[tokio::test]
    async fn test_watch_auth_redirects_on_logout() {
        let (tx, rx) = watch::channel(resolved(Some(user(Role::Staff))));
        let router = RouterService::new(Portal::Staff, rx, "/customers");
        let handle = router.watch_auth();

        tx.send_replace(resolved(None));
        drop(tx);
        handle.await.unwrap();

        assert_eq!(router.current_route(), AppRoute::Login);
    }
}
