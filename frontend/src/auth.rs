//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过订阅认证状态通道来检查认证状态。

use std::sync::Arc;

use niche_portal::{ApiClient, ApiResult, HttpClient};
use niche_portal_shared::{LoginRequest, RegisterRequest, User};
use tokio::sync::watch;
use tracing::{info, warn};

/// 认证状态
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// 当前用户（仅保存在内存中）
    pub user: Option<User>,
    /// 是否正在加载（会话尚未确定）
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// 认证上下文
///
/// 克隆后共享同一份状态；每次变化都会通知订阅者。
pub struct AuthContext<C> {
    api: ApiClient<C>,
    state: Arc<watch::Sender<AuthState>>,
}

impl<C> Clone for AuthContext<C> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: HttpClient> AuthContext<C> {
    /// 创建新的认证上下文，初始处于加载状态
    pub fn new(api: ApiClient<C>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn api(&self) -> &ApiClient<C> {
        &self.api
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// 订阅认证状态（用于路由服务注入）
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn set_user(&self, user: Option<User>) {
        self.state.send_modify(|state| {
            state.user = user;
            state.loading = false;
        });
    }
}

/// 初始化认证状态
///
/// 客户端已携带令牌时尝试恢复会话；失败则清除令牌，按未登录处理。
pub async fn init_auth<C: HttpClient>(ctx: &AuthContext<C>) {
    if ctx.api.token().is_none() {
        ctx.set_user(None);
        return;
    }

    match ctx.api.auth().current_user().await {
        Ok(user) => {
            info!(user = %user.email, "session restored");
            ctx.set_user(Some(user));
        }
        Err(e) => {
            warn!(error = %e, "session restore failed");
            ctx.api.set_token(None);
            ctx.set_user(None);
        }
    }
}

/// 登录并保存状态 (仅内存)
///
/// 成功后令牌写入共享客户端；响应不含用户信息时再查询当前用户。
pub async fn login<C: HttpClient>(
    ctx: &AuthContext<C>,
    email: &str,
    password: &str,
) -> ApiResult<User> {
    let credentials = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let result: ApiResult<User> = async {
        let resp = ctx.api.auth().login(&credentials).await?;
        ctx.api.set_token(Some(resp.token));
        match resp.user {
            Some(user) => Ok(user),
            None => ctx.api.auth().current_user().await,
        }
    }
    .await;

    match result {
        Ok(user) => {
            info!(user = %user.email, "logged in");
            ctx.set_user(Some(user.clone()));
            Ok(user)
        }
        Err(e) => {
            warn!(error = %e, "login failed");
            ctx.api.set_token(None);
            ctx.set_user(None);
            Err(e)
        }
    }
}

/// 注册新账户，不会自动登录
pub async fn register<C: HttpClient>(ctx: &AuthContext<C>, request: &RegisterRequest) -> ApiResult<()> {
    ctx.api.auth().register(request).await
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout<C: HttpClient>(ctx: &AuthContext<C>) {
    if let Some(user) = ctx.user() {
        info!(user = %user.email, "logged out");
    }
    ctx.api.set_token(None);
    ctx.set_user(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_portal::MockHttpClient;
    use niche_portal::shared::protocol::HttpMethod;
    use niche_portal::shared::{HEADER_AUTHORIZATION, Role};
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn context() -> AuthContext<MockHttpClient> {
        AuthContext::new(ApiClient::new(MockHttpClient::new(), BASE))
    }

    fn mock_me(ctx: &AuthContext<MockHttpClient>, status: u16) {
        ctx.api().http().mock_response(
            HttpMethod::Get,
            "http://api.test/api/auth/get-current-user",
            status,
            json!({ "id": "u1", "name": "Minh", "email": "minh@x.vn", "role": "Customer" }),
        );
    }

    #[test]
    fn test_starts_loading_without_user() {
        let ctx = context();
        assert!(ctx.is_loading());
        assert!(ctx.user().is_none());
    }

    #[tokio::test]
    async fn test_init_without_token_resolves_to_anonymous() {
        let ctx = context();
        init_auth(&ctx).await;
        assert_eq!(
            ctx.state(),
            AuthState {
                user: None,
                loading: false
            }
        );
        assert!(ctx.api().http().requests().is_empty());
    }

    #[tokio::test]
    async fn test_init_with_token_restores_user() {
        let ctx = context();
        ctx.api().set_token(Some("saved".to_string()));
        mock_me(&ctx, 200);

        init_auth(&ctx).await;
        assert!(!ctx.is_loading());
        assert_eq!(ctx.user().map(|u| u.id), Some("u1".to_string()));
    }

    #[tokio::test]
    async fn test_init_with_rejected_token_clears_it() {
        let ctx = context();
        ctx.api().set_token(Some("stale".to_string()));
        mock_me(&ctx, 401);

        init_auth(&ctx).await;
        assert!(!ctx.is_authenticated());
        assert!(ctx.api().token().is_none());
    }

    #[tokio::test]
    async fn test_login_uses_user_from_response() {
        let ctx = context();
        ctx.api().http().mock_response(
            HttpMethod::Post,
            "http://api.test/api/auth/login",
            200,
            json!({ "token": "jwt", "user": { "id": "s1", "name": "Hoa", "email": "hoa@x.vn", "role": "Manager" } }),
        );

        let user = login(&ctx, "hoa@x.vn", "pw").await.unwrap();
        assert_eq!(user.role, Role::Manager);
        assert!(ctx.is_authenticated());
        assert!(!ctx.is_loading());
        assert_eq!(ctx.api().token().as_deref(), Some("jwt"));
        assert_eq!(ctx.api().http().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_login_fetches_user_when_missing() {
        let ctx = context();
        ctx.api().http().mock_response(
            HttpMethod::Post,
            "http://api.test/api/auth/login",
            200,
            json!({ "token": "jwt" }),
        );
        mock_me(&ctx, 200);

        let user = login(&ctx, "minh@x.vn", "pw").await.unwrap();
        assert_eq!(user.name, "Minh");

        let me = ctx.api().http().last_request().unwrap();
        assert_eq!(
            me.headers.get(HEADER_AUTHORIZATION).map(String::as_str),
            Some("Bearer jwt")
        );
    }

    #[tokio::test]
    async fn test_login_failure_leaves_anonymous() {
        let ctx = context();
        ctx.api().http().mock_raw(
            HttpMethod::Post,
            "http://api.test/api/auth/login",
            401,
            "bad credentials",
        );

        let err = login(&ctx, "x@x.vn", "nope").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(
            ctx.state(),
            AuthState {
                user: None,
                loading: false
            }
        );
        assert!(ctx.api().token().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_user_and_token() {
        let ctx = context();
        ctx.api().http().mock_response(
            HttpMethod::Post,
            "http://api.test/api/auth/login",
            200,
            json!({ "token": "jwt", "user": { "id": "u1", "name": "Minh", "email": "minh@x.vn" } }),
        );
        login(&ctx, "minh@x.vn", "pw").await.unwrap();

        let shared = ctx.clone();
        logout(&ctx);
        assert!(shared.user().is_none());
        assert!(ctx.api().token().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let ctx = context();
        let mut rx = ctx.subscribe();
        init_auth(&ctx).await;
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().loading);
    }
}
