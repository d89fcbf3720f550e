use niche_portal::HttpClient;
use niche_portal_shared::User;

use crate::auth::{AuthContext, login};

pub const MSG_MISSING_FIELDS: &str = "Vui lòng điền đầy đủ thông tin";
pub const MSG_LOGIN_FAILED: &str = "Đăng nhập thất bại. Vui lòng kiểm tra email và mật khẩu.";

/// 登录表单状态
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub is_submitting: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// 提交表单，成功返回登录用户
    ///
    /// 失败原因只写入 `error`，不向界面暴露后端细节。
    pub async fn submit<C: HttpClient>(&mut self, ctx: &AuthContext<C>) -> Option<User> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(MSG_MISSING_FIELDS.to_string());
            return None;
        }

        self.is_submitting = true;
        self.error = None;

        let result = login(ctx, self.email.trim(), &self.password).await;
        self.is_submitting = false;

        match result {
            Ok(user) => {
                self.password.clear();
                Some(user)
            }
            Err(_) => {
                self.error = Some(MSG_LOGIN_FAILED.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_portal::shared::protocol::HttpMethod;
    use niche_portal::{ApiClient, MockHttpClient};
    use serde_json::json;

    fn context() -> AuthContext<MockHttpClient> {
        AuthContext::new(ApiClient::new(MockHttpClient::new(), "http://api.test"))
    }

    #[tokio::test]
    async fn test_missing_fields_skip_request() {
        let ctx = context();
        let mut form = LoginForm::new("  ", "pw");
        assert!(form.submit(&ctx).await.is_none());
        assert_eq!(form.error.as_deref(), Some(MSG_MISSING_FIELDS));
        assert!(ctx.api().http().requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_sets_generic_error() {
        let ctx = context();
        let mut form = LoginForm::new("a@x.vn", "wrong");
        assert!(form.submit(&ctx).await.is_none());
        assert_eq!(form.error.as_deref(), Some(MSG_LOGIN_FAILED));
        assert!(!form.is_submitting);
    }

    #[tokio::test]
    async fn test_successful_login_clears_password() {
        let ctx = context();
        ctx.api().http().mock_response(
            HttpMethod::Post,
            "http://api.test/api/auth/login",
            200,
            json!({ "token": "t", "user": { "id": "1", "name": "A", "email": "a@x.vn" } }),
        );
        let mut form = LoginForm::new(" a@x.vn ", "pw");
        let user = form.submit(&ctx).await.unwrap();
        assert_eq!(user.email, "a@x.vn");
        assert!(form.password.is_empty());
        assert!(form.error.is_none());

        let sent = ctx.api().http().last_request().unwrap().body_json().unwrap();
        assert_eq!(sent["email"], "a@x.vn");
    }
}
