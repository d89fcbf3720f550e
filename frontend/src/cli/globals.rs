use niche_portal::{ApiClient, ClientConfig, HttpClient, ReqwestHttpClient};

use crate::web::Portal;

/// 所有子命令共享的连接参数
#[derive(Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub base_url: String,
    pub portal: Portal,
    pub token: Option<String>,
    pub request_id: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            request_id: self.request_id,
        }
    }

    #[must_use]
    pub fn client(&self) -> ApiClient<ReqwestHttpClient> {
        self.config().build()
    }

    #[must_use]
    pub fn client_with<C: HttpClient>(&self, http: C) -> ApiClient<C> {
        self.config().build_with(http)
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("base_url", &self.base_url)
            .field("portal", &self.portal)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("request_id", &self.request_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let args = GlobalArgs {
            base_url: "http://localhost:5000".to_string(),
            portal: Portal::Staff,
            token: Some("secret-token".to_string()),
            request_id: false,
        };
        let printed = format!("{:?}", args);
        assert!(printed.contains("***"));
        assert!(!printed.contains("secret-token"));
    }

    #[test]
    fn test_client_carries_token() {
        let args = GlobalArgs {
            base_url: "http://api.test/".to_string(),
            portal: Portal::Customer,
            token: Some("abc".to_string()),
            request_id: true,
        };
        let api = args.client();
        assert_eq!(api.token().as_deref(), Some("abc"));
        assert_eq!(api.url("/api/Services"), "http://api.test/api/Services");
    }
}
