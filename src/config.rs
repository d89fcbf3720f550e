use crate::api::{ApiClient, RequestIdInterceptor};
use crate::request::{HttpClient, ReqwestHttpClient};

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 环境变量中没有定义时使用这些默认值
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const ENV_BASE_URL: &str = "NICHE_API_BASE_URL";
pub const ENV_TOKEN: &str = "NICHE_API_TOKEN";
pub const ENV_REQUEST_ID: &str = "NICHE_API_REQUEST_ID";

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// 是否启用 `X-Request-Id` 拦截器
    pub request_id: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            request_id: false,
        }
    }
}

impl ClientConfig {
    /// 从进程环境读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数读取，读不到的项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: non_empty(ENV_TOKEN),
            request_id: non_empty(ENV_REQUEST_ID)
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// 用指定传输层构建客户端
    pub fn build_with<C: HttpClient>(&self, http: C) -> ApiClient<C> {
        let builder = ApiClient::builder(http, &self.base_url).token(self.token.clone());
        if self.request_id {
            builder.interceptor(RequestIdInterceptor).build()
        } else {
            builder.build()
        }
    }

    /// 构建生产客户端
    pub fn build(&self) -> ApiClient<ReqwestHttpClient> {
        self.build_with(ReqwestHttpClient::new())
    }
}
