//! 墓位预订门户的客户端层
//!
//! - `request`: HTTP 传输抽象（`HttpClient` trait 及其实现）
//! - `api`: 共享的 `ApiClient`（基础 URL、默认请求头、令牌、拦截器）
//! - `services`: 每个后端资源一个服务门面
//! - `config`: 从环境变量读取客户端配置
//! - `error`: 统一错误类型

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod services;

pub use api::{ApiClient, Interceptor, PassThrough, RequestIdInterceptor};
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorStatus, ApiResult};
pub use request::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};

#[cfg(any(test, feature = "mock"))]
pub use request::{MockHttpClient, RecordedRequest};

pub use niche_portal_shared as shared;
