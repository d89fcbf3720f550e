use std::sync::{Arc, RwLock};

use niche_portal_shared::protocol::{Endpoint, HttpMethod};
use niche_portal_shared::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_REQUEST_ID};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};

// =========================================================
// 拦截器 (Interceptors)
// =========================================================

/// 请求/响应拦截器
///
/// 默认实现原样透传：不改写负载，也不重试。
pub trait Interceptor: Send + Sync {
    fn on_request(&self, req: HttpRequest) -> HttpRequest {
        req
    }

    fn on_response(&self, resp: HttpResponse) -> HttpResponse {
        resp
    }
}

/// 什么都不做的拦截器
pub struct PassThrough;

impl Interceptor for PassThrough {}

/// 为每个请求附加 `X-Request-Id`（uuid v4）
pub struct RequestIdInterceptor;

impl Interceptor for RequestIdInterceptor {
    fn on_request(&self, req: HttpRequest) -> HttpRequest {
        let id = uuid::Uuid::new_v4().to_string();
        req.with_header(HEADER_REQUEST_ID, &id)
    }
}

// =========================================================
// ApiClient
// =========================================================

struct ClientInner<C> {
    http: C,
    base_url: String,
    default_headers: Vec<(String, String)>,
    token: RwLock<Option<String>>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

/// 共享的 API 客户端
///
/// 克隆开销很小，所有克隆共享同一个令牌。
pub struct ApiClient<C> {
    inner: Arc<ClientInner<C>>,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

pub struct ApiClientBuilder<C> {
    http: C,
    base_url: String,
    default_headers: Vec<(String, String)>,
    token: Option<String>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl<C: HttpClient> ApiClientBuilder<C> {
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.default_headers
            .retain(|(k, _)| !k.eq_ignore_ascii_case(key));
        self.default_headers
            .push((key.to_string(), value.to_string()));
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> ApiClient<C> {
        ApiClient {
            inner: Arc::new(ClientInner {
                http: self.http,
                base_url: self.base_url,
                default_headers: self.default_headers,
                token: RwLock::new(self.token),
                interceptors: self.interceptors,
            }),
        }
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, base_url: &str) -> Self {
        Self::builder(http, base_url).build()
    }

    pub fn builder(http: C, base_url: &str) -> ApiClientBuilder<C> {
        ApiClientBuilder {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![
                ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
                ("Accept".to_string(), CONTENT_TYPE_JSON.to_string()),
            ],
            token: None,
            interceptors: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// 底层传输实现（测试中用来检查记录的请求）
    pub fn http(&self) -> &C {
        &self.inner.http
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }

    // --- 令牌 ---

    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 设置或清除 Bearer 令牌，对所有克隆生效
    pub fn set_token(&self, token: Option<String>) {
        *self.inner.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    // --- 动词 ---

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<(), T>(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<(), T>(HttpMethod::Delete, path, None).await
    }

    // --- 接口表 ---

    /// 按接口表发送无请求体的调用
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[&str],
    ) -> ApiResult<T> {
        let path = endpoint.path(params)?;
        self.send::<(), T>(endpoint.method(), &path, None).await
    }

    /// 按接口表发送带 JSON 请求体的调用
    pub async fn request_with<B, T>(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        body: &B,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = endpoint.path(params)?;
        self.send(endpoint.method(), &path, Some(body)).await
    }

    async fn send<B, T>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let mut req = HttpRequest::new(&url, method);
        for (k, v) in &self.inner.default_headers {
            req = req.with_header(k, v);
        }
        if let Some(token) = self.token() {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req.with_body(serde_json::to_value(body)?);
        }

        for interceptor in &self.inner.interceptors {
            req = interceptor.on_request(req);
        }

        debug!(method = %method, url = %url, "sending request");
        let mut resp = self.inner.http.send(req).await?;

        for interceptor in &self.inner.interceptors {
            resp = interceptor.on_response(resp);
        }
        debug!(method = %method, url = %url, status = resp.status, "received response");

        if !resp.ok() {
            return Err(ApiError::http(resp.status, resp.body));
        }
        resp.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorStatus;
    use crate::request::MockHttpClient;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client() -> ApiClient<MockHttpClient> {
        ApiClient::new(MockHttpClient::new(), "http://api.test/")
    }

    #[test]
    fn test_url_joins_base() {
        let api = client();
        assert_eq!(api.base_url(), BASE);
        assert_eq!(api.url("/api/Services"), "http://api.test/api/Services");
        assert_eq!(api.url("api/Services"), "http://api.test/api/Services");
    }

    #[tokio::test]
    async fn test_default_headers_and_body() {
        let api = client();
        api.http().mock_response(
            HttpMethod::Post,
            "http://api.test/api/x",
            200,
            json!({ "ok": true }),
        );

        let resp: serde_json::Value = api.post("/api/x", &json!({ "a": 1 })).await.unwrap();
        assert_eq!(resp, json!({ "ok": true }));

        let req = api.http().last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(!req.headers.contains_key(HEADER_AUTHORIZATION));
        assert_eq!(req.body_json(), Some(json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn test_token_is_shared_between_clones() {
        let api = client();
        let clone = api.clone();
        api.http()
            .mock_response(HttpMethod::Get, "http://api.test/api/me", 200, json!(null));

        api.set_token(Some("t0k".to_string()));
        let _: () = clone.get("/api/me").await.unwrap();
        let req = api.http().last_request().unwrap();
        assert_eq!(
            req.headers.get(HEADER_AUTHORIZATION).map(String::as_str),
            Some("Bearer t0k")
        );

        clone.set_token(None);
        let _: () = api.get("/api/me").await.unwrap();
        let req = api.http().last_request().unwrap();
        assert!(!req.headers.contains_key(HEADER_AUTHORIZATION));
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_and_body() {
        let api = client();
        api.http()
            .mock_raw(HttpMethod::Get, "http://api.test/api/boom", 500, "kaboom");

        let err = api.get::<serde_json::Value>("/api/boom").await.unwrap_err();
        assert_eq!(err.status, ApiErrorStatus::Http(500));
        assert_eq!(err.message(), "kaboom");

        let err = api
            .get::<serde_json::Value>("/api/unmocked")
            .await
            .unwrap_err();
        assert_eq!(err.status, ApiErrorStatus::Http(404));
    }

    #[tokio::test]
    async fn test_unauthorized_maps() {
        let api = client();
        api.http()
            .mock_raw(HttpMethod::Delete, "http://api.test/api/x", 401, "");
        let err = api.delete::<()>("/api/x").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_request_rejects_bad_params_without_sending() {
        let api = client();
        let err = api
            .request::<serde_json::Value>(Endpoint::FloorsList, &[])
            .await
            .unwrap_err();
        assert_eq!(err.status, ApiErrorStatus::InvalidInput);
        assert!(api.http().requests().is_empty());
    }

    #[tokio::test]
    async fn test_pass_through_interceptor_leaves_request_untouched() {
        let api = ApiClient::builder(MockHttpClient::new(), BASE)
            .interceptor(PassThrough)
            .build();
        api.http()
            .mock_response(HttpMethod::Get, "http://api.test/api/x", 200, json!(1));

        let value: u32 = api.get("/api/x").await.unwrap();
        assert_eq!(value, 1);
        let req = api.http().last_request().unwrap();
        assert_eq!(req.headers.len(), 2);
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_request_id_interceptor_stamps_header() {
        let api = ApiClient::builder(MockHttpClient::new(), BASE)
            .interceptor(RequestIdInterceptor)
            .build();
        let _ = api.get::<()>("/api/x").await;
        let _ = api.get::<()>("/api/x").await;

        let ids: Vec<String> = api
            .http()
            .requests()
            .iter()
            .filter_map(|r| r.headers.get(HEADER_REQUEST_ID).cloned())
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert!(uuid::Uuid::parse_str(&ids[0]).is_ok());
    }

    #[tokio::test]
    async fn test_builder_header_overrides_default() {
        let api = ApiClient::builder(MockHttpClient::new(), BASE)
            .header("accept", "text/plain")
            .build();
        let _ = api.get::<()>("/api/x").await;
        let req = api.http().last_request().unwrap();
        assert_eq!(req.headers.get("accept").map(String::as_str), Some("text/plain"));
        assert!(!req.headers.contains_key("Accept"));
    }
}
