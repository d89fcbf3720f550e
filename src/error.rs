use std::fmt;

use niche_portal_shared::protocol::PathError;

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorStatus {
    /// 网络层失败（连接、DNS、TLS 等）
    Transport,
    /// 后端返回非 2xx（401/403 除外）
    Http(u16),
    /// 401/403: 鉴权失败
    Unauthorized,
    /// JSON 解析或序列化错误
    Serialization,
    /// 本地参数校验失败（路径参数、空购物车等）
    InvalidInput,
}

impl ApiErrorStatus {
    /// 对应的 HTTP 状态码，本地错误没有状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiErrorStatus::Http(code) => Some(*code),
            ApiErrorStatus::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorStatus::Transport => "TRANSPORT_ERROR",
            ApiErrorStatus::Http(_) => "HTTP_ERROR",
            ApiErrorStatus::Unauthorized => "UNAUTHORIZED",
            ApiErrorStatus::Serialization => "JSON_PARSE_ERROR",
            ApiErrorStatus::InvalidInput => "INVALID_INPUT",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    /// 操作名称，如 "buildings.floors", "auth.login"
    pub operation: String,
    /// 额外的细节信息，如 building id
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 客户端错误
///
/// - status: 错误类型/语义
/// - message: 错误消息（HTTP 错误时为响应体）
/// - source: 原始错误（可选，用于错误链）
/// - spans: 结构化的调用追踪栈
#[derive(Debug)]
pub struct ApiError {
    pub status: ApiErrorStatus,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    spans: Vec<ErrorSpan>,
}

impl ApiError {
    pub fn new(status: ApiErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Transport, message)
    }

    /// 非 2xx 响应。401/403 归为 `Unauthorized`
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::new(ApiErrorStatus::Unauthorized, body),
            _ => Self::new(ApiErrorStatus::Http(status), body),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Unauthorized, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Serialization, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::InvalidInput, message)
    }

    // --- Context builders ---

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    /// 设置原始错误源
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn status_code(&self) -> Option<u16> {
        self.status.status_code()
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == ApiErrorStatus::Unauthorized
    }
}

// =========================================================
// Display & Error trait 实现
// =========================================================

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.error_code())?;
        if let ApiErrorStatus::Http(code) = self.status {
            write!(f, " {}", code)?;
        }
        write!(f, "] {}", self.message)?;

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// 类型转换实现
// =========================================================

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::transport(e.to_string()).with_source(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::serialization(e.to_string()).with_source(e)
    }
}

impl From<PathError> for ApiError {
    fn from(e: PathError) -> Self {
        ApiError::invalid_input(e.to_string()).with_source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_http_maps_auth_statuses() {
        assert_eq!(ApiError::http(401, "").status, ApiErrorStatus::Unauthorized);
        assert_eq!(ApiError::http(403, "").status, ApiErrorStatus::Unauthorized);
        assert_eq!(ApiError::http(500, "").status, ApiErrorStatus::Http(500));
        assert_eq!(ApiError::http(500, "").status_code(), Some(500));
        assert_eq!(ApiError::transport("down").status_code(), None);
    }

    #[test]
    fn test_display_with_spans() {
        let err = ApiError::http(404, "Not Found")
            .in_op_with("buildings.floors", "B1")
            .in_op("dashboard.load");
        assert_eq!(
            err.to_string(),
            "[HTTP_ERROR 404] Not Found | trace: buildings.floors(B1) -> dashboard.load"
        );
        assert_eq!(err.spans().len(), 2);
    }

    #[test]
    fn test_source_is_kept_for_serde_errors() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ApiError::from(serde_err);
        assert_eq!(err.status, ApiErrorStatus::Serialization);
        assert!(err.source().is_some());
    }
}
