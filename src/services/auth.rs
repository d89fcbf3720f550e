use niche_portal_shared::protocol::Endpoint;
use niche_portal_shared::{LoginRequest, LoginResponse, RegisterRequest, User};
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct AuthApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.client
            .request_with(Endpoint::AuthLogin, &[], credentials)
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::AuthRegister, &[], request)
            .await
            .map(|_| ())
    }

    /// 需要客户端已携带令牌
    pub async fn current_user(&self) -> ApiResult<User> {
        self.client.request(Endpoint::AuthCurrentUser, &[]).await
    }
}
