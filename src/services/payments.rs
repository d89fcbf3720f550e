use niche_portal_shared::protocol::Endpoint;
use niche_portal_shared::{CreatePaymentRequest, PaymentLink};

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct PaymentApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> PaymentApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    /// 创建支付，返回跳转链接
    pub async fn create_payment(&self, request: &CreatePaymentRequest) -> ApiResult<PaymentLink> {
        self.client
            .request_with(Endpoint::PaymentCreate, &[], request)
            .await
    }
}
