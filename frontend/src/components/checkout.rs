use niche_portal::{ApiClient, ApiResult, HttpClient};
use niche_portal_shared::format::format_vnd;
use niche_portal_shared::{CreatePaymentRequest, PaymentLink, ServiceOrder};
use serde::Serialize;

use crate::cart::CartContext;

const ORDER_TYPE: &str = "billpayment";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRow {
    pub service_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// 结账页面的显示数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub rows: Vec<CheckoutRow>,
    pub total: String,
}

impl CheckoutView {
    pub fn from_cart(cart: &CartContext) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| CheckoutRow {
                service_id: item.service.service_id.clone(),
                name: item.service.service_name.clone(),
                quantity: item.quantity,
                unit_price: format_vnd(item.service.price),
                line_total: format_vnd(item.line_total()),
            })
            .collect();
        Self {
            rows,
            total: format_vnd(cart.total()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResult {
    pub order: ServiceOrder,
    pub payment: PaymentLink,
}

/// 下单并生成支付链接
///
/// 金额在下单前读取，下单成功后购物车会被清空。
/// 支付链接创建失败时订单已存在，错误中带有订单号，可用 [`pay_order`] 重试。
pub async fn pay<C: HttpClient>(
    cart: &CartContext,
    api: &ApiClient<C>,
    customer_id: &str,
    niche_id: &str,
) -> ApiResult<PaymentResult> {
    let amount = cart.total();
    let order = cart.checkout(api, customer_id, niche_id).await?;
    let payment = pay_order(api, &order, amount).await?;
    Ok(PaymentResult { order, payment })
}

/// 为已创建的服务订单生成支付链接
pub async fn pay_order<C: HttpClient>(
    api: &ApiClient<C>,
    order: &ServiceOrder,
    amount: f64,
) -> ApiResult<PaymentLink> {
    let order_info = match &order.service_order_id {
        Some(id) => format!("Thanh toán đơn dịch vụ {}", id),
        None => format!("Thanh toán dịch vụ cho ô {}", order.niche_id),
    };
    api.payments()
        .create_payment(&CreatePaymentRequest {
            amount,
            order_info,
            order_type: ORDER_TYPE.to_string(),
        })
        .await
        .map_err(|e| {
            e.in_op_with(
                "checkout.pay",
                format!(
                    "order={} customer={}",
                    order.service_order_id.as_deref().unwrap_or("-"),
                    order.customer_id
                ),
            )
        })
}
