//! 购物车上下文（客户门户）
//!
//! 只在一次结账流程内存在，不做持久化。

use std::sync::{Arc, Mutex};

use niche_portal::{ApiClient, ApiError, ApiResult, HttpClient};
use niche_portal_shared::{Service, ServiceOrder, ServiceOrderItem};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub service: Service,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.service.price * f64::from(self.quantity)
    }
}

#[derive(Clone, Default)]
pub struct CartContext {
    items: Arc<Mutex<Vec<CartItem>>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut Vec<CartItem>) -> R) -> R {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut items)
    }

    /// 加入购物车；已存在的服务累加数量
    pub fn add(&self, service: Service, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.with_items(|items| {
            match items
                .iter_mut()
                .find(|i| i.service.service_id == service.service_id)
            {
                Some(item) => item.quantity = item.quantity.saturating_add(quantity),
                None => items.push(CartItem { service, quantity }),
            }
        });
    }

    /// 设置数量，0 表示移除
    pub fn set_quantity(&self, service_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(service_id);
            return;
        }
        self.with_items(|items| {
            if let Some(item) = items
                .iter_mut()
                .find(|i| i.service.service_id == service_id)
            {
                item.quantity = quantity;
            }
        });
    }

    pub fn remove(&self, service_id: &str) {
        self.with_items(|items| items.retain(|i| i.service.service_id != service_id));
    }

    pub fn clear(&self) {
        self.with_items(|items| items.clear());
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.with_items(|items| items.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.with_items(|items| items.is_empty())
    }

    pub fn total(&self) -> f64 {
        self.with_items(|items| items.iter().map(CartItem::line_total).sum())
    }

    /// 提交服务订单，仅在成功后清空购物车
    pub async fn checkout<C: HttpClient>(
        &self,
        api: &ApiClient<C>,
        customer_id: &str,
        niche_id: &str,
    ) -> ApiResult<ServiceOrder> {
        let items: Vec<ServiceOrderItem> = self.with_items(|items| {
            items
                .iter()
                .map(|i| ServiceOrderItem {
                    service_id: i.service.service_id.clone(),
                    quantity: i.quantity,
                })
                .collect()
        });
        if items.is_empty() {
            return Err(ApiError::invalid_input("cart is empty").in_op("cart.checkout"));
        }

        let order = ServiceOrder {
            service_order_id: None,
            customer_id: customer_id.to_string(),
            niche_id: niche_id.to_string(),
            items,
        };
        let created = api.service_orders().create(&order).await?;
        info!(customer = customer_id, items = order.items.len(), "service order placed");
        self.clear();
        Ok(created)
    }
}
