//! 服务模块：每个后端资源一个门面
//!
//! 每个函数只做一件事：从接口表取出 (动词, 路径模板)，填入路径参数，
//! 交给共享的 [`ApiClient`]。不做校验、缓存或重试，错误原样返回。

mod auth;
mod buildings;
mod catalog;
mod contracts;
mod customers;
mod employees;
mod niche_reservations;
mod niches;
mod payments;
mod service_orders;
mod visit_registrations;


pub use auth::AuthApi;
pub use buildings::BuildingApi;
pub use catalog::ServiceApi;
pub use contracts::ContractApi;
pub use customers::CustomerApi;
pub use employees::EmployeeApi;
pub use niche_reservations::NicheReservationApi;
pub use niches::NicheApi;
pub use payments::PaymentApi;
pub use service_orders::ServiceOrderApi;
pub use visit_registrations::VisitRegistrationApi;

use crate::api::ApiClient;
use crate::request::HttpClient;

impl<C: HttpClient> ApiClient<C> {
    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(self)
    }

    pub fn buildings(&self) -> BuildingApi<'_, C> {
        BuildingApi::new(self)
    }

    pub fn niches(&self) -> NicheApi<'_, C> {
        NicheApi::new(self)
    }

    pub fn contracts(&self) -> ContractApi<'_, C> {
        ContractApi::new(self)
    }

    pub fn services(&self) -> ServiceApi<'_, C> {
        ServiceApi::new(self)
    }

    pub fn service_orders(&self) -> ServiceOrderApi<'_, C> {
        ServiceOrderApi::new(self)
    }

    pub fn visit_registrations(&self) -> VisitRegistrationApi<'_, C> {
        VisitRegistrationApi::new(self)
    }

    pub fn niche_reservations(&self) -> NicheReservationApi<'_, C> {
        NicheReservationApi::new(self)
    }

    pub fn payments(&self) -> PaymentApi<'_, C> {
        PaymentApi::new(self)
    }

    pub fn customers(&self) -> CustomerApi<'_, C> {
        CustomerApi::new(self)
    }

    pub fn employees(&self) -> EmployeeApi<'_, C> {
        EmployeeApi::new(self)
    }
}
