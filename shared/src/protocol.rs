use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// Endpoint Table
// =========================================================

/// 后端接口表：每个领域操作对应一个固定的 (动词, 路径模板)。
///
/// 模板中的 `{...}` 占位符按出现顺序由 [`Endpoint::path`] 填充。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AuthLogin,
    AuthRegister,
    AuthCurrentUser,

    BuildingsAll,
    BuildingGet,
    FloorsList,
    FloorGet,
    AreasList,
    NichesList,
    NicheGet,

    ContractsByCustomer,
    ContractGet,
    ContractCreate,
    ContractUpdate,

    ServicesList,
    ServiceGet,
    ServiceCreate,
    ServiceUpdate,
    ServiceDelete,

    ServiceOrderCreate,
    ServiceOrdersByCustomer,

    VisitRegistrationsList,
    VisitRegistrationGet,
    VisitRegistrationCreate,
    VisitRegistrationUpdate,
    VisitRegistrationDelete,

    NicheReservationsList,
    NicheReservationGet,
    NicheReservationCreate,
    NicheReservationUpdate,
    NicheReservationDelete,

    PaymentCreate,

    CustomersList,
    CustomerGet,
    CustomerCreate,
    CustomerUpdate,

    EmployeesList,
    EmployeeGet,
    EmployeeCreate,
    EmployeeUpdate,
    EmployeeDelete,
}

const NICHES: &str = "/api/Buildings/{buildingId}/floors/{floorId}/areas/{areaId}/niches";

impl Endpoint {
    pub const ALL: [Endpoint; 41] = [
        Endpoint::AuthLogin,
        Endpoint::AuthRegister,
        Endpoint::AuthCurrentUser,
        Endpoint::BuildingsAll,
        Endpoint::BuildingGet,
        Endpoint::FloorsList,
        Endpoint::FloorGet,
        Endpoint::AreasList,
        Endpoint::NichesList,
        Endpoint::NicheGet,
        Endpoint::ContractsByCustomer,
        Endpoint::ContractGet,
        Endpoint::ContractCreate,
        Endpoint::ContractUpdate,
        Endpoint::ServicesList,
        Endpoint::ServiceGet,
        Endpoint::ServiceCreate,
        Endpoint::ServiceUpdate,
        Endpoint::ServiceDelete,
        Endpoint::ServiceOrderCreate,
        Endpoint::ServiceOrdersByCustomer,
        Endpoint::VisitRegistrationsList,
        Endpoint::VisitRegistrationGet,
        Endpoint::VisitRegistrationCreate,
        Endpoint::VisitRegistrationUpdate,
        Endpoint::VisitRegistrationDelete,
        Endpoint::NicheReservationsList,
        Endpoint::NicheReservationGet,
        Endpoint::NicheReservationCreate,
        Endpoint::NicheReservationUpdate,
        Endpoint::NicheReservationDelete,
        Endpoint::PaymentCreate,
        Endpoint::CustomersList,
        Endpoint::CustomerGet,
        Endpoint::CustomerCreate,
        Endpoint::CustomerUpdate,
        Endpoint::EmployeesList,
        Endpoint::EmployeeGet,
        Endpoint::EmployeeCreate,
        Endpoint::EmployeeUpdate,
        Endpoint::EmployeeDelete,
    ];

    /// (动词, 路径模板)
    pub fn route(&self) -> (HttpMethod, &'static str) {
        use HttpMethod::*;
        match self {
            Endpoint::AuthLogin => (Post, "/api/auth/login"),
            Endpoint::AuthRegister => (Post, "/api/auth/register"),
            Endpoint::AuthCurrentUser => (Get, "/api/auth/get-current-user"),

            Endpoint::BuildingsAll => (Get, "/api/Buildings/all"),
            Endpoint::BuildingGet => (Get, "/api/Buildings/{buildingId}"),
            Endpoint::FloorsList => (Get, "/api/Buildings/{buildingId}/floors"),
            Endpoint::FloorGet => (Get, "/api/Buildings/{buildingId}/floors/{floorId}"),
            Endpoint::AreasList => (Get, "/api/Buildings/{buildingId}/floors/{floorId}/areas"),
            Endpoint::NichesList => (Get, NICHES),
            Endpoint::NicheGet => (
                Get,
                "/api/Buildings/{buildingId}/floors/{floorId}/areas/{areaId}/niches/{nicheId}",
            ),

            Endpoint::ContractsByCustomer => (Get, "/api/Contracts/{customerId}/list"),
            Endpoint::ContractGet => (Get, "/api/Contracts/{contractId}"),
            Endpoint::ContractCreate => (Post, "/api/Contracts"),
            Endpoint::ContractUpdate => (Put, "/api/Contracts/{contractId}"),

            Endpoint::ServicesList => (Get, "/api/Services"),
            Endpoint::ServiceGet => (Get, "/api/Services/{serviceId}"),
            Endpoint::ServiceCreate => (Post, "/api/Services"),
            Endpoint::ServiceUpdate => (Put, "/api/Services/{serviceId}"),
            Endpoint::ServiceDelete => (Delete, "/api/Services/{serviceId}"),

            Endpoint::ServiceOrderCreate => (Post, "/api/ServiceOrders"),
            Endpoint::ServiceOrdersByCustomer => (Get, "/api/ServiceOrders/{customerId}/list"),

            Endpoint::VisitRegistrationsList => (Get, "/api/VisitRegistrations"),
            Endpoint::VisitRegistrationGet => (Get, "/api/VisitRegistrations/{visitId}"),
            Endpoint::VisitRegistrationCreate => (Post, "/api/VisitRegistrations"),
            Endpoint::VisitRegistrationUpdate => (Put, "/api/VisitRegistrations/{visitId}"),
            Endpoint::VisitRegistrationDelete => (Delete, "/api/VisitRegistrations/{visitId}"),

            Endpoint::NicheReservationsList => (Get, "/api/NicheReservations"),
            Endpoint::NicheReservationGet => (Get, "/api/NicheReservations/{reservationId}"),
            Endpoint::NicheReservationCreate => (Post, "/api/NicheReservations"),
            Endpoint::NicheReservationUpdate => (Put, "/api/NicheReservations/{reservationId}"),
            Endpoint::NicheReservationDelete => {
                (Delete, "/api/NicheReservations/{reservationId}")
            }

            Endpoint::PaymentCreate => (Post, "/api/Payments/create-payment"),

            Endpoint::CustomersList => (Get, "/api/Customers"),
            Endpoint::CustomerGet => (Get, "/api/Customers/{customerId}"),
            Endpoint::CustomerCreate => (Post, "/api/Customers"),
            Endpoint::CustomerUpdate => (Put, "/api/Customers/{customerId}"),

            Endpoint::EmployeesList => (Get, "/api/employees"),
            Endpoint::EmployeeGet => (Get, "/api/employees/{employeeId}"),
            Endpoint::EmployeeCreate => (Post, "/api/employees"),
            Endpoint::EmployeeUpdate => (Put, "/api/employees/{employeeId}"),
            Endpoint::EmployeeDelete => (Delete, "/api/employees/{employeeId}"),
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.route().0
    }

    pub fn template(&self) -> &'static str {
        self.route().1
    }

    /// 模板中占位符的数量
    pub fn arity(&self) -> usize {
        self.template().matches('{').count()
    }

    /// 按顺序用 `params` 填充模板占位符
    pub fn path(&self, params: &[&str]) -> Result<String, PathError> {
        let template = self.template();
        let expected = self.arity();
        if params.len() != expected {
            return Err(PathError::Arity {
                endpoint: *self,
                expected,
                got: params.len(),
            });
        }

        let mut out = String::with_capacity(template.len());
        let mut params = params.iter();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let end = rest[start..]
                .find('}')
                .map(|i| start + i)
                .ok_or(PathError::Template(*self))?;
            let value = params.next().ok_or(PathError::Template(*self))?;
            if !is_valid_segment(value) {
                return Err(PathError::Segment(value.to_string()));
            }
            out.push_str(value);
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (method, template) = self.route();
        write!(f, "{} {}", method, template)
    }
}

// 标识符只能作为单个路径段使用
fn is_valid_segment(value: &str) -> bool {
    !value.is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

// =========================================================
// Path Errors
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// 参数数量与模板不符
    Arity {
        endpoint: Endpoint,
        expected: usize,
        got: usize,
    },
    /// 参数不是合法的路径段
    Segment(String),
    /// 模板本身格式错误
    Template(Endpoint),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Arity {
                endpoint,
                expected,
                got,
            } => write!(
                f,
                "{:?} expects {} path parameter(s), got {}",
                endpoint, expected, got
            ),
            PathError::Segment(value) => write!(f, "invalid path segment: {:?}", value),
            PathError::Template(endpoint) => write!(f, "malformed template for {:?}", endpoint),
        }
    }
}

impl std::error::Error for PathError {}
