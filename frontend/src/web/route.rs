//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，定义两个门户的所有路由及其属性。

use std::fmt::Display;

/// 门户：客户端与员工端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Portal {
    Customer,
    Staff,
}

impl Portal {
    pub fn name(&self) -> &'static str {
        match self {
            Portal::Customer => "customer",
            Portal::Staff => "staff",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "customer" => Some(Portal::Customer),
            "staff" => Some(Portal::Staff),
            _ => None,
        }
    }

    /// 登录成功后的默认落地页
    pub fn home(&self) -> AppRoute {
        match self {
            Portal::Customer => AppRoute::Home,
            Portal::Staff => AppRoute::Dashboard,
        }
    }

    /// 认证失败时的重定向目标
    pub fn login(&self) -> AppRoute {
        AppRoute::Login
    }
}

impl Display for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 应用路由枚举
///
/// 两个门户共用一个枚举；某个路由是否属于门户由 [`AppRoute::from_path`] 决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    Home,
    #[default]
    Login,
    Register,
    Dashboard,
    Niches,
    Contracts,
    Services,
    Cart,
    VisitRegistration,
    Reservation,
    Customers,
    Employees,
    Reservations,
    Visits,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（忽略查询串和末尾的 `/`）
    pub fn from_path(portal: Portal, path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match portal {
            Portal::Customer => match path {
                "/" => Self::Home,
                "/login" => Self::Login,
                "/register" => Self::Register,
                "/niches" => Self::Niches,
                "/contracts" => Self::Contracts,
                "/services" => Self::Services,
                "/cart" => Self::Cart,
                "/visit-registration" => Self::VisitRegistration,
                "/reservation" => Self::Reservation,
                _ => Self::NotFound,
            },
            Portal::Staff => match path {
                "/" | "/login" => Self::Login,
                "/dashboard" => Self::Dashboard,
                "/niches" => Self::Niches,
                "/customers" => Self::Customers,
                "/employees" => Self::Employees,
                "/contracts" => Self::Contracts,
                "/reservations" => Self::Reservations,
                "/visits" => Self::Visits,
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path；不属于该门户的路由返回 `/404`
    pub fn to_path(&self, portal: Portal) -> &'static str {
        match (portal, self) {
            (Portal::Customer, Self::Home) => "/",
            (Portal::Customer, Self::Login) => "/login",
            (Portal::Customer, Self::Register) => "/register",
            (Portal::Customer, Self::Services) => "/services",
            (Portal::Customer, Self::Cart) => "/cart",
            (Portal::Customer, Self::VisitRegistration) => "/visit-registration",
            (Portal::Customer, Self::Reservation) => "/reservation",
            (Portal::Staff, Self::Login) => "/",
            (Portal::Staff, Self::Dashboard) => "/dashboard",
            (Portal::Staff, Self::Customers) => "/customers",
            (Portal::Staff, Self::Employees) => "/employees",
            (Portal::Staff, Self::Reservations) => "/reservations",
            (Portal::Staff, Self::Visits) => "/visits",
            (_, Self::Niches) => "/niches",
            (_, Self::Contracts) => "/contracts",
            _ => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self, portal: Portal) -> bool {
        match portal {
            Portal::Customer => matches!(
                self,
                Self::Contracts | Self::Cart | Self::VisitRegistration | Self::Reservation
            ),
            Portal::Staff => !matches!(self, Self::Login | Self::NotFound),
        }
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Portal::Customer, "/", AppRoute::Home)]
    #[case(Portal::Customer, "/cart/", AppRoute::Cart)]
    #[case(Portal::Customer, "/contracts?page=2", AppRoute::Contracts)]
    #[case(Portal::Customer, "/dashboard", AppRoute::NotFound)]
    #[case(Portal::Staff, "/", AppRoute::Login)]
    #[case(Portal::Staff, "/login", AppRoute::Login)]
    #[case(Portal::Staff, "/employees", AppRoute::Employees)]
    #[case(Portal::Staff, "/cart", AppRoute::NotFound)]
    fn test_from_path(#[case] portal: Portal, #[case] path: &str, #[case] route: AppRoute) {
        assert_eq!(AppRoute::from_path(portal, path), route);
    }

    #[test]
    fn test_paths_round_trip_within_portal() {
        let customer = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Niches,
            AppRoute::Contracts,
            AppRoute::Services,
            AppRoute::Cart,
            AppRoute::VisitRegistration,
            AppRoute::Reservation,
        ];
        for route in customer {
            let path = route.to_path(Portal::Customer);
            assert_eq!(AppRoute::from_path(Portal::Customer, path), route);
        }
        assert_eq!(AppRoute::Cart.to_path(Portal::Staff), "/404");
    }

    #[rstest]
    #[case(Portal::Customer, AppRoute::Home, false)]
    #[case(Portal::Customer, AppRoute::Services, false)]
    #[case(Portal::Customer, AppRoute::Cart, true)]
    #[case(Portal::Customer, AppRoute::Contracts, true)]
    #[case(Portal::Staff, AppRoute::Login, false)]
    #[case(Portal::Staff, AppRoute::NotFound, false)]
    #[case(Portal::Staff, AppRoute::Dashboard, true)]
    #[case(Portal::Staff, AppRoute::Niches, true)]
    fn test_requires_auth(#[case] portal: Portal, #[case] route: AppRoute, #[case] expected: bool) {
        assert_eq!(route.requires_auth(portal), expected);
    }
}
