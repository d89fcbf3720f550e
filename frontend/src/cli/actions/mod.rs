use crate::cli::globals::GlobalArgs;

// `Action` 的解释器放在单独的模块里，新增命令时只需扩展 `run::execute`
pub mod run;

/// 需要访问后端的子命令
#[derive(Clone, PartialEq, Eq)]
pub enum Query {
    Buildings,
    Floors {
        building: String,
    },
    Areas {
        building: String,
        floor: String,
    },
    Niches {
        building: String,
        floor: String,
        area: String,
    },
    Niche {
        building: String,
        floor: String,
        area: String,
        niche: String,
    },
    Contracts {
        customer: String,
    },
    Services,
    Login {
        email: String,
        password: String,
    },
    Me,
    Dashboard,
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buildings => f.write_str("Buildings"),
            Self::Floors { building } => f.debug_struct("Floors").field("building", building).finish(),
            Self::Areas { building, floor } => f
                .debug_struct("Areas")
                .field("building", building)
                .field("floor", floor)
                .finish(),
            Self::Niches {
                building,
                floor,
                area,
            } => f
                .debug_struct("Niches")
                .field("building", building)
                .field("floor", floor)
                .field("area", area)
                .finish(),
            Self::Niche {
                building,
                floor,
                area,
                niche,
            } => f
                .debug_struct("Niche")
                .field("building", building)
                .field("floor", floor)
                .field("area", area)
                .field("niche", niche)
                .finish(),
            Self::Contracts { customer } => {
                f.debug_struct("Contracts").field("customer", customer).finish()
            }
            Self::Services => f.write_str("Services"),
            Self::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Self::Me => f.write_str("Me"),
            Self::Dashboard => f.write_str("Dashboard"),
        }
    }
}

#[derive(Debug)]
pub enum Action {
    /// 打印端点表，不访问网络
    Routes,
    Query(GlobalArgs, Query),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the request fails or the output cannot be encoded.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let query = Query::Login {
            email: "a@x.vn".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", query);
        assert!(printed.contains("a@x.vn"));
        assert!(printed.contains("***"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_debug_keeps_ids() {
        let query = Query::Floors {
            building: "B1".to_string(),
        };
        assert_eq!(format!("{:?}", query), r#"Floors { building: "B1" }"#);
    }
}
