//! 把解析后的命令行参数映射为 [`Action`]。

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;

use crate::cli::actions::{Action, Query};
use crate::cli::commands::{ARG_BASE_URL, ARG_PORTAL, ARG_REQUEST_ID, ARG_TOKEN};
use crate::cli::globals::GlobalArgs;
use crate::web::Portal;

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: {name}"))
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let portal = required(matches, ARG_PORTAL)?;
    Ok(GlobalArgs {
        base_url: required(matches, ARG_BASE_URL)?,
        portal: Portal::parse(&portal).ok_or_else(|| anyhow!("unknown portal: {portal}"))?,
        token: matches
            .get_one::<String>(ARG_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .cloned(),
        request_id: matches.get_flag(ARG_REQUEST_ID),
    })
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    let query = match name {
        "routes" => return Ok(Action::Routes),
        "buildings" => Query::Buildings,
        "floors" => Query::Floors {
            building: required(sub, "building")?,
        },
        "areas" => Query::Areas {
            building: required(sub, "building")?,
            floor: required(sub, "floor")?,
        },
        "niches" => Query::Niches {
            building: required(sub, "building")?,
            floor: required(sub, "floor")?,
            area: required(sub, "area")?,
        },
        "niche" => Query::Niche {
            building: required(sub, "building")?,
            floor: required(sub, "floor")?,
            area: required(sub, "area")?,
            niche: required(sub, "niche")?,
        },
        "contracts" => Query::Contracts {
            customer: required(sub, "customer")?,
        },
        "services" => Query::Services,
        "login" => Query::Login {
            email: required(sub, "email")?,
            password: required(sub, "password")?,
        },
        "me" => Query::Me,
        "dashboard" => Query::Dashboard,
        other => bail!("unknown subcommand: {other}"),
    };

    // 全局参数在子命令中同样可见
    Ok(Action::Query(globals(sub)?, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    fn dispatch(args: &[&str]) -> Action {
        temp_env::with_vars(
            [
                ("NICHE_API_BASE_URL", None::<&str>),
                ("NICHE_API_TOKEN", None),
                ("NICHE_API_REQUEST_ID", None),
            ],
            || handler(&commands::new().get_matches_from(args)).unwrap(),
        )
    }

    #[test]
    fn test_routes() {
        assert!(matches!(dispatch(&["niche-portal", "routes"]), Action::Routes));
    }

    #[test]
    fn test_niches_with_globals() {
        let action = dispatch(&[
            "niche-portal",
            "--base-url",
            "https://api.niche.vn",
            "--portal",
            "staff",
            "--token",
            "abc",
            "niches",
            "B1",
            "F2",
            "A3",
        ]);
        let Action::Query(globals, query) = action else {
            panic!("expected query");
        };
        assert_eq!(globals.base_url, "https://api.niche.vn");
        assert_eq!(globals.portal, Portal::Staff);
        assert_eq!(globals.token.as_deref(), Some("abc"));
        assert_eq!(
            query,
            Query::Niches {
                building: "B1".to_string(),
                floor: "F2".to_string(),
                area: "A3".to_string(),
            }
        );
    }

    #[test]
    fn test_globals_after_subcommand() {
        let action = dispatch(&["niche-portal", "contracts", "C9", "--token", " "]);
        let Action::Query(globals, query) = action else {
            panic!("expected query");
        };
        assert_eq!(globals.portal, Portal::Customer);
        assert_eq!(globals.token, None);
        assert_eq!(
            query,
            Query::Contracts {
                customer: "C9".to_string()
            }
        );
    }

    #[test]
    fn test_login() {
        let action = dispatch(&[
            "niche-portal",
            "login",
            "--email",
            "a@x.vn",
            "--password",
            "pw",
        ]);
        assert!(matches!(
            action,
            Action::Query(_, Query::Login { ref email, .. }) if email == "a@x.vn"
        ));
    }
}
