use anyhow::{Context, Result, anyhow, bail};
use niche_portal::shared::protocol::Endpoint;
use niche_portal::{ApiClient, HttpClient};
use serde_json::{Value, json};
use tracing::debug;

use super::{Action, Query};
use crate::App;
use crate::auth::login;
use crate::components::{load_contract_rows, load_dashboard, load_niche_details};
use crate::web::{GuardOutcome, Portal};

/// 执行动作并把结果以 JSON 形式写到 stdout
///
/// # Errors
/// Returns an error if the backend call fails.
pub async fn execute(action: Action) -> Result<()> {
    let output = match action {
        Action::Routes => routes(),
        Action::Query(globals, query) => {
            debug!(?globals, ?query, "running query");
            run_query(globals.client(), globals.portal, query).await?
        }
    };

    let rendered = serde_json::to_string_pretty(&output).context("failed to encode output")?;
    println!("{rendered}");
    Ok(())
}

/// 端点表
#[must_use]
pub fn routes() -> Value {
    Value::Array(
        Endpoint::ALL
            .iter()
            .map(|endpoint| {
                json!({
                    "name": format!("{:?}", endpoint),
                    "method": endpoint.method().as_str(),
                    "path": endpoint.template(),
                })
            })
            .collect(),
    )
}

/// 在给定门户下启动应用并要求路由可以渲染
async fn open<C: HttpClient>(api: ApiClient<C>, portal: Portal, path: &str) -> Result<App<C>> {
    let app = App::new(portal, api, path);
    // 一次性命令不需要持续监听
    app.start().await.abort();
    match app.outlet() {
        GuardOutcome::Render(route) if route.to_path(portal) == path => Ok(app),
        GuardOutcome::Render(route) | GuardOutcome::Redirect(route) => bail!(
            "{} is not available on the {} portal (landed on {})",
            path,
            portal,
            route.to_path(portal)
        ),
        GuardOutcome::Loading => Err(anyhow!("authentication state unresolved")),
    }
}

/// 执行一个查询，返回可直接输出的 JSON
///
/// # Errors
/// Returns an error if the backend call fails or the portal rejects the route.
pub async fn run_query<C: HttpClient>(api: ApiClient<C>, portal: Portal, query: Query) -> Result<Value> {
    let value = match query {
        Query::Buildings => serde_json::to_value(api.buildings().get_all_data().await?)?,
        Query::Floors { building } => serde_json::to_value(api.buildings().floors(&building).await?)?,
        Query::Areas { building, floor } => {
            serde_json::to_value(api.buildings().areas(&building, &floor).await?)?
        }
        Query::Niches {
            building,
            floor,
            area,
        } => serde_json::to_value(api.niches().list(&building, &floor, &area).await?)?,
        Query::Niche {
            building,
            floor,
            area,
            niche,
        } => serde_json::to_value(load_niche_details(&api, &building, &floor, &area, &niche).await?)?,
        Query::Contracts { customer } => {
            serde_json::to_value(load_contract_rows(&api, &customer).await?)?
        }
        Query::Services => serde_json::to_value(api.services().list().await?)?,
        Query::Login { email, password } => {
            let app = App::new(portal, api, portal.login().to_path(portal));
            let user = login(app.auth(), &email, &password).await?;
            json!({ "token": app.api().token(), "user": user })
        }
        Query::Me => {
            let app = App::new(portal, api, portal.home().to_path(portal));
            app.start().await.abort();
            let user = app.auth().user().context("not logged in; pass --token")?;
            serde_json::to_value(user)?
        }
        Query::Dashboard => {
            let app = open(api, portal, "/dashboard").await?;
            serde_json::to_value(load_dashboard(app.api()).await?)?
        }
    };
    Ok(value)
}
