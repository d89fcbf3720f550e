pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use niche_portal::config::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_REQUEST_ID, ENV_TOKEN};

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_PORTAL: &str = "portal";
pub const ARG_TOKEN: &str = "token";
pub const ARG_REQUEST_ID: &str = "request-id";

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).required(true)
}

/// `<building> <floor> <area> <niche>` 中的前 `depth` 个位置参数
fn location_args(command: Command, depth: usize) -> Command {
    let ids = [
        ("building", "Building id"),
        ("floor", "Floor id"),
        ("area", "Area id"),
        ("niche", "Niche id"),
    ];
    ids.into_iter()
        .take(depth)
        .fold(command, |cmd, (name, help)| cmd.arg(id_arg(name, help)))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("niche-portal")
        .about("Command-line client for the niche reservation API")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_BASE_URL)
                .short('u')
                .long("base-url")
                .help("Backend base URL")
                .default_value(DEFAULT_BASE_URL)
                .env(ENV_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_PORTAL)
                .short('p')
                .long("portal")
                .help("Portal whose route rules apply")
                .default_value("customer")
                .value_parser(["customer", "staff"])
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long("token")
                .help("Bearer token sent with every request")
                .env(ENV_TOKEN)
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_REQUEST_ID)
                .long("request-id")
                .help("Attach an X-Request-Id header to every request")
                .env(ENV_REQUEST_ID)
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("routes").about("Print the REST endpoint table"))
        .subcommand(Command::new("buildings").about("List all buildings"))
        .subcommand(location_args(
            Command::new("floors").about("List the floors of a building"),
            1,
        ))
        .subcommand(location_args(
            Command::new("areas").about("List the areas of a floor"),
            2,
        ))
        .subcommand(location_args(
            Command::new("niches").about("List the niches of an area"),
            3,
        ))
        .subcommand(location_args(
            Command::new("niche").about("Show one niche with its history"),
            4,
        ))
        .subcommand(
            Command::new("contracts")
                .about("List a customer's contracts")
                .arg(id_arg("customer", "Customer id")),
        )
        .subcommand(Command::new("services").about("List offered services"))
        .subcommand(
            Command::new("login")
                .about("Log in and print the issued token")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .required(true),
                ),
        )
        .subcommand(Command::new("me").about("Show the user behind --token"))
        .subcommand(Command::new("dashboard").about("Staff dashboard summary"));

    logging::with_args(command)
}
