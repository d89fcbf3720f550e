use clap::{Arg, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

/// 日志级别名称，下标即 `-v` 的次数
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// 接受级别名称（不区分大小写）或 0-4 的数字
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        let level = level.trim().to_lowercase();
        let index = match level.parse::<usize>() {
            Ok(n) => Some(n).filter(|n| *n < LEVELS.len()),
            Err(_) => LEVELS.iter().position(|name| *name == level),
        };
        index
            .and_then(|i| u8::try_from(i).ok())
            .ok_or_else(|| format!("invalid log level: {level} (expected one of {})", LEVELS.join(", ")))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("NICHE_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
