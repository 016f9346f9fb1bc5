use colored::{Color, Colorize};
use common::env_config::Config;
use log::{Level, LevelFilter};
use middleware::logger::LoggerMiddleware;

pub mod middleware {
    pub mod logger;
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Magenta,
        Level::Trace => Color::BrightBlack,
    }
}

/// Installs the global logger: stdout plus an appending `config.log_file`.
///
/// Production logs start at `Info`, everything else at `Debug`.
pub fn setup(config: &Config) -> Result<(), fern::InitError> {
    let level = if config.is_production() {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level().as_str().color(level_color(record.level())),
                record.target().bright_black(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("actix_server", LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(&config.log_file)?)
        .apply()?;
    Ok(())
}

pub fn middleware() -> LoggerMiddleware {
    LoggerMiddleware::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_level_has_its_own_color() {
        let colors = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ]
        .map(level_color);

        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }
}
