pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

pub const ARG_PORT: &str = "port";
pub const ARG_ASSETS_DIR: &str = "assets-dir";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("scholaris")
        .about("School management portal")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SCHOLARIS_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_ASSETS_DIR)
                .long("assets-dir")
                .help("Directory with the compiled web bundle")
                .long_help(
                    "Directory with the compiled web bundle (trunk output). Unknown paths fall back to its index.html so client routes survive a reload.",
                )
                .default_value("dist")
                .env("SCHOLARIS_ASSETS_DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "scholaris");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("School management portal".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("SCHOLARIS_PORT", None::<&str>),
                ("SCHOLARIS_ASSETS_DIR", None),
                ("SCHOLARIS_LOG_LEVEL", None),
                ("SCHOLARIS_LOG_JSON", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["scholaris"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_ASSETS_DIR),
                    Some(&PathBuf::from("dist"))
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(0)
                );
                assert!(!matches.get_flag(logging::ARG_LOG_JSON));
            },
        );
    }

    #[test]
    fn test_check_port_and_assets_dir() {
        let matches = new().get_matches_from(vec![
            "scholaris",
            "--port",
            "3000",
            "--assets-dir",
            "/srv/scholaris",
            "--log-json",
        ]);

        assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3000));
        assert_eq!(
            matches.get_one::<PathBuf>(ARG_ASSETS_DIR),
            Some(&PathBuf::from("/srv/scholaris"))
        );
        assert!(matches.get_flag(logging::ARG_LOG_JSON));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SCHOLARIS_PORT", Some("443")),
                ("SCHOLARIS_ASSETS_DIR", Some("/var/www/scholaris")),
                ("SCHOLARIS_LOG_LEVEL", Some("info")),
                ("SCHOLARIS_LOG_JSON", Some("true")),
            ],
            || {
                let matches = new().get_matches_from(vec!["scholaris"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_ASSETS_DIR),
                    Some(&PathBuf::from("/var/www/scholaris"))
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert!(matches.get_flag(logging::ARG_LOG_JSON));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, level) in levels.iter().enumerate() {
            temp_env::with_vars([("SCHOLARIS_LOG_LEVEL", Some(*level))], || {
                let matches = new().get_matches_from(vec!["scholaris"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("SCHOLARIS_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["scholaris".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = new().try_get_matches_from(vec!["scholaris", "--port", "70000"]);
        assert!(result.is_err());
    }
}
