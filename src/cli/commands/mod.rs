pub mod locale;
pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";
pub const ARG_FRONTEND_ORIGIN: &str = "frontend-origin";

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

    let command = Command::new("acesso")
        .about("Bilingual sign-up and login service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("3001")
                .env("ACESSO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_ORIGIN)
                .long("frontend-origin")
                .help("Only allow CORS requests from this origin, example: http://localhost:5173")
                .long_help(
                    "Only allow CORS requests from this origin, example: http://localhost:5173. Any origin is allowed when not set.",
                )
                .env("ACESSO_FRONTEND_ORIGIN"),
        );

    let command = locale::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn with_cleared_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("ACESSO_PORT", None::<&str>),
                ("ACESSO_FRONTEND_ORIGIN", None::<&str>),
                ("ACESSO_LANGUAGES", None::<&str>),
                ("ACESSO_DEFAULT_LANGUAGE", None::<&str>),
                ("ACESSO_LOG_LEVEL", None::<&str>),
            ],
            f,
        )
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "acesso");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Bilingual sign-up and login service".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec!["acesso"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3001));
            assert_eq!(matches.get_one::<String>(ARG_FRONTEND_ORIGIN), None);
            assert_eq!(
                matches
                    .get_many::<Language>(locale::ARG_LANGUAGES)
                    .map(|values| values.copied().collect::<Vec<_>>()),
                Some(vec![Language::Pt, Language::En])
            );
            assert_eq!(
                matches
                    .get_one::<Language>(locale::ARG_DEFAULT_LANGUAGE)
                    .copied(),
                Some(Language::Pt)
            );
        });
    }

    #[test]
    fn test_check_args() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec![
                "acesso",
                "--port",
                "8080",
                "--frontend-origin",
                "http://localhost:5173",
                "--languages",
                "en,pt",
                "--default-language",
                "en",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
            assert_eq!(
                matches.get_one::<String>(ARG_FRONTEND_ORIGIN).cloned(),
                Some("http://localhost:5173".to_string())
            );
            assert_eq!(
                matches
                    .get_many::<Language>(locale::ARG_LANGUAGES)
                    .map(|values| values.copied().collect::<Vec<_>>()),
                Some(vec![Language::En, Language::Pt])
            );
            assert_eq!(
                matches
                    .get_one::<Language>(locale::ARG_DEFAULT_LANGUAGE)
                    .copied(),
                Some(Language::En)
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("ACESSO_PORT", Some("443")),
                ("ACESSO_FRONTEND_ORIGIN", Some("https://acesso.dev")),
                ("ACESSO_LANGUAGES", Some("pt")),
                ("ACESSO_DEFAULT_LANGUAGE", Some("pt")),
                ("ACESSO_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["acesso"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_FRONTEND_ORIGIN).cloned(),
                    Some("https://acesso.dev".to_string())
                );
                assert_eq!(
                    matches
                        .get_many::<Language>(locale::ARG_LANGUAGES)
                        .map(|values| values.copied().collect::<Vec<_>>()),
                    Some(vec![Language::Pt])
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_unknown_language_rejected() {
        with_cleared_env(|| {
            let result = new().try_get_matches_from(vec!["acesso", "--languages", "pt,es"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::ValueValidation)
            );

            let result = new().try_get_matches_from(vec!["acesso", "--default-language", "EN"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::ValueValidation)
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ACESSO_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["acesso"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("ACESSO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["acesso".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
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
    fn test_invalid_port_rejected() {
        with_cleared_env(|| {
            let result = new().try_get_matches_from(vec!["acesso", "--port", "70000"]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::ValueValidation)
            );
        });
    }
}
