use crate::i18n::Language;
use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_LANGUAGES: &str = "languages";
pub const ARG_DEFAULT_LANGUAGE: &str = "default-language";

#[must_use]
pub fn validator_language() -> ValueParser {
    ValueParser::from(move |code: &str| -> std::result::Result<Language, String> {
        code.trim()
            .parse::<Language>()
            .map_err(|err| err.to_string())
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_LANGUAGES)
                .long(ARG_LANGUAGES)
                .help("Languages to serve, comma separated (pt, en)")
                .env("ACESSO_LANGUAGES")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .default_values(["pt", "en"])
                .value_parser(validator_language()),
        )
        .arg(
            Arg::new(ARG_DEFAULT_LANGUAGE)
                .long(ARG_DEFAULT_LANGUAGE)
                .help("Language served without a path prefix")
                .env("ACESSO_DEFAULT_LANGUAGE")
                .default_value("pt")
                .value_parser(validator_language()),
        )
}
