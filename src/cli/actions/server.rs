use crate::{acesso, cli::telemetry, i18n, locale::LocaleSet};
use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub locales: LocaleSet,
    pub frontend_origin: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if a message catalog is incomplete or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    i18n::verify_catalogs().context("Message catalogs are incomplete")?;

    debug!("Server args: {:?}", args);
    info!(
        "Serving languages {:?}, default {}",
        args.locales.supported(),
        args.locales.default_language()
    );

    let result = acesso::new(args.port, args.locales, args.frontend_origin.as_deref()).await;

    telemetry::shutdown();

    result
}
