//! Check command - validate settings before the app starts.

use settings::{database, Settings};

use crate::args::CheckArgs;

/// Execute the check command
pub async fn execute(
    args: CheckArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Origins are only validated when turned into a layer
    let _ = settings.cors.layer()?;
    tracing::info!(
        origins = settings.cors.allowed_origins.len(),
        "CORS origins are valid"
    );

    if settings.allowed_hosts.is_empty() {
        tracing::warn!("ALLOWED_HOSTS is empty; every request host will be rejected");
    }

    if args.connect {
        database::ping(settings).await?;
    }

    tracing::info!("Configuration OK");
    Ok(())
}
