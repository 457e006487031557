use anyhow::Context;
use busline_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Busline settings")?;
    busline_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.bind_address(),
        "busline-app bootstrap starting"
    );

    busline_app::server::run(&settings).await?;

    tracing::info!("busline-app shut down");
    Ok(())
}
