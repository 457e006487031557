use std::future::Future;

use anyhow::Context;
use busline_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// Registry with every project module registered.
pub fn build_registry(settings: &Settings) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings)
        .with_context(|| "failed to register modules")?;
    Ok(registry)
}

/// Run the full lifecycle: init, start, serve until ctrl-c, stop.
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let registry = build_registry(settings)?;
    let server = busline_http::start_server(&registry, settings, shutdown_signal());
    run_lifecycle(&registry, settings, server).await
}

/// Init and start every module, drive `serve`, then stop the registry.
///
/// Modules are stopped whether init, start or `serve` failed; the first error wins.
pub async fn run_lifecycle<F>(
    registry: &ModuleRegistry,
    settings: &Settings,
    serve: F,
) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    let ctx = InitCtx { settings };

    let outcome = async {
        registry.init_modules(&ctx).await?;
        registry.start_modules(&ctx).await?;
        serve.await
    }
    .await;

    let stopped = registry.stop_modules().await;

    if let (Err(err), Err(stop_err)) = (&outcome, &stopped) {
        tracing::error!(error = %err, stop_error = %stop_err, "modules failed to stop after an earlier error");
    }

    outcome?;
    stopped
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
