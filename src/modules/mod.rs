pub mod bookings;

use busline_kernel::{settings::Settings, ModuleRegistry};

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    registry.register(bookings::create_module(&settings.booking))?;
    Ok(())
}
