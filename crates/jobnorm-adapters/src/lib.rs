pub mod config;
pub mod providers;

pub use config::AdapterConfig;
pub use providers::{
    AshbyAdapter, BambooAdapter, GemAdapter, GreenhouseAdapter, LeverAdapter, RipplingAdapter,
    WorkableAdapter,
};

use jobnorm_core::{AppError, SourceAdapter};

/// Provider names accepted by [`adapter_for`].
pub const SOURCES: &[&str] = &[
    providers::ashby::SOURCE,
    providers::bamboo::SOURCE,
    providers::gem::SOURCE,
    providers::greenhouse::SOURCE,
    providers::lever::SOURCE,
    providers::rippling::SOURCE,
    providers::workable::SOURCE,
];

/// Look up the adapter for a provider name (case-insensitive).
pub fn adapter_for(source: &str, config: AdapterConfig) -> Result<Box<dyn SourceAdapter>, AppError> {
    let adapter: Box<dyn SourceAdapter> = match source.trim().to_lowercase().as_str() {
        providers::ashby::SOURCE => Box::new(AshbyAdapter::new(config)),
        providers::bamboo::SOURCE | "bamboohr" => Box::new(BambooAdapter::new(config)),
        providers::gem::SOURCE => Box::new(GemAdapter::new(config)),
        providers::greenhouse::SOURCE => Box::new(GreenhouseAdapter::new(config)),
        providers::lever::SOURCE => Box::new(LeverAdapter::new(config)),
        providers::rippling::SOURCE => Box::new(RipplingAdapter::new(config)),
        providers::workable::SOURCE => Box::new(WorkableAdapter::new(config)),
        _ => return Err(AppError::UnsupportedSource(source.to_string())),
    };
    Ok(adapter)
}
