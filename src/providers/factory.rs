use crate::config::{SourceBackend, SourceConfig};
use crate::error::{AppError, Result};
use crate::providers::{demo_snapshot, FileSource, InMemorySource, RecordSource, RestSource};
use std::sync::Arc;

/// Create a record source based on configuration
pub fn create_source(config: &SourceConfig) -> Result<Arc<dyn RecordSource>> {
    match config.backend {
        SourceBackend::Demo => {
            tracing::info!("Initializing demo record source");
            Ok(Arc::new(InMemorySource::new(demo_snapshot())))
        }

        SourceBackend::File => {
            let path = config.path.as_ref().ok_or_else(|| {
                AppError::Configuration("File backend requires 'path' configuration".to_string())
            })?;

            tracing::info!(path = ?path, "Initializing file record source");
            Ok(Arc::new(FileSource::new(path)))
        }

        SourceBackend::Rest => {
            let base_url = config.base_url.as_ref().ok_or_else(|| {
                AppError::Configuration("Rest backend requires 'base_url' configuration".to_string())
            })?;

            let api_key = std::env::var(&config.api_key_env).ok();
            if api_key.is_none() {
                tracing::warn!(
                    env = %config.api_key_env,
                    "No API key set, requests will be unauthenticated"
                );
            }

            tracing::info!(url = %base_url, "Initializing REST record source");
            let source = RestSource::new(base_url.clone(), api_key, config.timeout_secs)?;
            Ok(Arc::new(source))
        }
    }
}
