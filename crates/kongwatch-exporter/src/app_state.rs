//! Shared application state for the exporter.

use std::sync::Arc;

use kongwatch_core::error::Result;
use kongwatch_core::ingest::Ingestor;
use kongwatch_core::metrics::Registry;

use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
    ingestor: Ingestor,
}

impl AppState {
    /// Build application state. The three metric families register here, so
    /// a schema conflict fails boot instead of serving inconsistent data.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let registry = Registry::new();
        let ingestor = Ingestor::new(&registry)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                ingestor,
            }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn ingestor(&self) -> &Ingestor {
        &self.inner.ingestor
    }
}
