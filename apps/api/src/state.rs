use std::sync::Arc;

use crate::analysis::catalog::SkillCatalog;
use crate::config::Config;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup; read-only afterwards.
    pub catalog: Arc<SkillCatalog>,
    pub resumes: ResumeStore,
}

impl AppState {
    pub fn new(config: Config, catalog: SkillCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            resumes: ResumeStore::new(),
        }
    }
}
