use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::TimeDelta;

use crate::assessment::catalog::{leadership_catalog, Catalog};
use crate::assessment::scoring::{Scorer, ScoringRules, WiscarScorer};
use crate::assessment::sessions::SessionStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Pluggable scorer. Default: WiscarScorer.
    pub scorer: Arc<dyn Scorer>,
    pub sessions: SessionStore,
}

impl AppState {
    /// Builds the catalog, checks the scoring rules against it, and wires the session store.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Arc::new(leadership_catalog().context("Question catalog is invalid")?);

        let rules = ScoringRules::leadership();
        rules
            .validate_against(&catalog)
            .context("Scoring rules do not match the question catalog")?;

        let idle_ttl = TimeDelta::try_minutes(config.session_ttl_minutes)
            .filter(|ttl| *ttl >= TimeDelta::zero())
            .with_context(|| {
                format!(
                    "SESSION_TTL_MINUTES must be a non-negative number of minutes, got {}",
                    config.session_ttl_minutes
                )
            })?;
        let sessions = SessionStore::new(Arc::clone(&catalog), config.max_sessions, idle_ttl);

        Ok(Self {
            config,
            catalog,
            scorer: Arc::new(WiscarScorer::new(rules)),
            sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_state() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.catalog.len(), 13);
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        for minutes in [i64::MAX, -1] {
            let config = Config {
                session_ttl_minutes: minutes,
                ..Config::default()
            };
            let err = AppState::new(config).err().unwrap();
            assert!(err.to_string().contains("SESSION_TTL_MINUTES"));
        }
    }
}
