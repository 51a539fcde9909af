//! Single owner of the mutable rule table.
//!
//! Reads fall back to built-in defaults whenever the backend fails or holds
//! something unusable. Writes persist the whole table after every edit;
//! a failed write is logged and the in-memory edit stands.

mod backend;
mod layout;

use arabica_core::rules::{RuleCategory, RuleSet};
use arabica_core::settings::Settings;
use arabica_core::{Config, Rule};
use tracing::{debug, warn};

pub use backend::{FileStore, KeyValueStore, MemoryStore};
use layout::PersistedRules;

/// Backend key holding the persisted rule table.
pub const STORAGE_KEY: &str = "arabica-transliteration-rules";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{category} rule index {index} out of range (len {len})")]
    IndexOutOfRange {
        category: RuleCategory,
        index: usize,
        len: usize,
    },
}

pub struct RuleStore<B: KeyValueStore> {
    backend: B,
    rules: RuleSet,
    settings: Settings,
}

impl<B: KeyValueStore> RuleStore<B> {
    /// Load the persisted table from `backend`, or the defaults.
    pub fn open(backend: B) -> Self {
        let rules = load(&backend);
        Self {
            backend,
            rules,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn list(&self, category: RuleCategory) -> &[Rule] {
        self.rules.get(category)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the Latin side of one rule, keeping its key and description.
    pub fn update(
        &mut self,
        category: RuleCategory,
        index: usize,
        latin: impl Into<String>,
    ) -> Result<(), StoreError> {
        let rules = self.rules.get_mut(category);
        let len = rules.len();
        let rule = rules
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange {
                category,
                index,
                len,
            })?;
        rule.latin = latin.into();
        debug!(%category, index, arabic = %rule.arabic, latin = %rule.latin, "rule updated");
        self.persist();
        Ok(())
    }

    /// Restore built-in defaults and drop the persisted table.
    pub fn reset(&mut self) {
        self.rules = RuleSet::default();
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to clear stored rules");
        }
        debug!("rules reset to defaults");
    }

    /// Immutable snapshot for the transducers.
    pub fn config(&self) -> Config {
        Config::new(self.rules.clone(), &self.settings)
    }

    fn persist(&mut self) {
        let json = match PersistedRules::to_json(&self.rules) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize rules");
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            warn!(error = %e, "failed to persist rules");
        }
    }
}

fn load(backend: &impl KeyValueStore) -> RuleSet {
    let defaults = RuleSet::default();
    let json = match backend.get(STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return defaults,
        Err(e) => {
            warn!(error = %e, "failed to read stored rules, using defaults");
            return defaults;
        }
    };
    match PersistedRules::from_json(&json) {
        Ok(layout) => layout.into_rule_set(&defaults),
        Err(e) => {
            warn!(error = %e, "stored rules are not valid JSON, using defaults");
            defaults
        }
    }
}
