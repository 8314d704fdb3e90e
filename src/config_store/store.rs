use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::{ClockConfig, ClockConfigPatch, ConfigField};

use super::{ConfigChange, ConfigError, MemoryStorage, StateStorage};

/// Owner of the current clock settings and their persisted copy.
///
/// The store is a plain owned value: the display loop and the commands
/// receive it by `&mut` and every mutation is persisted before returning.
/// There is exactly one config value per store and it is always complete.
pub struct ConfigStore {
    config: ClockConfig,
    storage: Box<dyn StateStorage>,
}

impl ConfigStore {
    /// Creates a store with default settings backed by an empty in-memory storage.
    pub fn with_defaults() -> Self {
        Self {
            config: ClockConfig::default(),
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Rehydrates a store from `storage`.
    ///
    /// Absent state yields the default config. Unreadable state, or state
    /// that is not a JSON object, is logged and the default config is kept.
    /// A field whose value does not fit its type falls back to its default
    /// while the other fields are kept. Loading never fails.
    #[instrument(skip(storage), fields(location = %storage.location()))]
    pub fn load(storage: impl StateStorage + 'static) -> Self {
        let config = match Self::read_persisted(&storage) {
            Ok(Some(config)) => {
                info!("Loaded clock settings");
                config
            }
            Ok(None) => {
                info!("No persisted clock settings found, using defaults");
                ClockConfig::default()
            }
            Err(e) => {
                warn!("Failed to load config: {e}. Using defaults");
                ClockConfig::default()
            }
        };

        Self {
            config,
            storage: Box::new(storage),
        }
    }

    /// Returns the current config.
    pub fn get(&self) -> &ClockConfig {
        &self.config
    }

    /// Merges `patch` into the current config and persists the result.
    ///
    /// Fields named by the patch are replaced, all others are left untouched.
    /// The in-memory merge happens even when persisting fails.
    ///
    /// # Errors
    /// * `ConfigError::SerializationError` - If the config cannot be serialized
    /// * `ConfigError::PersistenceError` - If the storage rejects the write
    #[instrument(skip(self, patch))]
    pub fn update(&mut self, patch: ClockConfigPatch) -> Result<Vec<ConfigChange>, ConfigError> {
        let before = to_json(&self.config)?;
        let changed_fields = self.config.apply(patch);
        let after = to_json(&self.config)?;

        let changes: Vec<ConfigChange> = changed_fields
            .into_iter()
            .map(|field| {
                ConfigChange::new(
                    field,
                    before.get(field.key()).cloned().unwrap_or(Value::Null),
                    after.get(field.key()).cloned().unwrap_or(Value::Null),
                )
            })
            .collect();

        for change in &changes {
            debug!(
                "Config field {} changed: {} -> {}",
                change.field, change.old_value, change.new_value
            );
        }

        self.persist()?;
        Ok(changes)
    }

    /// Replaces the whole config with the default and persists it.
    ///
    /// # Errors
    /// * `ConfigError::SerializationError` - If the config cannot be serialized
    /// * `ConfigError::PersistenceError` - If the storage rejects the write
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        info!("Resetting clock settings to defaults");
        self.config = ClockConfig::default();
        self.persist()
    }

    /// Re-reads the persisted state, replacing the in-memory config.
    ///
    /// Used when another process edited the state. Unreadable state keeps
    /// the current config. Returns `true` when the config changed.
    #[instrument(skip(self))]
    pub fn reload(&mut self) -> bool {
        match Self::read_persisted(self.storage.as_ref()) {
            Ok(Some(config)) if config != self.config => {
                debug!("Reloaded clock settings from storage");
                self.config = config;
                true
            }
            Ok(_) => false,
            Err(e) => {
                warn!("Ignoring unreadable persisted config: {e}");
                false
            }
        }
    }

    /// Returns the persisted JSON value of the field named `key`.
    ///
    /// # Errors
    /// * `ConfigError::InvalidField` - If no field has that key
    /// * `ConfigError::SerializationError` - If the config cannot be serialized
    pub fn get_field(&self, key: &str) -> Result<Value, ConfigError> {
        let field =
            ConfigField::from_key(key).ok_or_else(|| ConfigError::InvalidField(key.to_string()))?;

        to_json(&self.config)?
            .get(field.key())
            .cloned()
            .ok_or_else(|| ConfigError::InvalidField(key.to_string()))
    }

    /// Sets the field named `key` from a JSON value and persists the config.
    ///
    /// # Errors
    /// * `ConfigError::InvalidField` - If no field has that key
    /// * `ConfigError::InvalidValue` - If the value does not fit the field's type
    /// * `ConfigError::PersistenceError` - If the storage rejects the write
    pub fn set_field(&mut self, key: &str, value: Value) -> Result<Vec<ConfigChange>, ConfigError> {
        let field =
            ConfigField::from_key(key).ok_or_else(|| ConfigError::InvalidField(key.to_string()))?;

        let patch = ClockConfigPatch::single(field, value).map_err(|e| {
            ConfigError::InvalidValue {
                field,
                details: e.to_string(),
            }
        })?;

        self.update(patch)
    }

    /// Human-readable location of the persisted state.
    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    /// Reads the raw persisted entry without touching the in-memory config.
    ///
    /// # Errors
    /// Returns the storage's read error.
    pub fn persisted_contents(&self) -> Result<Option<String>, ConfigError> {
        self.storage.read()
    }

    fn persist(&mut self) -> Result<(), ConfigError> {
        let contents =
            serde_json::to_string(&self.config).map_err(|e| ConfigError::SerializationError {
                content_type: "config".to_string(),
                details: e.to_string(),
            })?;

        self.storage.write(&contents)
    }

    fn read_persisted(storage: &dyn StateStorage) -> Result<Option<ClockConfig>, ConfigError> {
        let Some(contents) = storage.read()? else {
            return Ok(None);
        };

        let parse_error = |details: String| ConfigError::ParseError {
            location: storage.location(),
            details,
        };

        let value: Value = serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(parse_error("expected a JSON object".to_string()));
        };

        let mut config = ClockConfig::default();
        for (key, value) in fields {
            let Some(field) = ConfigField::from_key(&key) else {
                debug!("Ignoring unknown persisted field '{key}'");
                continue;
            };

            match ClockConfigPatch::single(field, value) {
                Ok(patch) => {
                    config.apply(patch);
                }
                Err(e) => warn!("Ignoring persisted value of '{field}': {e}. Using its default"),
            }
        }

        Ok(Some(config))
    }
}

fn to_json(config: &ClockConfig) -> Result<Value, ConfigError> {
    serde_json::to_value(config).map_err(|e| ConfigError::SerializationError {
        content_type: "config".to_string(),
        details: e.to_string(),
    })
}
