use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::pdm_error::{PdmError, PdmResult};

/// Key/value configuration that tracks which keys were consumed, so that
/// typos surface as errors instead of being silently ignored.
#[derive(Debug, Default)]
pub struct ConfigWithCheck {
    conf: HashMap<String, Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, Value>) -> Self {
        Self { conf }
    }

    /// Take `key` out of the map and deserialize it
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> PdmResult<Option<T>> {
        match self.conf.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| PdmError::Config(format!("bad value for {}: {}", key, e))),
        }
    }

    pub fn get_or<T: DeserializeOwned>(&mut self, key: &str, default: T) -> PdmResult<T> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Fail if any key was never consumed
    pub fn check(&self) -> PdmResult<()> {
        if self.conf.is_empty() {
            return Ok(());
        }
        let mut keys: Vec<&str> = self.conf.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Err(PdmError::Config(format!("unknown para = {}", keys.join(", "))))
    }
}
