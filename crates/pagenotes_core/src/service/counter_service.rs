//! Page-view counter persisted under its own key.

use crate::kv::{KeyValueStore, KvResult};
use log::{info, warn};

/// Monotonic visit counter.
pub struct VisitCounter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> VisitCounter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Current count; absent or unparsable values read as zero.
    pub fn current(&self) -> KvResult<u64> {
        let Some(stored) = self.store.get(self.key.as_str())? else {
            return Ok(0);
        };
        match stored.trim().parse::<u64>() {
            Ok(count) => Ok(count),
            Err(_) => {
                warn!(
                    "event=visit_load module=counter status=recovered key={}",
                    self.key
                );
                Ok(0)
            }
        }
    }

    /// Records one visit and returns the new count.
    pub fn increment(&self) -> KvResult<u64> {
        let next = self.current()?.saturating_add(1);
        self.store.set(self.key.as_str(), next.to_string().as_str())?;
        info!("event=visit_increment module=counter status=ok count={next}");
        Ok(next)
    }
}
