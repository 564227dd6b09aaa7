//! In-memory flag stores implementing the sensor-core oracles.
//!
//! Hosts with their own persistent stores implement the oracle traits
//! directly; these cover tests, tools, and hosts without one.
use std::collections::HashMap;

use sensor_core::{EventId, MapId, SelfSwitchKey, SelfSwitchOracle, SwitchOracle};

/// Global switches keyed by id. Unset ids read as `false`.
#[derive(Clone, Debug, Default)]
pub struct SwitchStore {
    values: HashMap<u32, bool>,
}

impl SwitchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, switch_id: u32, value: bool) {
        self.values.insert(switch_id, value);
    }

    pub fn get(&self, switch_id: u32) -> bool {
        self.values.get(&switch_id).copied().unwrap_or(false)
    }
}

impl SwitchOracle for SwitchStore {
    fn value(&self, switch_id: u32) -> bool {
        self.get(switch_id)
    }
}

/// Self-switches keyed by `(map, event, letter)`. Unset keys read as `false`.
#[derive(Clone, Debug, Default)]
pub struct SelfSwitchStore {
    values: HashMap<SelfSwitchKey, bool>,
}

impl SelfSwitchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, map_id: MapId, event_id: EventId, letter: &str, value: bool) {
        self.values
            .insert(SelfSwitchKey::new(map_id, event_id, letter), value);
    }

    pub fn get(&self, key: &SelfSwitchKey) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }
}

impl SelfSwitchOracle for SelfSwitchStore {
    fn value(&self, key: &SelfSwitchKey) -> bool {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_switches_read_false() {
        let mut store = SwitchStore::new();
        assert!(!store.get(1));
        store.set(1, true);
        assert!(store.get(1));
        store.set(1, false);
        assert!(!SwitchOracle::value(&store, 1));
    }

    #[test]
    fn self_switch_letters_are_case_insensitive() {
        let mut store = SelfSwitchStore::new();
        store.set(MapId(2), EventId(5), "c", true);
        assert!(store.get(&SelfSwitchKey::new(MapId(2), EventId(5), "C")));
        assert!(!store.get(&SelfSwitchKey::new(MapId(2), EventId(6), "C")));
    }
}
