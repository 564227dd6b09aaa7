use crate::state::{EventId, MapId};

/// Global boolean switch store, keyed by switch id.
///
/// Ids the store does not know read as `false`; bounds policy is the store's.
pub trait SwitchOracle {
    fn value(&self, switch_id: u32) -> bool;
}

/// Per-event self-switch store.
pub trait SelfSwitchOracle {
    fn value(&self, key: &SelfSwitchKey) -> bool;
}

/// Address of one self-switch: a letter scoped to one event on one map.
///
/// The letter is stored uppercased. Stock letters are `A`-`D`; anything else
/// simply never reads as set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelfSwitchKey {
    pub map_id: MapId,
    pub event_id: EventId,
    pub letter: String,
}

impl SelfSwitchKey {
    pub fn new(map_id: MapId, event_id: EventId, letter: &str) -> Self {
        Self {
            map_id,
            event_id,
            letter: letter.to_uppercase(),
        }
    }
}

impl<F> SwitchOracle for F
where
    F: Fn(u32) -> bool,
{
    fn value(&self, switch_id: u32) -> bool {
        self(switch_id)
    }
}
