use crate::meta::{EventSensorConfig, MetaTags};
use crate::state::{EffectState, EventId, MapId, Position, Subject};

/// A map event as seen by the sensor.
///
/// Host-driven fields (`position`, `command_count`, `page_active`) are public
/// so the host can mirror its own event state each frame. The resolved
/// [`EventSensorConfig`] is fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorEvent {
    id: EventId,
    map_id: MapId,
    /// Current tile position.
    pub position: Position,
    /// Length of the active page's executable command list.
    pub command_count: usize,
    /// Whether the event currently has an active page (not blank/disabled).
    pub page_active: bool,
    sense: EventSensorConfig,
    effect: EffectState,
}

impl SensorEvent {
    pub fn new(map_id: MapId, id: EventId, position: Position, meta: &MetaTags) -> Self {
        Self::with_sense(map_id, id, position, EventSensorConfig::resolve(meta))
    }

    pub fn with_sense(
        map_id: MapId,
        id: EventId,
        position: Position,
        sense: EventSensorConfig,
    ) -> Self {
        Self {
            id,
            map_id,
            position,
            command_count: 0,
            page_active: true,
            sense,
            effect: EffectState::new(),
        }
    }

    /// Sets the command list length (builder pattern).
    #[must_use]
    pub fn with_commands(mut self, command_count: usize) -> Self {
        self.command_count = command_count;
        self
    }

    /// Sets whether the event has an active page (builder pattern).
    #[must_use]
    pub fn with_page(mut self, page_active: bool) -> Self {
        self.page_active = page_active;
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn subject(&self) -> Subject {
        Subject::Event(self.id)
    }

    pub fn sense(&self) -> &EventSensorConfig {
        &self.sense
    }

    pub fn effect(&self) -> &EffectState {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut EffectState {
        &mut self.effect
    }

    /// True when the event has something to run beyond the terminating
    /// command every page ends with.
    pub fn has_commands(&self) -> bool {
        self.command_count > 1
    }
}
