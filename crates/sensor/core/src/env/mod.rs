//! Read-only views of the host world.
//!
//! The host owns the player, the map, and both flag stores. Sensing only
//! reads them, through the views and oracle traits bundled in
//! [`WorldContext`], so the evaluator stays a pure function of its inputs.
//! The only write channel back into the host is [`BalloonChannel`].
mod balloon;
mod map;
mod switches;

pub use balloon::BalloonChannel;
pub use map::{MapView, PlayerView};
pub use switches::{SelfSwitchKey, SelfSwitchOracle, SwitchOracle};

/// Aggregates the world state a sensing pass needs for one frame.
#[derive(Clone, Copy)]
pub struct WorldContext<'a> {
    pub player: PlayerView,
    pub map: MapView,
    switches: &'a dyn SwitchOracle,
    self_switches: &'a dyn SelfSwitchOracle,
}

impl<'a> WorldContext<'a> {
    pub fn new(
        player: PlayerView,
        map: MapView,
        switches: &'a dyn SwitchOracle,
        self_switches: &'a dyn SelfSwitchOracle,
    ) -> Self {
        Self {
            player,
            map,
            switches,
            self_switches,
        }
    }

    pub fn switches(&self) -> &'a dyn SwitchOracle {
        self.switches
    }

    pub fn self_switches(&self) -> &'a dyn SelfSwitchOracle {
        self.self_switches
    }
}

impl core::fmt::Debug for WorldContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WorldContext")
            .field("player", &self.player)
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
