//! Per-frame decision of whether an event is sensed by the player.
//!
//! [`evaluate`] is a pure function of the event, the world, and the config:
//! calling it twice in the same frame gives the same answer. Checks run in a
//! fixed order and the first failing one is reported.

use crate::config::SensorConfig;
use crate::env::{SelfSwitchKey, WorldContext};
use crate::event::SensorEvent;
use crate::state::Direction;

/// Why an event was not sensed this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    /// Empty events are disabled and this one has no commands.
    EmptyEvent,
    /// Farther than the sensor distance.
    OutOfRange,
    /// In range, but the player faces away.
    FacingAway,
    /// A modal event script is running on the map.
    EventRunning,
    /// The gating switch is not in the required state.
    SwitchGate,
    /// The gating self-switch is not in the required state.
    SelfSwitchGate,
}

/// Result of one sensing evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Sensed,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_sensed(self) -> bool {
        matches!(self, Verdict::Sensed)
    }
}

/// Shorthand for `evaluate(..).is_sensed()`.
pub fn is_sensed(event: &SensorEvent, world: &WorldContext<'_>, config: &SensorConfig) -> bool {
    evaluate(event, world, config).is_sensed()
}

pub fn evaluate(event: &SensorEvent, world: &WorldContext<'_>, config: &SensorConfig) -> Verdict {
    if !passes_empty_check(event, config) {
        return Verdict::Rejected(RejectReason::EmptyEvent);
    }
    if let Err(reason) = check_proximity(event, world, config) {
        return Verdict::Rejected(reason);
    }
    if world.map.event_running {
        return Verdict::Rejected(RejectReason::EventRunning);
    }
    if !passes_switch_gate(event, world, config) {
        return Verdict::Rejected(RejectReason::SwitchGate);
    }
    if !passes_self_switch_gate(event, world, config) {
        return Verdict::Rejected(RejectReason::SelfSwitchGate);
    }
    Verdict::Sensed
}

fn passes_empty_check(event: &SensorEvent, config: &SensorConfig) -> bool {
    event.has_commands() || !config.disable_empty
}

fn check_proximity(
    event: &SensorEvent,
    world: &WorldContext<'_>,
    config: &SensorConfig,
) -> Result<(), RejectReason> {
    let player = world.player.position;
    let dx = world.map.delta_x(event.position.x, player.x);
    let dy = world.map.delta_y(event.position.y, player.y);
    let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());

    if u64::from(ax) + u64::from(ay) > u64::from(config.sensor_distance) {
        return Err(RejectReason::OutOfRange);
    }
    if !config.consider_direction {
        return Ok(());
    }

    let required = if ax > ay {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else if dy != 0 {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    } else {
        None
    };

    match required {
        Some(direction) if direction != world.player.direction => Err(RejectReason::FacingAway),
        _ => Ok(()),
    }
}

fn passes_switch_gate(event: &SensorEvent, world: &WorldContext<'_>, config: &SensorConfig) -> bool {
    match event.sense().switch_id() {
        Some(switch_id) => world.switches().value(switch_id) != config.condition_reverse,
        None => true,
    }
}

fn passes_self_switch_gate(
    event: &SensorEvent,
    world: &WorldContext<'_>,
    config: &SensorConfig,
) -> bool {
    match event.sense().self_switch_letter() {
        Some(letter) => {
            let key = SelfSwitchKey::new(event.map_id(), event.id(), letter);
            world.self_switches().value(&key) != config.condition_reverse
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::env::{MapView, PlayerView, SelfSwitchOracle, SwitchOracle};
    use crate::meta::MetaTags;
    use crate::state::{EventId, MapId, Position};

    #[derive(Default)]
    struct Flags {
        switches: HashSet<u32>,
        self_switches: HashSet<SelfSwitchKey>,
    }

    impl SwitchOracle for Flags {
        fn value(&self, switch_id: u32) -> bool {
            self.switches.contains(&switch_id)
        }
    }

    impl SelfSwitchOracle for Flags {
        fn value(&self, key: &SelfSwitchKey) -> bool {
            self.self_switches.contains(key)
        }
    }

    const MAP: MapId = MapId(1);

    fn event_at(x: i32, y: i32, note: &str) -> SensorEvent {
        SensorEvent::new(MAP, EventId(1), Position::new(x, y), &MetaTags::from_note(note))
            .with_commands(3)
    }

    fn world<'a>(flags: &'a Flags, player: PlayerView) -> WorldContext<'a> {
        WorldContext::new(player, MapView::new(MAP, 20, 20), flags, flags)
    }

    fn player_at(x: i32, y: i32, direction: Direction) -> PlayerView {
        PlayerView::new(Position::new(x, y), direction)
    }

    #[test]
    fn empty_events_are_never_sensed_when_disabled() {
        let flags = Flags::default();
        let world = world(&flags, player_at(5, 5, Direction::Down));
        let config = SensorConfig::default();

        for commands in [0, 1] {
            let event = event_at(5, 5, "").with_commands(commands);
            assert_eq!(
                evaluate(&event, &world, &config),
                Verdict::Rejected(RejectReason::EmptyEvent)
            );
        }

        let permissive = SensorConfig {
            disable_empty: false,
            ..SensorConfig::default()
        };
        assert!(is_sensed(&event_at(5, 5, "").with_commands(0), &world, &permissive));
    }

    #[test]
    fn manhattan_radius_bounds_sensing() {
        let flags = Flags::default();
        let world = world(&flags, player_at(5, 5, Direction::Down));
        let config = SensorConfig {
            sensor_distance: 2,
            ..SensorConfig::default()
        };

        for dx in -3i32..=3 {
            for dy in -3i32..=3 {
                let event = event_at(5 + dx, 5 + dy, "");
                let expected = dx.abs() + dy.abs() <= 2;
                assert_eq!(is_sensed(&event, &world, &config), expected, "dx={dx} dy={dy}");
            }
        }
    }

    #[test]
    fn direction_is_checked_along_dominant_axis() {
        let flags = Flags::default();
        let config = SensorConfig {
            sensor_distance: 3,
            consider_direction: true,
            ..SensorConfig::default()
        };
        let east = event_at(7, 6, "");
        let west = event_at(3, 6, "");

        let facing_right = world(&flags, player_at(5, 5, Direction::Right));
        let facing_left = world(&flags, player_at(5, 5, Direction::Left));

        assert!(is_sensed(&east, &facing_right, &config));
        assert_eq!(
            evaluate(&east, &facing_left, &config),
            Verdict::Rejected(RejectReason::FacingAway)
        );
        assert!(is_sensed(&west, &facing_left, &config));
        assert!(!is_sensed(&west, &facing_right, &config));
    }

    #[test]
    fn vertical_and_diagonal_ties_use_y_axis() {
        let flags = Flags::default();
        let config = SensorConfig {
            sensor_distance: 2,
            consider_direction: true,
            ..SensorConfig::default()
        };
        let below_right = event_at(6, 6, "");
        let above = event_at(5, 3, "");

        assert!(is_sensed(&below_right, &world(&flags, player_at(5, 5, Direction::Down)), &config));
        assert!(!is_sensed(&below_right, &world(&flags, player_at(5, 5, Direction::Right)), &config));
        assert!(is_sensed(&above, &world(&flags, player_at(5, 5, Direction::Up)), &config));
    }

    #[test]
    fn same_tile_ignores_direction() {
        let flags = Flags::default();
        let config = SensorConfig {
            consider_direction: true,
            ..SensorConfig::default()
        };
        let event = event_at(5, 5, "");
        for direction in Direction::ALL {
            assert!(is_sensed(&event, &world(&flags, player_at(5, 5, direction)), &config));
        }
    }

    #[test]
    fn running_event_blocks_sensing() {
        let flags = Flags::default();
        let mut world = world(&flags, player_at(5, 5, Direction::Down));
        world.map.event_running = true;

        assert_eq!(
            evaluate(&event_at(5, 6, ""), &world, &SensorConfig::default()),
            Verdict::Rejected(RejectReason::EventRunning)
        );
    }

    #[test]
    fn switch_gate_honours_reverse_flag() {
        let mut flags = Flags::default();
        flags.switches.insert(5);
        let world = world(&flags, player_at(5, 5, Direction::Down));
        let event = event_at(5, 6, "<NESSwitch:5>");

        let normal = SensorConfig::default();
        let reversed = SensorConfig {
            condition_reverse: true,
            ..SensorConfig::default()
        };

        assert!(is_sensed(&event, &world, &normal));
        assert_eq!(
            evaluate(&event, &world, &reversed),
            Verdict::Rejected(RejectReason::SwitchGate)
        );

        let unset = event_at(5, 6, "<NESSwitch:6>");
        assert!(!is_sensed(&unset, &world, &normal));
        assert!(is_sensed(&unset, &world, &reversed));
    }

    #[test]
    fn non_numeric_switch_reads_switch_one() {
        let mut flags = Flags::default();
        flags.switches.insert(1);
        let world = world(&flags, player_at(5, 5, Direction::Down));

        assert!(is_sensed(&event_at(5, 6, "<NESSwitch:abc>"), &world, &SensorConfig::default()));
    }

    #[test]
    fn self_switch_gate_honours_reverse_flag() {
        let mut flags = Flags::default();
        flags
            .self_switches
            .insert(SelfSwitchKey::new(MAP, EventId(1), "A"));
        let world = world(&flags, player_at(5, 5, Direction::Down));
        let event = event_at(5, 6, "<NESSelfSwitch:a>");

        let reversed = SensorConfig {
            condition_reverse: true,
            ..SensorConfig::default()
        };

        assert!(is_sensed(&event, &world, &SensorConfig::default()));
        assert_eq!(
            evaluate(&event, &world, &reversed),
            Verdict::Rejected(RejectReason::SelfSwitchGate)
        );

        let other_letter = event_at(5, 6, "<NESセルフスイッチ:B>");
        assert!(!is_sensed(&other_letter, &world, &SensorConfig::default()));
        assert!(is_sensed(&other_letter, &world, &reversed));
    }

    #[test]
    fn looping_maps_sense_across_the_seam() {
        let flags = Flags::default();
        let player = player_at(19, 5, Direction::Right);
        let mut world = world(&flags, player);
        let event = event_at(0, 5, "");
        let config = SensorConfig {
            consider_direction: true,
            ..SensorConfig::default()
        };

        assert!(!is_sensed(&event, &world, &config));

        world.map = world.map.with_loops(true, false);
        assert!(is_sensed(&event, &world, &config));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let flags = Flags::default();
        let world = world(&flags, player_at(5, 5, Direction::Down));
        let event = event_at(5, 7, "");
        let config = SensorConfig::default();

        let first = evaluate(&event, &world, &config);
        assert_eq!(first, evaluate(&event, &world, &config));
    }
}
