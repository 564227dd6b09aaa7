//! Frame driver that owns one map's sensing state.
//!
//! [`SensorWorld`] plays the host's part: it mirrors the player and map,
//! holds the flag stores and balloon playback, and runs the sensor hooks in
//! the fixed per-frame order (all apply/erase decisions, then decay).
use std::collections::HashSet;

use sensor_content::MapLayout;
use sensor_core::{
    BlendColor, Direction, EffectState, EventId, MapView, PlayerView, Position, SensorConfig,
    SensorEvent, SensorHooks, SensorReport, SensorRoute, Subject, Verdict, WorldContext,
};
use tracing::{debug, info, trace};

use crate::balloon::{BalloonPlayback, BalloonTracker};
use crate::error::{Result, RuntimeError};
use crate::stores::{SelfSwitchStore, SwitchStore};

/// Everything the sensing pass did during one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSummary {
    pub frame: u64,
    pub reports: Vec<SensorReport>,
}

impl FrameSummary {
    /// Events sensed this frame, in evaluation order.
    pub fn sensed(&self) -> impl Iterator<Item = EventId> + '_ {
        self.reports
            .iter()
            .filter(|report| report.verdict.is_sensed())
            .map(|report| report.event)
    }
}

/// What the sprite layer needs to draw one subject this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectFeedback {
    pub subject: Subject,
    /// Flash blend color, `None` when no flash is active.
    pub blend: Option<BlendColor>,
    pub balloon: Option<BalloonPlayback>,
    /// A balloon cancel was consumed this frame.
    pub balloon_cancelled: bool,
}

/// Sensing state of one map: events, player, stores, and balloon playback.
#[derive(Debug)]
pub struct SensorWorld {
    config: SensorConfig,
    map: MapView,
    player: PlayerView,
    player_effect: EffectState,
    events: Vec<SensorEvent>,
    switches: SwitchStore,
    self_switches: SelfSwitchStore,
    balloons: BalloonTracker,
    frame: u64,
}

impl SensorWorld {
    pub fn builder(config: SensorConfig, map: MapView) -> SensorWorldBuilder {
        SensorWorldBuilder::new(config, map)
    }

    /// Builds a world from a loaded layout with the player at `player`.
    pub fn from_layout(
        config: SensorConfig,
        layout: MapLayout,
        player: PlayerView,
    ) -> Result<Self> {
        Self::builder(config, layout.map)
            .player(player)
            .events(layout.events)
            .build()
    }

    /// Runs one frame: the sensing cycle of every event, then decay of every
    /// subject.
    pub fn step_frame(&mut self) -> FrameSummary {
        let hooks = SensorHooks::new(&self.config);
        let world = WorldContext::new(self.player, self.map, &self.switches, &self.self_switches);

        let mut reports = Vec::with_capacity(self.events.len());
        for event in self.events.iter_mut() {
            let Some(report) = hooks.on_event_update(
                event,
                &mut self.player_effect,
                &world,
                &mut self.balloons,
            ) else {
                continue;
            };
            log_report(self.frame, &report);
            reports.push(report);
        }

        for event in self.events.iter_mut() {
            event.effect_mut().tick();
        }
        self.player_effect.tick();

        let summary = FrameSummary {
            frame: self.frame,
            reports,
        };
        self.frame += 1;
        summary
    }

    /// Render-side pass: drains cancel latches, advances balloon playback,
    /// and reports what each subject should show.
    pub fn render_feedback(&mut self) -> Vec<SubjectFeedback> {
        let mut feedback = Vec::with_capacity(self.events.len() + 1);

        for event in self.events.iter_mut() {
            let subject = event.subject();
            feedback.push(render_subject(&mut self.balloons, subject, event.effect_mut()));
        }
        feedback.push(render_subject(
            &mut self.balloons,
            Subject::Player,
            &mut self.player_effect,
        ));

        feedback
    }

    /// Starts an event's script: its own feedback is erased first, then the
    /// map is marked busy until [`SensorWorld::finish_event`].
    pub fn start_event(&mut self, id: EventId) -> Result<bool> {
        let hooks = SensorHooks::new(&self.config);
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id() == id)
            .ok_or(RuntimeError::UnknownEvent(id))?;

        let erased = hooks.on_event_start(event);
        self.map.event_running = true;
        debug!(frame = self.frame, event = %id, erased, "event started");
        Ok(erased)
    }

    pub fn finish_event(&mut self) {
        self.map.event_running = false;
    }

    /// Drops all transient effect state, as after loading a save.
    pub fn reset_transient(&mut self) {
        for event in self.events.iter_mut() {
            event.effect_mut().reset();
        }
        self.player_effect.reset();
        self.balloons.clear();
        info!(events = self.events.len(), "sensor effects reset");
    }

    pub fn set_player_position(&mut self, position: Position) {
        self.player.position = position;
    }

    pub fn set_player_direction(&mut self, direction: Direction) {
        self.player.direction = direction;
    }

    /// Turns the player toward `direction` and steps one tile that way.
    pub fn move_player(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.player.direction = direction;
        self.player.position = Position::new(self.player.position.x + dx, self.player.position.y + dy);
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn player(&self) -> &PlayerView {
        &self.player
    }

    pub fn player_effect(&self) -> &EffectState {
        &self.player_effect
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn events(&self) -> &[SensorEvent] {
        &self.events
    }

    pub fn event(&self, id: EventId) -> Option<&SensorEvent> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut SensorEvent> {
        self.events.iter_mut().find(|event| event.id() == id)
    }

    pub fn switches_mut(&mut self) -> &mut SwitchStore {
        &mut self.switches
    }

    pub fn self_switches_mut(&mut self) -> &mut SelfSwitchStore {
        &mut self.self_switches
    }

    pub fn balloons(&self) -> &BalloonTracker {
        &self.balloons
    }
}

fn render_subject(
    balloons: &mut BalloonTracker,
    subject: Subject,
    effect: &mut EffectState,
) -> SubjectFeedback {
    let balloon_cancelled = balloons.update(subject, effect);
    SubjectFeedback {
        subject,
        blend: effect.blend_color(),
        balloon: balloons.playback(subject),
        balloon_cancelled,
    }
}

fn log_report(frame: u64, report: &SensorReport) {
    match (report.verdict, report.route) {
        (_, SensorRoute::Applied(outcome)) => {
            if outcome.flash_started {
                debug!(frame, event = %report.event, subject = %report.subject, "flash started");
            }
            if let Some(balloon) = outcome.balloon_requested {
                debug!(
                    frame,
                    event = %report.event,
                    subject = %report.subject,
                    %balloon,
                    "balloon requested"
                );
            }
        }
        (Verdict::Rejected(reason), SensorRoute::Erased) => {
            debug!(frame, event = %report.event, subject = %report.subject, %reason, "effect erased");
        }
        (Verdict::Rejected(reason), SensorRoute::Idle) => {
            trace!(frame, event = %report.event, %reason, "not sensed");
        }
        (Verdict::Sensed, _) => {}
    }
}

/// Builder for [`SensorWorld`].
pub struct SensorWorldBuilder {
    config: SensorConfig,
    map: MapView,
    player: PlayerView,
    events: Vec<SensorEvent>,
    switches: SwitchStore,
    self_switches: SelfSwitchStore,
    balloons: BalloonTracker,
}

impl SensorWorldBuilder {
    fn new(config: SensorConfig, map: MapView) -> Self {
        Self {
            config,
            map,
            player: PlayerView::default(),
            events: Vec::new(),
            switches: SwitchStore::new(),
            self_switches: SelfSwitchStore::new(),
            balloons: BalloonTracker::new(),
        }
    }

    /// Initial player position and facing.
    pub fn player(mut self, player: PlayerView) -> Self {
        self.player = player;
        self
    }

    pub fn event(mut self, event: SensorEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn events(mut self, events: impl IntoIterator<Item = SensorEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn switches(mut self, switches: SwitchStore) -> Self {
        self.switches = switches;
        self
    }

    pub fn self_switches(mut self, self_switches: SelfSwitchStore) -> Self {
        self.self_switches = self_switches;
        self
    }

    /// Replaces the stock balloon playback timing.
    pub fn balloon_duration(mut self, duration: u32) -> Self {
        self.balloons = BalloonTracker::with_duration(duration);
        self
    }

    /// Validates the configuration and event set.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::Config`] if the config fails validation
    /// - [`RuntimeError::DuplicateEvent`] if two events share an id
    /// - [`RuntimeError::ForeignEvent`] if an event belongs to another map
    pub fn build(self) -> Result<SensorWorld> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.events.len());
        for event in &self.events {
            if event.map_id() != self.map.map_id {
                return Err(RuntimeError::ForeignEvent {
                    event: event.id(),
                    expected: self.map.map_id,
                    found: event.map_id(),
                });
            }
            if !seen.insert(event.id()) {
                return Err(RuntimeError::DuplicateEvent(event.id()));
            }
        }

        info!(
            map = %self.map.map_id,
            events = self.events.len(),
            apply_player = self.config.apply_player,
            "sensor world built"
        );

        Ok(SensorWorld {
            config: self.config,
            map: self.map,
            player: self.player,
            player_effect: EffectState::new(),
            events: self.events,
            switches: self.switches,
            self_switches: self.self_switches,
            balloons: self.balloons,
            frame: 0,
        })
    }
}
