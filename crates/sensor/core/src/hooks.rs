//! Lifecycle hooks the host calls for every map event.
//!
//! The host's frame loop calls [`SensorHooks::on_event_update`] after each
//! event's own update, and [`SensorHooks::on_event_start`] first thing when an
//! event's script begins. Decay is not driven from here: every subject's
//! [`EffectState::tick`] runs separately, after all update hooks of the frame.

use crate::config::SensorConfig;
use crate::env::{BalloonChannel, WorldContext};
use crate::event::SensorEvent;
use crate::sensing::{self, Verdict};
use crate::state::{ApplyOutcome, EffectState, EventId, Subject};

/// What the sensing cycle did to its subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorRoute {
    /// Sensed; the subject was marked and possibly flashed / ballooned.
    Applied(ApplyOutcome),
    /// Not sensed; previously applied feedback was cleared.
    Erased,
    /// Not sensed and nothing to clear.
    Idle,
}

/// Summary of one event's sensing cycle, for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorReport {
    pub event: EventId,
    pub subject: Subject,
    pub verdict: Verdict,
    pub route: SensorRoute,
}

/// Sensing lifecycle bound to one [`SensorConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SensorHooks<'a> {
    config: &'a SensorConfig,
}

impl<'a> SensorHooks<'a> {
    pub fn new(config: &'a SensorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a SensorConfig {
        self.config
    }

    /// The entity that shows feedback for `event`.
    pub fn resolve_subject(&self, event: &SensorEvent) -> Subject {
        if self.config.apply_player {
            Subject::Player
        } else {
            event.subject()
        }
    }

    /// Runs the sensing cycle for one event.
    ///
    /// Returns `None` without touching any state when the event has no
    /// active page. When the event is not sensed, its own balloon interval is
    /// reset so throttling restarts cleanly once sensing resumes.
    pub fn on_event_update(
        &self,
        event: &mut SensorEvent,
        player: &mut EffectState,
        world: &WorldContext<'_>,
        balloons: &mut dyn BalloonChannel,
    ) -> Option<SensorReport> {
        if !event.page_active {
            return None;
        }

        let verdict = sensing::evaluate(event, world, self.config);
        let subject = self.resolve_subject(event);
        let sense = event.sense().clone();

        let target = match subject {
            Subject::Player => player,
            Subject::Event(_) => event.effect_mut(),
        };

        let route = if verdict.is_sensed() {
            SensorRoute::Applied(target.apply(subject, &sense, self.config, balloons))
        } else {
            let erased = target.erase(self.config);
            event.effect_mut().reset_balloon_interval();
            if erased { SensorRoute::Erased } else { SensorRoute::Idle }
        };

        Some(SensorReport {
            event: event.id(),
            subject,
            verdict,
            route,
        })
    }

    /// Clears the event's own feedback as its script starts.
    ///
    /// Always targets the event itself, even when effects go to the player.
    /// Returns whether anything was erased.
    pub fn on_event_start(&self, event: &mut SensorEvent) -> bool {
        event.effect_mut().erase(self.config)
    }
}
