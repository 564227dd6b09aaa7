//! Reference balloon playback, standing in for the host's balloon sprites.
//!
//! Requests are queued by the sensing hooks through [`BalloonChannel`] and
//! picked up on the next render pass, which also honours the one-shot cancel
//! latch of each subject's [`EffectState`].
use std::collections::HashMap;

use sensor_core::{BalloonChannel, BalloonId, EffectState, Subject};

/// Balloon currently on screen for one subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalloonPlayback {
    pub balloon: BalloonId,
    pub remaining: u32,
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    requested: Option<BalloonId>,
    playing: Option<BalloonPlayback>,
}

/// Per-subject balloon queue and playback timer.
#[derive(Clone, Debug)]
pub struct BalloonTracker {
    duration: u32,
    slots: HashMap<Subject, Slot>,
}

impl BalloonTracker {
    /// Stock balloon timing: 8 animation frames at speed 8, then a 12 tick hold.
    pub const DEFAULT_DURATION: u32 = 8 * 8 + 12;

    pub fn new() -> Self {
        Self::with_duration(Self::DEFAULT_DURATION)
    }

    pub fn with_duration(duration: u32) -> Self {
        Self {
            duration,
            slots: HashMap::new(),
        }
    }

    pub fn playback(&self, subject: Subject) -> Option<BalloonPlayback> {
        self.slots.get(&subject).and_then(|slot| slot.playing)
    }

    /// Render-side update for one subject.
    ///
    /// The cancel latch is drained first so a cancelled balloon ends before a
    /// queued request starts or the current one advances. Returns whether a
    /// balloon was cancelled.
    pub fn update(&mut self, subject: Subject, effect: &mut EffectState) -> bool {
        let cancelled = effect.take_balloon_cancel();
        let Some(slot) = self.slots.get_mut(&subject) else {
            return cancelled;
        };

        if cancelled {
            slot.playing = None;
        }
        if let Some(balloon) = slot.requested.take() {
            slot.playing = Some(BalloonPlayback {
                balloon,
                remaining: self.duration,
            });
        }
        if let Some(playback) = slot.playing.as_mut() {
            playback.remaining = playback.remaining.saturating_sub(1);
            if playback.remaining == 0 {
                slot.playing = None;
            }
        }
        cancelled
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for BalloonTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BalloonChannel for BalloonTracker {
    fn is_playing(&self, subject: Subject) -> bool {
        self.slots
            .get(&subject)
            .is_some_and(|slot| slot.requested.is_some() || slot.playing.is_some())
    }

    fn request(&mut self, subject: Subject, balloon: BalloonId) {
        self.slots.entry(subject).or_default().requested = Some(balloon);
    }
}

#[cfg(test)]
mod tests {
    use sensor_core::{EventId, SensorConfig};

    use super::*;

    const SUBJECT: Subject = Subject::Event(EventId(1));

    #[test]
    fn request_plays_for_configured_duration() {
        let mut tracker = BalloonTracker::with_duration(3);
        let mut effect = EffectState::new();
        tracker.request(SUBJECT, BalloonId(1));
        assert!(tracker.is_playing(SUBJECT));

        tracker.update(SUBJECT, &mut effect);
        assert_eq!(
            tracker.playback(SUBJECT),
            Some(BalloonPlayback {
                balloon: BalloonId(1),
                remaining: 2
            })
        );
        tracker.update(SUBJECT, &mut effect);
        tracker.update(SUBJECT, &mut effect);

        assert_eq!(tracker.playback(SUBJECT), None);
        assert!(!tracker.is_playing(SUBJECT));
    }

    #[test]
    fn cancel_latch_ends_playback_immediately() {
        let config = SensorConfig {
            erase_when_away: true,
            default_balloon: BalloonId(3),
            ..SensorConfig::default()
        };
        let mut tracker = BalloonTracker::new();
        let mut effect = EffectState::new();
        effect.apply(SUBJECT, &Default::default(), &config, &mut tracker);
        tracker.update(SUBJECT, &mut effect);
        assert!(tracker.playback(SUBJECT).is_some());

        effect.erase(&config);

        assert!(tracker.update(SUBJECT, &mut effect));
        assert_eq!(tracker.playback(SUBJECT), None);
        assert!(!effect.is_balloon_cancel_pending());
    }

    #[test]
    fn unknown_subject_still_drains_latch() {
        let config = SensorConfig {
            erase_when_away: true,
            ..SensorConfig::default()
        };
        let mut tracker = BalloonTracker::new();
        let mut effect = EffectState::new();
        effect.apply(Subject::Player, &Default::default(), &config, &mut tracker);
        effect.erase(&config);

        assert!(tracker.update(Subject::Player, &mut effect));
        assert!(!effect.is_balloon_cancel_pending());
    }
}
