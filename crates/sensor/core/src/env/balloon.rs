use crate::state::{BalloonId, Subject};

/// Host balloon-display subsystem.
///
/// The host owns animation timing; sensing only asks whether a balloon is
/// still playing and fires new requests.
pub trait BalloonChannel {
    fn is_playing(&self, subject: Subject) -> bool;

    /// Queues `balloon` on `subject`. Fire-and-forget.
    fn request(&mut self, subject: Subject, balloon: BalloonId);
}
