use std::fmt;

/// Identifier of a map event, unique within one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EV{:03}", self.0)
    }
}

/// Identifier of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Four-way facing, encoded the way the host engine stores it (numeric keypad
/// layout: 2 down, 4 left, 6 right, 8 up).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Down = 2,
    Left = 4,
    Right = 6,
    Up = 8,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];

    /// Decodes the host's numeric direction. Unknown codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Tile step in map coordinates (y grows downward).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
        }
    }
}

/// Balloon icon index. `0` means "no balloon".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BalloonId(pub u32);

impl BalloonId {
    pub const NONE: Self = Self(0);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Named stock icon for this id, if it is one of the fifteen shipped rows.
    pub fn kind(self) -> Option<BalloonKind> {
        u8::try_from(self.0).ok().and_then(BalloonKind::from_repr)
    }
}

impl From<BalloonKind> for BalloonId {
    fn from(kind: BalloonKind) -> Self {
        Self(kind as u32)
    }
}

impl fmt::Display for BalloonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}({})", kind, self.0),
            None if self.is_none() => write!(f, "none"),
            None => write!(f, "balloon({})", self.0),
        }
    }
}

/// Stock balloon icon rows of the host's balloon sheet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum BalloonKind {
    Exclamation = 1,
    Question = 2,
    MusicNote = 3,
    Heart = 4,
    Anger = 5,
    Sweat = 6,
    Frustration = 7,
    Silence = 8,
    LightBulb = 9,
    Zzz = 10,
    User1 = 11,
    User2 = 12,
    User3 = 13,
    User4 = 14,
    User5 = 15,
}

/// Entity that receives the visual effect of a sensing interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject {
    /// The sensed event itself.
    Event(EventId),
    /// The single player character shared by every event.
    Player,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Event(id) => write!(f, "{id}"),
            Subject::Player => write!(f, "player"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes_follow_keypad_layout() {
        assert_eq!(Direction::from_code(2), Some(Direction::Down));
        assert_eq!(Direction::from_code(4), Some(Direction::Left));
        assert_eq!(Direction::from_code(6), Some(Direction::Right));
        assert_eq!(Direction::from_code(8), Some(Direction::Up));
        assert_eq!(Direction::from_code(5), None);
        assert_eq!(Direction::Right.code(), 6);
    }

    #[test]
    fn balloon_kind_covers_stock_rows_only() {
        assert_eq!(BalloonId(1).kind(), Some(BalloonKind::Exclamation));
        assert_eq!(BalloonId(15).kind(), Some(BalloonKind::User5));
        assert_eq!(BalloonId(0).kind(), None);
        assert_eq!(BalloonId(16).kind(), None);
        assert_eq!(BalloonId::from(BalloonKind::Heart), BalloonId(4));
    }

    #[test]
    fn balloon_display_names_stock_icons() {
        assert_eq!(BalloonId(9).to_string(), "light_bulb(9)");
        assert_eq!(BalloonId::NONE.to_string(), "none");
        assert_eq!(BalloonId(40).to_string(), "balloon(40)");
    }
}
