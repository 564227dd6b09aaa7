use crate::state::{Direction, MapId, Position};

/// Player state visible to the sensing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub position: Position,
    pub direction: Direction,
}

impl PlayerView {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Map state visible to the sensing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapView {
    pub map_id: MapId,
    pub width: u32,
    pub height: u32,
    pub loop_horizontal: bool,
    pub loop_vertical: bool,
    /// A modal event script is currently executing on this map.
    pub event_running: bool,
}

impl MapView {
    pub fn new(map_id: MapId, width: u32, height: u32) -> Self {
        Self {
            map_id,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_loops(mut self, horizontal: bool, vertical: bool) -> Self {
        self.loop_horizontal = horizontal;
        self.loop_vertical = vertical;
        self
    }

    /// Signed horizontal distance `x1 - x2`, taking the short way round on
    /// horizontally looping maps.
    pub fn delta_x(&self, x1: i32, x2: i32) -> i32 {
        wrap_delta(x1 - x2, self.width, self.loop_horizontal)
    }

    /// Signed vertical distance `y1 - y2`, taking the short way round on
    /// vertically looping maps.
    pub fn delta_y(&self, y1: i32, y2: i32) -> i32 {
        wrap_delta(y1 - y2, self.height, self.loop_vertical)
    }
}

fn wrap_delta(delta: i32, size: u32, looping: bool) -> i32 {
    let size = i64::from(size);
    let wide = i64::from(delta);
    if looping && wide.abs() * 2 > size {
        let wrapped = if wide < 0 { wide + size } else { wide - size };
        wrapped as i32
    } else {
        delta
    }
}
