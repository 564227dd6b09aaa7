//! Map event layout loader.
//!
//! Loads map geometry and the events placed on it, including each event's
//! note field, from RON files. Note tags are resolved into sensor settings
//! here, once, as events are built.

use std::path::Path;

use sensor_core::{EventId, MapId, MapView, MetaTags, Position, SensorEvent};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One event entry of a layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpec {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub note: String,
    /// Length of the active page's command list (including the terminator).
    #[serde(default)]
    pub commands: usize,
    #[serde(default = "default_page_active")]
    pub page_active: bool,
}

fn default_page_active() -> bool {
    true
}

/// Layout data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutRon {
    map_id: u32,
    dimensions: (u32, u32),
    #[serde(default)]
    loop_horizontal: bool,
    #[serde(default)]
    loop_vertical: bool,
    #[serde(default)]
    events: Vec<EventSpec>,
}

/// A loaded map: its static view and the events placed on it.
#[derive(Debug, Clone)]
pub struct MapLayout {
    pub map: MapView,
    pub events: Vec<SensorEvent>,
}

/// Loader for map event layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the layout
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a layout from RON text.
    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let data: LayoutRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))?;

        let map_id = MapId(data.map_id);
        let map = MapView::new(map_id, data.dimensions.0, data.dimensions.1)
            .with_loops(data.loop_horizontal, data.loop_vertical);

        let events = data
            .events
            .iter()
            .map(|spec| build_event(map_id, spec))
            .collect();

        Ok(MapLayout { map, events })
    }
}

fn build_event(map_id: MapId, spec: &EventSpec) -> SensorEvent {
    let meta = MetaTags::from_note(&spec.note);
    SensorEvent::new(map_id, EventId(spec.id), Position::new(spec.x, spec.y), &meta)
        .with_commands(spec.commands)
        .with_page(spec.page_active)
}
