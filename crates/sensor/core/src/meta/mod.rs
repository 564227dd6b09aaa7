//! Per-event metadata tags and their resolution into sensor settings.
//!
//! Events carry free-form `<Key:Value>` tags in their note field. Sensor tags
//! use the `NES` prefix and accept two spellings per setting; the first
//! spelling present wins. Resolution happens once, when the event is built.
mod parse;

use std::collections::HashMap;

pub use parse::{parse_bool_token, parse_int_clamped, parse_int_lenient};

use crate::config::SensorConfig;
use crate::state::BalloonId;

/// Prefix shared by every sensor tag.
pub const TAG_PREFIX: &str = "NES";

/// Flash enable override (`ON` / `OFF`).
pub const FLASH_TAGS: [&str; 2] = ["フラッシュ対象", "FlashEvent"];
/// Balloon id override (integer, `0` disables).
pub const BALLOON_TAGS: [&str; 2] = ["フキダシ対象", "BalloonEvent"];
/// Gating switch id.
pub const SWITCH_TAGS: [&str; 2] = ["スイッチ", "Switch"];
/// Gating self-switch letter.
pub const SELF_SWITCH_TAGS: [&str; 2] = ["セルフスイッチ", "SelfSwitch"];

/// Value recorded for a tag written without a value, e.g. `<NESFlashEvent>`.
const FLAG_VALUE: &str = "true";

/// Raw metadata of one event: tag name to string value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MetaTags(HashMap<String, String>);

impl MetaTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts `<Key:Value>` and `<Key>` tags from a note.
    ///
    /// Keys may not contain `<`, `>` or `:`. A later tag with the same key
    /// replaces the earlier one. Text outside tags is ignored.
    pub fn from_note(note: &str) -> Self {
        let mut tags = HashMap::new();
        let mut rest = note;

        while let Some(open) = rest.find('<') {
            let body = &rest[open + 1..];
            let name_len = body.find(['<', '>', ':']).unwrap_or(body.len());
            if name_len == 0 {
                rest = body;
                continue;
            }
            let Some(close) = body[name_len..].find('>').map(|i| i + name_len) else {
                break;
            };

            let name = &body[..name_len];
            let value = match body[name_len..close].strip_prefix(':') {
                Some(value) => value,
                None => FLAG_VALUE,
            };
            tags.insert(name.to_string(), value.to_string());
            rest = &body[close + 1..];
        }

        Self(tags)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First non-empty value among the prefixed aliases, in order.
    ///
    /// An empty value (`<NESBalloonEvent:>`) counts as absent.
    pub fn lookup(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| {
            self.0
                .get(&format!("{TAG_PREFIX}{alias}"))
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        })
    }
}

impl<K, V> FromIterator<(K, V)> for MetaTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Sensor settings of one event, resolved from its metadata.
///
/// `None` means "not tagged": flash and balloon then fall back to
/// [`SensorConfig`]; switch gates are simply not applied. Switch values stay
/// raw here and are coerced when the gate is evaluated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventSensorConfig {
    pub flash: Option<bool>,
    pub balloon: Option<BalloonId>,
    pub switch: Option<String>,
    pub self_switch: Option<String>,
}

impl EventSensorConfig {
    pub fn resolve(meta: &MetaTags) -> Self {
        Self {
            flash: meta.lookup(&FLASH_TAGS).map(parse_bool_token),
            balloon: meta.lookup(&BALLOON_TAGS).map(|value| {
                BalloonId(parse_int_clamped(value, 0, i64::from(u32::MAX)) as u32)
            }),
            switch: meta.lookup(&SWITCH_TAGS).map(str::to_string),
            self_switch: meta.lookup(&SELF_SWITCH_TAGS).map(str::to_string),
        }
    }

    pub fn flash_enabled(&self, config: &SensorConfig) -> bool {
        self.flash.unwrap_or(config.default_flash)
    }

    /// Tagged balloon (even an explicit `0`) wins over the default.
    pub fn balloon_id(&self, config: &SensorConfig) -> BalloonId {
        self.balloon.unwrap_or(config.default_balloon)
    }

    /// Gating switch id, clamped to at least 1.
    pub fn switch_id(&self) -> Option<u32> {
        self.switch
            .as_deref()
            .map(|raw| parse_int_clamped(raw, 1, i64::from(u32::MAX)) as u32)
    }

    /// Gating self-switch letter, as tagged.
    pub fn self_switch_letter(&self) -> Option<&str> {
        self.self_switch.as_deref()
    }
}
