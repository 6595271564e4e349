//! Demo screen configuration and its on-disk RON form.
//!
//! Persistence never surfaces errors to the demo: a missing, unreadable, or
//! corrupt file loads as defaults, and a failed save leaves the previous
//! file in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::control::SegmentedControl;
use crate::core::measure::TextMeasure;
use crate::core::style::SegmentStyle;

/// Demo screen configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub titles: Vec<String>,
    pub selected_index: i32,
    pub draggable: bool,
    pub strip_height: f32,
    pub style: SegmentStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            titles: vec![
                "Segment 1".to_string(),
                "Segment 2".to_string(),
                "Segment 3".to_string(),
            ],
            selected_index: 0,
            draggable: false,
            strip_height: 48.0,
            style: SegmentStyle::default(),
        }
    }
}

impl DemoConfig {
    /// Rehydrates a control from persisted state. The caller still owns
    /// placement, so the frame is assigned separately via `set_frame`.
    pub fn build_control(&self, measure: Box<dyn TextMeasure>) -> SegmentedControl {
        let mut control = SegmentedControl::with_titles(self.titles.clone(), measure);
        control.set_style(self.style.clone());
        control.set_draggable(self.draggable);
        control.select_at(self.selected_index, false, false, Instant::now());
        control
    }

    /// Where the demo keeps its config: `<config root>/tabline/config.ron`,
    /// with the root taken from `XDG_CONFIG_HOME` when set and falling back
    /// to `.config` under the home directory.
    pub fn path() -> Option<PathBuf> {
        let root = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
                Some(PathBuf::from(home).join(".config"))
            })?;
        Some(root.join("tabline").join("config.ron"))
    }

    /// Loads the config from the default location, or defaults when no
    /// usable file exists.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads from `path`; any read or parse failure yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => ron::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persists to the default location. A no-op when no home directory can
    /// be resolved.
    pub fn save(&self) {
        if let Some(path) = Self::path() {
            self.save_to(&path);
        }
    }

    /// Writes the config to `path`, creating parent directories as needed.
    /// Failures are silently dropped.
    pub fn save_to(&self, path: &Path) {
        let serialized = match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
        {
            Ok(text) => text,
            Err(_) => return,
        };
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        let _ = fs::write(path, serialized);
    }
}
