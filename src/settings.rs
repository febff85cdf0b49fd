//! Scalar behavior flags, with optional user overrides from
//! `~/.config/tilecfg/tilecfg.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusOnActivation {
    /// Focus only when the window is on the visible group.
    Smart,
    Focus,
    Never,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Respect clients that minimize themselves on focus loss (steam games).
    pub auto_minimize: bool,
    /// Advertised WM name. "LG3D" keeps java toolkits happy.
    pub wmname: String,
    /// Hook name for deriving group bindings dynamically. Unset: the static
    /// pairs derived from the group table are the only ones.
    pub dgroups_key_binder: Option<String>,
    /// Placement rules for dynamically created groups. Empty: none apply.
    pub dgroups_app_rules: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: false,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".to_string(),
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let path = dirs::config_dir()
            .map(|p| p.join("tilecfg").join("tilecfg.toml"))
            .unwrap_or_else(|| PathBuf::from("tilecfg.toml"));
        Self::load_from(&path)
    }

    /// Defaults overridden by the file at `path`, if it exists. A file that
    /// fails to parse is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Settings not found at {:?}, using defaults", path);
            return Self::default();
        }
        let content = fs::read_to_string(path).unwrap_or_default();
        match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                log::error!("Failed to parse settings: {}", e);
                Self::default()
            }
        }
    }
}
