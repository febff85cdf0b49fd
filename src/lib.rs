//! Declarative configuration for a dynamic tiling X11 window manager.
//!
//! The host process reads the fields of [`Config`] by name at startup and on
//! reload: keybindings, groups, layouts, screens with their bars, mouse
//! bindings, floating rules and scalar behavior flags. Nothing here runs a
//! window manager; the two functions in [`hooks`] are the only executable
//! behavior, and the host calls both.

pub mod bar;
pub mod check;
pub mod floating;
pub mod groups;
pub mod hooks;
pub mod keys;
pub mod layout;
pub mod settings;

use crate::bar::ScreenConfig;
use crate::floating::Match;
use crate::keys::{KeyBinding, MouseBinding};
use crate::layout::Layout;
use crate::settings::Settings;

/// Everything the host reads out of this crate.
#[derive(Clone, Debug)]
pub struct Config {
    pub keys: Vec<KeyBinding>,
    pub groups: Vec<&'static str>,
    pub layouts: Vec<Layout>,
    pub screens: Vec<ScreenConfig>,
    pub mouse: Vec<MouseBinding>,
    pub floating: Vec<Match>,
    pub settings: Settings,
}

impl Config {
    /// The shipped configuration with default settings.
    pub fn build() -> Self {
        Self {
            keys: keys::keys(),
            groups: groups::groups(),
            layouts: layout::layouts(),
            screens: bar::screens(),
            mouse: keys::mouse_bindings(),
            floating: floating::float_rules(),
            settings: Settings::default(),
        }
    }

    /// Like [`Config::build`], with scalar flags overridden from the user's
    /// settings file.
    pub fn load() -> Self {
        Self {
            settings: Settings::load(),
            ..Self::build()
        }
    }
}
