//! Keybinding and mouse-binding declarations.
//!
//! A [`KeyBinding`] is an immutable record: a modifier set, an X11 keysym
//! name, a deferred [`Action`] into the window manager's command surface, and
//! a human-readable description. The host reads [`keys`] once at startup (and
//! again on reload) and grabs each binding via [`KeyBinding::grab_spec`].

use crate::groups;
use std::env;
use std::path::Path;
use x11rb::protocol::xproto::ModMask;

/// Primary modifier for most bindings (mod1 on a stock keymap).
pub const MOD: Mod = Mod::Alt;
/// Secondary modifier used for application launchers (mod4).
pub const MOD4: Mod = Mod::Super;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mod {
    Alt,
    Super,
    Shift,
    Control,
}

impl Mod {
    pub fn mask(self) -> ModMask {
        match self {
            Mod::Alt => ModMask::M1,
            Mod::Super => ModMask::M4,
            Mod::Shift => ModMask::SHIFT,
            Mod::Control => ModMask::CONTROL,
        }
    }
}

/// Commands dispatched to the active layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutCommand {
    FocusLeft,
    FocusRight,
    FocusDown,
    FocusUp,
    FocusNext,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    Grow,
    Shrink,
    Normalize,
    Maximize,
    Flip,
    ToggleSplit,
}

/// Commands dispatched to the focused window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowCommand {
    Kill,
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    BringToFront,
}

/// The deferred command surface a binding targets. Nothing runs when the
/// configuration is built; the host interprets these on key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Layout(LayoutCommand),
    Window(WindowCommand),
    Spawn(String),
    NextLayout,
    ReloadConfig,
    Shutdown,
    SwitchToGroup(String),
    MoveWindowToGroup { group: String, switch: bool },
    NextKeyboardLayout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyBinding {
    pub mods: Vec<Mod>,
    pub key: String,
    pub action: Action,
    pub desc: String,
}

impl KeyBinding {
    pub fn new(mods: &[Mod], key: &str, action: Action, desc: &str) -> Self {
        Self {
            mods: mods.to_vec(),
            key: key.to_string(),
            action,
            desc: desc.to_string(),
        }
    }

    /// Combined X11 modifier mask for this binding.
    pub fn modmask(&self) -> u16 {
        self.mods
            .iter()
            .fold(0u16, |mask, m| mask | u16::from(m.mask()))
    }

    /// The `(keysym, modmask)` pair the host passes to `grab_key`.
    pub fn grab_spec(&self) -> (u32, u16) {
        (keysym_from_name(&self.key), self.modmask())
    }
}

pub fn keysym_from_name(name: &str) -> u32 {
    match name {
        "Return" => 0xff0d,
        "space" => 0x0020,
        "BackSpace" => 0xff08,
        "Tab" => 0xff09,
        "Escape" => 0xff1b,
        "minus" => 0x002d,
        "backslash" => 0x005c,
        // Simple ascii mapping
        c if c.len() == 1 => {
            let ch = c.chars().next().unwrap();
            if ch.is_ascii_graphic() { u32::from(ch) } else { 0 }
        }
        _ => 0, // Unknown
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    /// X11 button number (`Button1`..`Button3`).
    pub fn number(self) -> u8 {
        match self {
            Button::Left => 1,
            Button::Middle => 2,
            Button::Right => 3,
        }
    }
}

/// Mouse bindings operate on floating windows only.
#[derive(Clone, Debug, PartialEq)]
pub enum MouseBinding {
    Drag {
        mods: Vec<Mod>,
        button: Button,
        action: Action,
        /// Queried once when the drag starts.
        start: Action,
    },
    Click {
        mods: Vec<Mod>,
        button: Button,
        action: Action,
    },
}

/// `$TERMINAL` if set, otherwise the first well-known emulator on `$PATH`.
pub fn guess_terminal() -> String {
    if let Ok(term) = env::var("TERMINAL") {
        if !term.is_empty() {
            return term;
        }
    }
    const CANDIDATES: &[&str] = &["alacritty", "kitty", "st", "urxvt", "xterm"];
    for candidate in CANDIDATES {
        if on_path(candidate) {
            return (*candidate).to_string();
        }
    }
    "xterm".to_string()
}

fn on_path(program: &str) -> bool {
    match env::var_os("PATH") {
        Some(paths) => env::split_paths(&paths).any(|dir| Path::new(&dir).join(program).is_file()),
        None => false,
    }
}

/// The full ordered binding list: base table, per-group pairs, MonadTall
/// extras. Later entries would shadow earlier ones in the host's grab table,
/// so the list must stay free of duplicate `(mods, key)` chords.
pub fn keys() -> Vec<KeyBinding> {
    let terminal = guess_terminal();
    let mut keys = base_keys(&terminal);
    keys.extend(groups::group_bindings(groups::GROUPS));
    keys.extend(monad_tall_keys());
    keys
}

fn base_keys(terminal: &str) -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(
            &[MOD],
            "h",
            Action::Layout(LayoutCommand::FocusLeft),
            "Move focus to left",
        ),
        KeyBinding::new(
            &[MOD],
            "l",
            Action::Layout(LayoutCommand::FocusRight),
            "Move focus to right",
        ),
        KeyBinding::new(
            &[MOD],
            "j",
            Action::Layout(LayoutCommand::FocusDown),
            "Move focus down",
        ),
        KeyBinding::new(
            &[MOD],
            "k",
            Action::Layout(LayoutCommand::FocusUp),
            "Move focus up",
        ),
        KeyBinding::new(
            &[MOD],
            "space",
            Action::Layout(LayoutCommand::FocusNext),
            "Move window focus to other window",
        ),
        // Move windows between left/right columns or up/down in the stack.
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "h",
            Action::Layout(LayoutCommand::ShuffleLeft),
            "Move window to the left",
        ),
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "l",
            Action::Layout(LayoutCommand::ShuffleRight),
            "Move window to the right",
        ),
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "j",
            Action::Layout(LayoutCommand::ShuffleDown),
            "Move window down",
        ),
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "k",
            Action::Layout(LayoutCommand::ShuffleUp),
            "Move window up",
        ),
        // Grow windows. A window on the screen edge shrinks instead.
        KeyBinding::new(
            &[MOD, Mod::Control],
            "h",
            Action::Layout(LayoutCommand::GrowLeft),
            "Grow window to the left",
        ),
        KeyBinding::new(
            &[MOD, Mod::Control],
            "l",
            Action::Layout(LayoutCommand::GrowRight),
            "Grow window to the right",
        ),
        KeyBinding::new(
            &[MOD, Mod::Control],
            "j",
            Action::Layout(LayoutCommand::GrowDown),
            "Grow window down",
        ),
        KeyBinding::new(
            &[MOD, Mod::Control],
            "k",
            Action::Layout(LayoutCommand::GrowUp),
            "Grow window up",
        ),
        KeyBinding::new(
            &[MOD],
            "n",
            Action::Layout(LayoutCommand::Normalize),
            "Reset all window sizes",
        ),
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "Return",
            Action::Layout(LayoutCommand::ToggleSplit),
            "Toggle between split and unsplit sides of stack",
        ),
        KeyBinding::new(
            &[MOD],
            "Return",
            Action::Spawn(terminal.to_string()),
            "Launch terminal",
        ),
        KeyBinding::new(&[MOD], "Tab", Action::NextLayout, "Toggle between layouts"),
        KeyBinding::new(
            &[MOD],
            "w",
            Action::Window(WindowCommand::Kill),
            "Kill focused window",
        ),
        KeyBinding::new(
            &[MOD, Mod::Control],
            "r",
            Action::ReloadConfig,
            "Reload the config",
        ),
        KeyBinding::new(
            &[MOD, Mod::Control],
            "q",
            Action::Shutdown,
            "Shut down the window manager",
        ),
        KeyBinding::new(
            &[MOD],
            "r",
            Action::Spawn("rofi -show run".to_string()),
            "Spawn a command using rofi",
        ),
        KeyBinding::new(
            &[MOD4],
            "space",
            Action::NextKeyboardLayout,
            "Change keyboard layout",
        ),
        KeyBinding::new(&[MOD4], "e", Action::Spawn("emacs".to_string()), "Run editor"),
        KeyBinding::new(
            &[MOD4],
            "b",
            Action::Spawn("firefox".to_string()),
            "Run browser",
        ),
        KeyBinding::new(
            &[MOD4],
            "m",
            Action::Spawn("firefox --new-window https://open.spotify.com".to_string()),
            "Run spotify in browser",
        ),
    ]
}

/// Resize bindings that only the MonadTall layout interprets. Normalize is
/// already bound in the base table.
fn monad_tall_keys() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new(
            &[MOD],
            "i",
            Action::Layout(LayoutCommand::Grow),
            "Grow the focused window",
        ),
        KeyBinding::new(
            &[MOD],
            "m",
            Action::Layout(LayoutCommand::Shrink),
            "Shrink the focused window",
        ),
        KeyBinding::new(
            &[MOD],
            "o",
            Action::Layout(LayoutCommand::Maximize),
            "Maximize the focused window",
        ),
        KeyBinding::new(
            &[MOD, Mod::Shift],
            "space",
            Action::Layout(LayoutCommand::Flip),
            "Flip master and stack sides",
        ),
    ]
}

/// Drag/click bindings for floating windows.
pub fn mouse_bindings() -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            mods: vec![MOD],
            button: Button::Left,
            action: Action::Window(WindowCommand::SetPositionFloating),
            start: Action::Window(WindowCommand::GetPosition),
        },
        MouseBinding::Drag {
            mods: vec![MOD],
            button: Button::Right,
            action: Action::Window(WindowCommand::SetSizeFloating),
            start: Action::Window(WindowCommand::GetSize),
        },
        MouseBinding::Click {
            mods: vec![MOD],
            button: Button::Middle,
            action: Action::Window(WindowCommand::BringToFront),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modmask_combines_modifiers() {
        let binding = KeyBinding::new(
            &[Mod::Alt, Mod::Shift],
            "h",
            Action::Layout(LayoutCommand::ShuffleLeft),
            "",
        );
        let expected = u16::from(ModMask::M1) | u16::from(ModMask::SHIFT);
        assert_eq!(binding.modmask(), expected);
    }

    #[test]
    fn grab_spec_resolves_named_keysyms() {
        let binding = KeyBinding::new(&[Mod::Alt], "Return", Action::NextLayout, "");
        assert_eq!(binding.grab_spec(), (0xff0d, u16::from(ModMask::M1)));
    }

    #[test]
    fn grab_spec_resolves_ascii_keys() {
        assert_eq!(keysym_from_name("h"), u32::from('h'));
        assert_eq!(keysym_from_name("1"), u32::from('1'));
        assert_eq!(keysym_from_name("NoSuchKey"), 0);
    }

    #[test]
    fn every_binding_has_a_resolvable_keysym() {
        for binding in keys() {
            let (sym, _) = binding.grab_spec();
            assert_ne!(sym, 0, "unresolvable keysym for {:?}", binding.key);
        }
    }

    #[test]
    fn mouse_bindings_cover_move_resize_raise() {
        let mouse = mouse_bindings();
        assert_eq!(mouse.len(), 3);
        let drags = mouse
            .iter()
            .filter(|m| matches!(m, MouseBinding::Drag { .. }))
            .count();
        assert_eq!(drags, 2);
    }

    #[test]
    fn button_numbers_match_x11() {
        assert_eq!(Button::Left.number(), 1);
        assert_eq!(Button::Middle.number(), 2);
        assert_eq!(Button::Right.number(), 3);
    }
}
