//! The two event-hook bodies the host calls into: the one-shot session
//! autostart and the bar toggle on layout change.

use crate::layout::Layout;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Layout name that hides the top bar while active.
pub const HIDDEN_BAR_LAYOUT: &str = "max";

/// Host-owned handle to the bars of the screen a group is shown on.
pub trait BarControl {
    fn show_top(&mut self, visible: bool);
}

/// `~/.config/tilecfg/autostart.sh`.
pub fn autostart_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tilecfg").join("autostart.sh"))
}

/// Launch the script as a detached child: no arguments, output inherited,
/// never waited on. Spawn errors propagate to the host's hook dispatcher.
pub fn run_autostart(script: &Path) -> io::Result<()> {
    Command::new(script).spawn()?;
    Ok(())
}

/// Runs once per session, at startup. Not invoked on config reload.
pub fn startup_once() -> io::Result<()> {
    let script = autostart_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no user configuration directory")
    })?;
    run_autostart(&script)
}

/// Runs on every layout activation, including the initial one. Max wants the
/// whole screen, so its activation hides the top bar.
pub fn on_layout_change(layout: &Layout, screen: &mut dyn BarControl) {
    screen.show_top(layout.name() != HIDDEN_BAR_LAYOUT);
}
