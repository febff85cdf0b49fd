//! Layout declarations. The host owns the placement math; these records only
//! select the strategies and their cosmetic parameters.

pub const BORDER_FOCUS: &str = "#FFFFFF";
pub const BORDER_NORMAL: &str = "#000000";

#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    /// Master pane on the left, stack on the right.
    MonadTall {
        border_focus: &'static str,
        border_normal: &'static str,
        border_width: u32,
        margin: u32,
        /// Fraction of the screen given to the master pane.
        ratio: f32,
        /// Step applied by grow/shrink commands.
        change_ratio: f32,
    },
    /// Full-width windows stacked top to bottom.
    VerticalTile {
        border_focus: &'static str,
        border_normal: &'static str,
        border_width: u32,
        margin: u32,
    },
    /// One window at a time, fullscreen within the group's area.
    Max,
}

impl Layout {
    /// Host name-normalization rule: the lower-cased strategy name. Hooks and
    /// the bar's CurrentLayout widget identify layouts by this string.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::MonadTall { .. } => "monadtall",
            Layout::VerticalTile { .. } => "verticaltile",
            Layout::Max => "max",
        }
    }
}

/// The ordered list the host cycles through with the next-layout binding.
pub fn layouts() -> Vec<Layout> {
    vec![
        Layout::MonadTall {
            border_focus: BORDER_FOCUS,
            border_normal: BORDER_NORMAL,
            border_width: 2,
            margin: 10,
            ratio: 0.6,
            change_ratio: 0.1,
        },
        Layout::VerticalTile {
            border_focus: BORDER_FOCUS,
            border_normal: BORDER_NORMAL,
            border_width: 2,
            margin: 10,
        },
        Layout::Max,
    ]
}
