//! Screen and status-bar composition.
//!
//! Widgets are declarative: this module supplies fonts, colors and format
//! strings, the host's widget library does the data collection and drawing.
//! The one exception is [`Widget::render`], which formats the clock's
//! strftime pattern so the host does not have to reimplement it.

use chrono::Local;

// Dracula-ish palette
pub const BACKGROUND: &str = "#282A36";
pub const BACKGROUND2: &str = "#383A59";
pub const FOREGROUND: &str = "#F4F4EF";
pub const PRIMARY: &str = "#BD93F9";
pub const ORANGE: &str = "#FF9C32";
pub const MAGENTA: &str = "#FF79C6";
pub const BLUE: &str = "#7CCCDF";

pub const BAR_FONT: &str = "Hack";
pub const BAR_BOLD_FONT: &str = "Hack Bold";
pub const BAR_FONT_SIZE: u16 = 17;
pub const BAR_HEIGHT: u16 = 30;

/// Cosmetic text parameters shared by most widgets. A `None` background
/// inherits the bar background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub fontsize: u16,
    pub foreground: &'static str,
    pub background: Option<&'static str>,
}

impl TextStyle {
    pub fn regular(foreground: &'static str) -> Self {
        Self {
            font: BAR_FONT,
            fontsize: BAR_FONT_SIZE,
            foreground,
            background: None,
        }
    }

    /// Bold font on a colored block, as used by the system read-outs.
    pub fn block(foreground: &'static str, background: &'static str) -> Self {
        Self {
            font: BAR_BOLD_FONT,
            fontsize: BAR_FONT_SIZE,
            foreground,
            background: Some(background),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Sep {
        foreground: &'static str,
        padding: u16,
        linewidth: u16,
        size_percent: u8,
    },
    CurrentLayout {
        style: TextStyle,
    },
    GroupBox {
        style: TextStyle,
        highlight_method: &'static str,
        padding: u16,
        borderwidth: u16,
        this_current_screen_border: &'static str,
    },
    Prompt {
        style: TextStyle,
    },
    WindowName {
        style: TextStyle,
    },
    CheckUpdates {
        style: TextStyle,
        distro: &'static str,
        no_update_string: &'static str,
    },
    TextBox {
        text: &'static str,
        style: TextStyle,
    },
    Memory {
        style: TextStyle,
        format: &'static str,
    },
    Cpu {
        style: TextStyle,
        format: &'static str,
    },
    KeyboardLayout {
        style: TextStyle,
        configured_keyboards: Vec<&'static str>,
    },
    Systray {
        style: TextStyle,
    },
    Clock {
        style: TextStyle,
        format: &'static str,
    },
}

impl Widget {
    /// Invisible spacer: a separator drawn in the bar background color.
    fn spacer(padding: u16) -> Self {
        Widget::Sep {
            foreground: BACKGROUND,
            padding,
            linewidth: 1,
            size_percent: 95,
        }
    }

    /// Full-height colored block used to frame the system read-outs.
    fn block_edge(foreground: &'static str) -> Self {
        Widget::Sep {
            foreground,
            padding: 0,
            linewidth: 10,
            size_percent: 100,
        }
    }

    /// Text for the widgets this crate can render itself: the clock's
    /// strftime pattern against the current local time, and static text
    /// boxes. Everything else is host-rendered and yields `None`.
    pub fn render(&self) -> Option<String> {
        match self {
            Widget::Clock { format, .. } => Some(Local::now().format(format).to_string()),
            Widget::TextBox { text, .. } => Some((*text).to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    pub height: u16,
    /// Outer margin, clockwise from the top edge.
    pub margin: [u16; 4],
    pub background: &'static str,
}

/// A physical display and the bars attached to its edges.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScreenConfig {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
}

/// Primary screen with the full top bar, secondary with a minimal bottom bar.
pub fn screens() -> Vec<ScreenConfig> {
    vec![
        ScreenConfig {
            top: Some(Bar {
                widgets: primary_bar_widgets(),
                height: BAR_HEIGHT,
                margin: [5, 10, 0, 10],
                background: BACKGROUND,
            }),
            bottom: None,
        },
        ScreenConfig {
            top: None,
            bottom: Some(Bar {
                widgets: secondary_bar_widgets(),
                height: BAR_HEIGHT,
                margin: [0, 10, 5, 10],
                background: BACKGROUND,
            }),
        },
    ]
}

fn primary_bar_widgets() -> Vec<Widget> {
    vec![
        Widget::spacer(10),
        Widget::CurrentLayout {
            style: TextStyle::regular(FOREGROUND),
        },
        Widget::spacer(10),
        Widget::GroupBox {
            style: TextStyle::regular(FOREGROUND),
            highlight_method: "line",
            padding: 15,
            borderwidth: 4,
            this_current_screen_border: PRIMARY,
        },
        Widget::Prompt {
            style: TextStyle::regular(FOREGROUND),
        },
        Widget::WindowName {
            style: TextStyle::regular(FOREGROUND),
        },
        Widget::block_edge(PRIMARY),
        Widget::CheckUpdates {
            style: TextStyle::block(BACKGROUND, PRIMARY),
            distro: "Arch",
            no_update_string: "Updates not found",
        },
        Widget::block_edge(PRIMARY),
        Widget::TextBox {
            text: "RAM:",
            style: TextStyle::block(BACKGROUND, ORANGE),
        },
        Widget::Memory {
            style: TextStyle::block(BACKGROUND, ORANGE),
            format: "{MemUsed: .0f}{mm} of{MemTotal: .0f}{mm}",
        },
        Widget::block_edge(ORANGE),
        Widget::block_edge(BLUE),
        Widget::TextBox {
            text: "CPU:",
            style: TextStyle::block(BACKGROUND, BLUE),
        },
        Widget::Cpu {
            style: TextStyle::block(BACKGROUND, BLUE),
            format: "{load_percent}%",
        },
        Widget::block_edge(BLUE),
        Widget::block_edge(MAGENTA),
        Widget::KeyboardLayout {
            style: TextStyle::block(BACKGROUND, MAGENTA),
            configured_keyboards: vec!["us", "ru"],
        },
        Widget::block_edge(MAGENTA),
        Widget::block_edge(BACKGROUND2),
        Widget::Systray {
            style: TextStyle::regular(FOREGROUND),
        },
        Widget::Clock {
            style: TextStyle::block(PRIMARY, BACKGROUND2),
            format: "%d.%m.%Y | %I:%M:%S",
        },
    ]
}

fn secondary_bar_widgets() -> Vec<Widget> {
    vec![
        Widget::spacer(10),
        Widget::CurrentLayout {
            style: TextStyle::regular(FOREGROUND),
        },
        Widget::GroupBox {
            style: TextStyle::regular(FOREGROUND),
            highlight_method: "line",
            padding: 15,
            borderwidth: 4,
            this_current_screen_border: PRIMARY,
        },
    ]
}
