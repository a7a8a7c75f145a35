//! Terminal palettes and spacing driven by the dark-mode and compact-view flags.

/// ANSI sequences used by the renderer. All empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub link: &'static str,
    pub muted: &'static str,
    pub danger: &'static str,
    pub accent: &'static str,
    pub reset: &'static str,
}

/// Bright text for dark terminals.
const DARK: Palette = Palette {
    heading: "\x1b[1;97m",
    link: "\x1b[94m",
    muted: "\x1b[37m",
    danger: "\x1b[91m",
    accent: "\x1b[92m",
    reset: "\x1b[0m",
};

/// Deep colors for light terminals.
const LIGHT: Palette = Palette {
    heading: "\x1b[1;30m",
    link: "\x1b[34m",
    muted: "\x1b[90m",
    danger: "\x1b[31m",
    accent: "\x1b[32m",
    reset: "\x1b[0m",
};

const PLAIN: Palette = Palette {
    heading: "",
    link: "",
    muted: "",
    danger: "",
    accent: "",
    reset: "",
};

impl Palette {
    pub fn for_mode(dark_mode: bool, color: bool) -> Self {
        match (color, dark_mode) {
            (false, _) => PLAIN,
            (true, true) => DARK,
            (true, false) => LIGHT,
        }
    }

    /// Wraps `text` in `style` and a reset.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", style, text, self.reset)
        }
    }
}

/// Vertical rhythm and indentation of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Blank lines between panels.
    pub between_sections: usize,
    /// Prefix of list entries.
    pub indent: &'static str,
}

impl Spacing {
    pub fn for_view(compact_view: bool) -> Self {
        if compact_view {
            Self {
                between_sections: 0,
                indent: " ",
            }
        } else {
            Self {
                between_sections: 1,
                indent: "  ",
            }
        }
    }
}

/// Icon of the dark-mode toggle: a sun while dark (switch to light), a moon otherwise.
pub fn dark_mode_icon(dark_mode: bool) -> &'static str {
    if dark_mode {
        "☀"
    } else {
        "☾"
    }
}

/// Icon of the density toggle: expand while compact, compress otherwise.
pub fn compact_view_icon(compact_view: bool) -> &'static str {
    if compact_view {
        "⤢"
    } else {
        "⤡"
    }
}
