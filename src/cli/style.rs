//! Terminal styling helpers
//!
//! Semantic styling via the [`Stylize`] trait, with color support detection
//! delegated to `owo-colors` (respects `NO_COLOR`, `CLICOLOR`, TTY checks).

use std::fmt::{self, Display};

use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
///
/// Implemented for all [`Display`] types; methods take `&self` so borrowed
/// data can be styled in place.
pub trait Stylize: Display {
    /// Cyan, for primary information (counts, repository names)
    fn accent(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: ACCENT,
            stream: Stream::Stdout,
        }
    }

    /// Bold, for headers and key information
    fn emphasis(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: EMPHASIS,
            stream: Stream::Stdout,
        }
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green checkmark for success states.
pub const fn check() -> Styled<&'static str> {
    Styled {
        value: "✓",
        style: SUCCESS,
        stream: Stream::Stdout,
    }
}

use indicatif::ProgressStyle;
use std::sync::OnceLock;

/// Spinner style for the fetch phase - cyan dots.
///
/// Template validated once on first call via `OnceLock`.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
