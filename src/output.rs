//! # Terminal Output
//!
//! Status lines printed by the `pomgen` binary go through [`OutputConfig`],
//! which decides once per invocation whether decorations (emoji and color)
//! are wanted.
//!
//! Precedence, highest first:
//! - `--color always|never`
//! - `NO_COLOR` (any value, see <https://no-color.org/>)
//! - `CLICOLOR=0` disables, `CLICOLOR_FORCE` (non-zero) enables
//! - `TERM=dumb` disables
//! - otherwise stdout TTY detection via `console`
//!
//! ```rust,ignore
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} {}", emoji(&out, "📝", "[WRITE]"), highlight(&out, "pom.xml"));
//! ```

use std::env;

/// Whether decorated output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag value against the environment.
    ///
    /// Unrecognised flag values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn decorated() -> Self {
        Self { use_color: true }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// `emoji` when decorated, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji
    } else {
        plain
    }
}

/// Bold `text` when decorated.
pub fn highlight(config: &OutputConfig, text: &str) -> String {
    if config.use_color {
        console::style(text).bold().force_styling(true).to_string()
    } else {
        text.to_string()
    }
}
