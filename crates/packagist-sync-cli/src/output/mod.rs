//! Terminal output.
//!
//! Progress and result messages go to stdout, errors to stderr. `--quiet`
//! silences everything except errors.

mod style;

pub use style::Theme;

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(true);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Configure output from the global flags.
pub fn init(no_ansi: bool, quiet: bool) {
    let colors = !no_ansi && console::colors_enabled();
    COLORS.store(colors, Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether colored output is enabled.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message.
pub fn success(message: &str) {
    if !quiet() {
        println!("{}", Theme::from_env().success(message));
    }
}

/// Print a progress message.
pub fn progress(message: &str) {
    if !quiet() {
        println!("{}", Theme::from_env().warning(message));
    }
}

/// Print an informational message.
pub fn info(message: &str) {
    if !quiet() {
        println!("{message}");
    }
}

/// Print an error message.
pub fn error(message: &str) {
    eprintln!("{}", Theme::from_env().error(message));
}
