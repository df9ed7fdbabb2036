/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// stdout carries the presentation contract, so diagnostics never go there.
///
/// Usage:
/// ```ignore
/// log_status!("catalog", "Scanning {}", root.display());
/// log_status!("intent", "Classified '{}' as {}", input, intent);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;

// Re-export everything from core for ergonomic library use
// Users can write `cmdguide::catalog` instead of `cmdguide::core::catalog`
pub use core::*;
