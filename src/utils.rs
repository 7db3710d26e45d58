use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

static WARNED_MESSAGES: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Emits a warning to stderr at most once per process.
pub fn warn_once(message: impl Into<String>) {
    let message = message.into();
    let cache = WARNED_MESSAGES.get_or_init(|| Mutex::new(HashSet::new()));

    if let Ok(mut warned) = cache.lock()
        && warned.insert(message.clone())
    {
        eprintln!("{message}");
    }
}

/// Formats a whole-minute play time for display, with an hour breakdown for
/// longer sessions.
pub fn format_play_time(minutes: u64) -> String {
    if minutes < 60 {
        format!("{minutes} minutes")
    } else {
        format!("{} minutes ({}h {}m)", minutes, minutes / 60, minutes % 60)
    }
}
