//! Converter warnings with colored terminal output.
//!
//! Warnings report input that is accepted but dropped, such as loose text
//! that no tag owns. Each distinct message is printed once per process (or
//! until [`clear_warnings`] is called) so a large document cannot flood stderr.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // The set only ever grows or is cleared, so a poisoned guard is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about dropped or ignored input (prints once per unique message)
///
/// # Example
/// ```
/// tagtree_common::warning::warn_once("HTML", "text \"hi\" before <p> is not attached to any tag");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print && !QUIET.load(Ordering::Relaxed) {
        eprintln!(
            "{}",
            format!("[tagtree {component}] warning: {message}").yellow()
        );
    }
}

/// Returns true if `warn_once` has already seen this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Silence (or re-enable) printing. Warnings are still deduplicated and recorded.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Clear all recorded warnings (call before converting another document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
