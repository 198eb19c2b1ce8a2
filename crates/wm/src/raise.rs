//! Raise a running application's window by its window class.
//!
//! Backed by the external `kdotool` helper. Two sequential blocking steps:
//! find at most one window handle for the class, then activate it.

use crate::proc::{CommandRunner, SystemRunner};

/// Default window helper binary.
pub const DEFAULT_KDOTOOL_BIN: &str = "kdotool";

/// Try to raise an app by its window class and return whether it worked.
pub fn try_raise_app(app_id: &str) -> bool {
    try_raise_app_with(&SystemRunner, DEFAULT_KDOTOOL_BIN, app_id)
}

/// [`try_raise_app`] through the given runner and helper binary.
///
/// `false` covers three distinct cases: the helper failed to run or exited
/// non-zero (logged at error level), and the helper ran fine but found no
/// matching window (not an error, left quiet).
pub fn try_raise_app_with(runner: &dyn CommandRunner, kdotool: &str, app_id: &str) -> bool {
    tracing::info!("Trying to raise {app_id}");

    let search = match runner.run(kdotool, &["search", "--limit", "1", "--class", app_id]) {
        Ok(out) => out,
        Err(e) => {
            tracing::error!("Failed to run {kdotool} search: {e}");
            return false;
        }
    };
    if !search.success {
        tracing::error!("{kdotool} search --class {app_id} exited with failure");
        return false;
    }

    // A zero exit with empty output means no window matched.
    let handle = search.stdout.trim();
    if handle.is_empty() {
        tracing::debug!("No window with class {app_id}");
        return false;
    }

    match runner.run(kdotool, &["windowactivate", handle]) {
        Ok(out) if out.success => true,
        Ok(_) => {
            tracing::error!("{kdotool} windowactivate {handle} exited with failure");
            false
        }
        Err(e) => {
            tracing::error!("Failed to run {kdotool} windowactivate: {e}");
            false
        }
    }
}
