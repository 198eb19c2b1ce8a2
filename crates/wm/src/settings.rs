//! Desktop settings lookups.

use liftoff_common::error::{LiftoffError, LiftoffResult};

use crate::proc::{CommandRunner, SystemRunner};

/// GSettings schema holding desktop interface preferences.
pub const INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";

/// Key for the fractional font scaling factor.
pub const TEXT_SCALING_KEY: &str = "text-scaling-factor";

/// Read the desktop text scaling factor.
///
/// Text scaling allows fractional values, and applies uniformly to every
/// display. The stored value is returned as-is; a missing schema or tool
/// propagates as an error rather than being masked by a default.
pub fn text_scaling_factor() -> LiftoffResult<f64> {
    text_scaling_factor_with(&SystemRunner)
}

/// [`text_scaling_factor`] through the given runner.
pub fn text_scaling_factor_with(runner: &dyn CommandRunner) -> LiftoffResult<f64> {
    let out = runner.run("gsettings", &["get", INTERFACE_SCHEMA, TEXT_SCALING_KEY])?;
    if !out.success {
        return Err(LiftoffError::settings(format!(
            "gsettings get {INTERFACE_SCHEMA} {TEXT_SCALING_KEY} exited with failure"
        )));
    }
    let raw = out.stdout.trim();
    raw.parse::<f64>().map_err(|e| {
        LiftoffError::parse(format!("unexpected gsettings output {raw:?}: {e}"))
    })
}
