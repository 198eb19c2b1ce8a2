//! Monitor enumeration and selection.
//!
//! Monitor geometry comes from `xrandr --query`; the pointer position comes
//! from `xdotool getmouselocation --shell`. Both run through the
//! [`CommandRunner`] seam.

use liftoff_common::error::{LiftoffError, LiftoffResult};
use serde::{Deserialize, Serialize};

use crate::proc::{CommandRunner, SystemRunner};

/// A connected monitor in the virtual desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Output name as reported by the display server (e.g. "DP-1").
    pub name: String,

    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,

    /// Position in the virtual desktop (pixels).
    pub x: i32,
    pub y: i32,

    /// Whether the display server designates this monitor as primary.
    pub primary: bool,
}

impl Monitor {
    /// Whether a virtual-desktop point lies on this monitor.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.width as i32
            && py >= self.y
            && py < self.y + self.height as i32
    }
}

/// Current pointer position in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayServer {
    Wayland,
    X11,
    #[default]
    Unknown,
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Enumerate connected monitors.
pub fn list_monitors() -> LiftoffResult<Vec<Monitor>> {
    list_monitors_with(&SystemRunner)
}

/// Enumerate connected monitors through the given runner.
pub fn list_monitors_with(runner: &dyn CommandRunner) -> LiftoffResult<Vec<Monitor>> {
    tracing::debug!("Enumerating monitors");
    let out = runner.run("xrandr", &["--query"])?;
    if !out.success {
        return Err(LiftoffError::display("xrandr --query exited with failure"));
    }
    Ok(parse_xrandr_query(&out.stdout))
}

/// Query the current pointer position through the given runner.
pub fn pointer_position_with(runner: &dyn CommandRunner) -> LiftoffResult<PointerPosition> {
    let out = runner.run("xdotool", &["getmouselocation", "--shell"])?;
    if !out.success {
        return Err(LiftoffError::display(
            "xdotool getmouselocation exited with failure",
        ));
    }
    parse_pointer_shell(&out.stdout)
}

/// Find the monitor containing a virtual-desktop point.
pub fn monitor_at_point(monitors: &[Monitor], x: i32, y: i32) -> Option<&Monitor> {
    monitors.iter().find(|m| m.contains(x, y))
}

/// Select the monitor a launcher window should appear on.
///
/// With `follow_pointer`, resolves the monitor under the mouse; any failure
/// on that path is logged and selection falls back to the primary monitor,
/// or the first enumerated one when none is designated primary. Returns
/// `None` only when no monitor can be enumerated at all.
pub fn select_monitor(follow_pointer: bool) -> Option<Monitor> {
    let follow = follow_pointer && {
        let server = detect_display_server();
        if server == DisplayServer::X11 {
            true
        } else {
            tracing::warn!(
                "Pointer lookup requires X11 (detected {server:?}). \
                 Defaulting to first or primary monitor"
            );
            false
        }
    };
    select_monitor_with(&SystemRunner, follow)
}

/// [`select_monitor`] through the given runner, without the session check.
pub fn select_monitor_with(runner: &dyn CommandRunner, follow_pointer: bool) -> Option<Monitor> {
    let monitors = match list_monitors_with(runner) {
        Ok(monitors) => monitors,
        Err(e) => {
            tracing::warn!("Monitor enumeration failed: {e}");
            return None;
        }
    };
    if monitors.is_empty() {
        tracing::warn!("Display server reported no connected monitors");
        return None;
    }

    if follow_pointer {
        match pointer_position_with(runner) {
            Ok(pointer) => match monitor_at_point(&monitors, pointer.x, pointer.y) {
                Some(m) => return Some(m.clone()),
                None => {
                    tracing::warn!(
                        "Pointer at ({}, {}) is outside every monitor. \
                         Defaulting to first or primary monitor",
                        pointer.x,
                        pointer.y
                    );
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Could not locate the pointer: {e}. Defaulting to first or primary monitor"
                );
            }
        }
    }

    monitors
        .iter()
        .find(|m| m.primary)
        .or_else(|| monitors.first())
        .cloned()
}

/// Parse `xrandr --query` output into monitors.
///
/// Connected outputs without an active mode (no geometry token) are skipped.
pub fn parse_xrandr_query(output: &str) -> Vec<Monitor> {
    let mut monitors = Vec::new();
    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (Some(&name), Some(&status)) = (tokens.first(), tokens.get(1)) else {
            continue;
        };
        if status != "connected" {
            continue;
        }
        let primary = tokens.get(2) == Some(&"primary");
        let Some((width, height, x, y)) = tokens.iter().find_map(|t| parse_geometry(t)) else {
            tracing::debug!("Output {name} is connected but has no active mode");
            continue;
        };
        monitors.push(Monitor {
            name: name.to_string(),
            width,
            height,
            x,
            y,
            primary,
        });
    }
    monitors
}

/// Parse an X geometry token (`WxH+X+Y`, offsets possibly negative).
fn parse_geometry(token: &str) -> Option<(u32, u32, i32, i32)> {
    let sign_at = token.find(['+', '-'])?;
    let (size, offsets) = token.split_at(sign_at);
    let (w, h) = size.split_once('x')?;
    let width: u32 = w.parse().ok()?;
    let height: u32 = h.parse().ok()?;
    let (x, y) = parse_offsets(offsets)?;
    Some((width, height, x, y))
}

/// Parse the `+X+Y` tail of a geometry token. xrandr renders negative
/// offsets both as `-N` and as `+-N` depending on version.
fn parse_offsets(offsets: &str) -> Option<(i32, i32)> {
    let mut parts: Vec<String> = Vec::new();
    for ch in offsets.chars() {
        match ch {
            '+' | '-' => match parts.last() {
                Some(p) if p.is_empty() || p == "-" => {
                    if ch == '-' {
                        *parts.last_mut()? = "-".to_string();
                    }
                }
                _ => parts.push(if ch == '-' {
                    "-".to_string()
                } else {
                    String::new()
                }),
            },
            d if d.is_ascii_digit() => parts.last_mut()?.push(d),
            _ => return None,
        }
    }
    if parts.len() != 2 {
        return None;
    }
    let x = parts[0].parse().ok()?;
    let y = parts[1].parse().ok()?;
    Some((x, y))
}

/// Parse `xdotool getmouselocation --shell` output (`X=..`/`Y=..` lines).
fn parse_pointer_shell(output: &str) -> LiftoffResult<PointerPosition> {
    let mut x = None;
    let mut y = None;
    for line in output.lines() {
        if let Some(v) = line.strip_prefix("X=") {
            x = v.trim().parse().ok();
        } else if let Some(v) = line.strip_prefix("Y=") {
            y = v.trim().parse().ok();
        }
    }
    match (x, y) {
        (Some(x), Some(y)) => Ok(PointerPosition { x, y }),
        _ => Err(LiftoffError::parse(format!(
            "missing X=/Y= in xdotool output: {output:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proc::ProcessOutput;
    use crate::testutil::ScriptedRunner;

    const XRANDR_DUAL: &str = "\
Screen 0: minimum 320 x 200, current 4480 x 1440, maximum 16384 x 16384
DP-1 connected primary 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440     59.95*+
HDMI-1 connected 1920x1080+0+360 (normal left inverted right x axis y axis) 509mm x 286mm
   1920x1080     60.00*+  50.00
DP-2 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn parses_connected_outputs_only() {
        let monitors = parse_xrandr_query(XRANDR_DUAL);
        assert_eq!(monitors.len(), 2);

        assert_eq!(monitors[0].name, "DP-1");
        assert!(monitors[0].primary);
        assert_eq!(
            (monitors[0].width, monitors[0].height, monitors[0].x, monitors[0].y),
            (2560, 1440, 1920, 0)
        );

        assert_eq!(monitors[1].name, "HDMI-1");
        assert!(!monitors[1].primary);
        assert_eq!(monitors[1].x, 0);
        assert_eq!(monitors[1].y, 360);
    }

    #[test]
    fn parses_negative_offsets() {
        let out = "HDMI-1 connected 1920x1080+-1920+0 (normal) 509mm x 286mm\n";
        let monitors = parse_xrandr_query(out);
        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].x, -1920);
        assert_eq!(monitors[0].y, 0);

        let out = "HDMI-1 connected 1920x1080-1920-360 (normal) 509mm x 286mm\n";
        let monitors = parse_xrandr_query(out);
        assert_eq!(monitors[0].x, -1920);
        assert_eq!(monitors[0].y, -360);
    }

    #[test]
    fn skips_connected_output_without_mode() {
        let out = "DP-3 connected (normal left inverted right x axis y axis)\n";
        assert!(parse_xrandr_query(out).is_empty());
    }

    #[test]
    fn pointer_shell_output_parses() {
        let pos = parse_pointer_shell("X=1594\nY=741\nSCREEN=0\nWINDOW=73400331\n").unwrap();
        assert_eq!(pos, PointerPosition { x: 1594, y: 741 });
    }

    #[test]
    fn pointer_shell_output_missing_axis_is_an_error() {
        assert!(parse_pointer_shell("X=1594\nSCREEN=0\n").is_err());
    }

    #[test]
    fn monitor_at_point_respects_bounds() {
        let monitors = parse_xrandr_query(XRANDR_DUAL);
        assert_eq!(monitor_at_point(&monitors, 2000, 100).unwrap().name, "DP-1");
        assert_eq!(monitor_at_point(&monitors, 5, 400).unwrap().name, "HDMI-1");
        // Right edge is exclusive.
        assert!(monitor_at_point(&monitors, 4480, 100).is_none());
    }

    #[test]
    fn follow_pointer_returns_containing_monitor() {
        let runner = ScriptedRunner::new(vec![
            Ok(ProcessOutput::ok(XRANDR_DUAL)),
            Ok(ProcessOutput::ok("X=100\nY=500\nSCREEN=0\nWINDOW=123\n")),
        ]);
        let selected = select_monitor_with(&runner, true).unwrap();
        assert_eq!(selected.name, "HDMI-1");
        assert!(selected.contains(100, 500));
    }

    #[test]
    fn pointer_failure_falls_back_to_primary() {
        let runner = ScriptedRunner::new(vec![
            Ok(ProcessOutput::ok(XRANDR_DUAL)),
            ScriptedRunner::not_found(),
        ]);
        let selected = select_monitor_with(&runner, true).unwrap();
        assert_eq!(selected.name, "DP-1");
    }

    #[test]
    fn pointer_outside_all_monitors_falls_back() {
        let runner = ScriptedRunner::new(vec![
            Ok(ProcessOutput::ok(XRANDR_DUAL)),
            Ok(ProcessOutput::ok("X=9999\nY=9999\n")),
        ]);
        let selected = select_monitor_with(&runner, true).unwrap();
        assert_eq!(selected.name, "DP-1");
    }

    #[test]
    fn no_primary_designation_selects_first() {
        let out = "HDMI-1 connected 1920x1080+0+0 (normal) 509mm x 286mm\n\
                   DP-1 connected 2560x1440+1920+0 (normal) 597mm x 336mm\n";
        let runner = ScriptedRunner::new(vec![Ok(ProcessOutput::ok(out))]);
        let selected = select_monitor_with(&runner, false).unwrap();
        assert_eq!(selected.name, "HDMI-1");
    }

    #[test]
    fn no_monitors_yields_none() {
        let runner = ScriptedRunner::new(vec![Ok(ProcessOutput::ok(""))]);
        assert!(select_monitor_with(&runner, false).is_none());
    }

    #[test]
    fn enumeration_failure_yields_none() {
        let runner = ScriptedRunner::new(vec![Ok(ProcessOutput::failed())]);
        assert!(select_monitor_with(&runner, true).is_none());
        // The pointer is never queried when enumeration fails.
        assert_eq!(runner.call_count(), 1);
    }
}
