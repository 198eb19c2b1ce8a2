//! Host capability detection and guidance.
//!
//! Liftoff shells out to a handful of desktop tools; this module reports
//! which of them are actually present so a launcher can degrade gracefully.

use crate::display::{detect_display_server, DisplayServer};

/// A host capability that Liftoff may need.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![
        check_display_session(),
        check_tool(
            "xrandr",
            "Monitor enumeration",
            true,
            "Install xrandr (usually part of x11-xserver-utils)",
        ),
        check_tool(
            "xdotool",
            "Pointer position lookup for follow-pointer monitor selection",
            false,
            "Install xdotool: sudo apt install xdotool",
        ),
        check_tool(
            "gsettings",
            "Text scaling factor lookup (GNOME interface settings)",
            false,
            "Install glib2 tools: sudo apt install libglib2.0-bin",
        ),
        check_tool(
            "kdotool",
            "Window search and activation for raising running apps",
            false,
            "Install kdotool: https://github.com/jinliu/kdotool",
        ),
    ]
}

/// Check that a graphical session is present at all.
fn check_display_session() -> Capability {
    let server = detect_display_server();
    let available = server != DisplayServer::Unknown;

    Capability {
        name: "Display Session".to_string(),
        description: format!("Graphical session (detected: {server:?})"),
        available,
        required: true,
        fix_instructions: if available {
            None
        } else {
            Some("Run inside a graphical desktop session (X11 or Wayland)".to_string())
        },
    }
}

fn check_tool(bin: &str, description: &str, required: bool, fix: &str) -> Capability {
    let available = is_on_path(bin);

    Capability {
        name: bin.to_string(),
        description: description.to_string(),
        available,
        required,
        fix_instructions: if available {
            None
        } else {
            Some(fix.to_string())
        },
    }
}

/// Whether an executable with this name exists on PATH.
fn is_on_path(bin: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| {
        let candidate = dir.join(bin);
        candidate
            .metadata()
            .map(|m| m.is_file())
            .unwrap_or(false)
    })
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("Liftoff Host Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}
