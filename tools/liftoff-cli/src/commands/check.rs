//! Check host tools and display server.

use liftoff_wm::{detect_display_server, DisplayServer};

pub fn run() -> anyhow::Result<()> {
    println!("Liftoff Host Check");
    println!("{}", "=".repeat(50));

    // Display server
    let ds = detect_display_server();
    match ds {
        DisplayServer::Wayland => println!("[OK] Display server: Wayland"),
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        _ => println!("[WARN] Display server: Unknown"),
    }

    // Monitors, if we can enumerate them
    match liftoff_wm::list_monitors() {
        Ok(monitors) => {
            println!("[OK] Monitors detected: {}", monitors.len());
            for m in &monitors {
                println!(
                    "     {} {}x{}+{}+{} {}",
                    m.name,
                    m.width,
                    m.height,
                    m.x,
                    m.y,
                    if m.primary { "(primary)" } else { "" }
                );
            }
        }
        Err(e) => println!("[WARN] Monitor enumeration failed: {e}"),
    }

    // External tools
    let capabilities = liftoff_wm::capability::check_capabilities();
    println!();
    liftoff_wm::capability::print_capability_report(&capabilities);

    let all_required_ok = capabilities
        .iter()
        .filter(|c| c.required)
        .all(|c| c.available);

    println!();
    if all_required_ok {
        println!("All required capabilities are available. Liftoff is ready.");
    } else {
        println!("Some required capabilities are missing. See above for fixes.");
    }

    Ok(())
}
