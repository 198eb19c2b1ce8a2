//! Show the monitor a launcher window should appear on.

pub fn run(follow_pointer: bool, json: bool) -> anyhow::Result<()> {
    tracing::debug!("Selecting monitor (follow_pointer: {follow_pointer})");
    let Some(monitor) = liftoff_wm::select_monitor(follow_pointer) else {
        anyhow::bail!("No monitor could be selected (is a display server running?)");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&monitor)?);
    } else {
        println!(
            "{} {}x{}+{}+{}{}",
            monitor.name,
            monitor.width,
            monitor.height,
            monitor.x,
            monitor.y,
            if monitor.primary { " (primary)" } else { "" }
        );
    }

    Ok(())
}
