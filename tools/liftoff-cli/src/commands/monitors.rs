//! List all connected monitors.

pub fn run(json: bool) -> anyhow::Result<()> {
    let monitors = liftoff_wm::list_monitors()
        .map_err(|e| anyhow::anyhow!("Failed to enumerate monitors: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&monitors)?);
        return Ok(());
    }

    if monitors.is_empty() {
        println!("No connected monitors reported.");
        return Ok(());
    }

    for m in &monitors {
        println!(
            "{} {}x{}+{}+{}{}",
            m.name,
            m.width,
            m.height,
            m.x,
            m.y,
            if m.primary { " (primary)" } else { "" }
        );
    }

    Ok(())
}
