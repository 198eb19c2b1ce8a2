//! Print the desktop text scaling factor.

pub fn run() -> anyhow::Result<()> {
    let factor = liftoff_wm::text_scaling_factor()
        .map_err(|e| anyhow::anyhow!("Failed to read text scaling factor: {e}"))?;
    println!("{factor}");
    Ok(())
}
