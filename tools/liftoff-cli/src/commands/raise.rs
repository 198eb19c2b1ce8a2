//! Raise a running application window by its window class.

use liftoff_wm::{try_raise_app_with, SystemRunner};

pub fn run(kdotool_bin: &str, class: &str) -> anyhow::Result<()> {
    tracing::debug!("Raising {class} via {kdotool_bin}");
    if try_raise_app_with(&SystemRunner, kdotool_bin, class) {
        println!("Raised {class}");
        Ok(())
    } else {
        anyhow::bail!("Could not raise {class} (no matching window, or kdotool failed)");
    }
}
