//! Liftoff Window-Management Helpers
//!
//! Desktop-environment glue for launcher-style applications on Linux:
//! - **Monitor selection:** which display a launcher window should appear on
//! - **Text scaling:** the GNOME `text-scaling-factor` setting
//! - **Window raising:** bring a running application to the front via `kdotool`
//! - **Capabilities:** report which host tools are available
//!
//! Everything that touches the host goes through the [`proc::CommandRunner`]
//! seam, so the logic is testable without a display server.

pub mod capability;
pub mod display;
pub mod proc;
pub mod raise;
pub mod settings;

pub use display::*;
pub use proc::{CommandRunner, ProcessOutput, SystemRunner};
pub use raise::{try_raise_app, try_raise_app_with};
pub use settings::{text_scaling_factor, text_scaling_factor_with};

#[cfg(test)]
pub(crate) mod testutil;
