pub mod check;
pub mod monitor;
pub mod monitors;
pub mod raise;
pub mod scale;
