// Module declarations for the library crate.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod format;
pub mod input;
pub mod pool;
pub mod telemetry;

// Re-export the formatting entry points for convenience.
pub use buffer::FixedStr;
pub use format::duration::MicroUnit;
pub use format::float::{FloatFormatter, StdFloatFormatter};
pub use format::{format_duration, format_size, Printer};
pub use pool::{Family, Ticket, POOL_SLOTS};
