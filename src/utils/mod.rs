//! Process-level helpers shared by the binary.

pub mod signals;

pub use signals::shutdown_signal;
