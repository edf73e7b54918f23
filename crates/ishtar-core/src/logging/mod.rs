//! Logging utilities.
//!
//! The library logs through the `log` facade only (style-table warnings,
//! font-load diagnostics). Hosts that want output without wiring their own
//! backend can call [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
