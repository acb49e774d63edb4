//! Process lifecycle subsystem.
//!
//! Startup wiring lives in `main.rs`; this module owns the shutdown
//! broadcast used to stop the server cleanly from Ctrl-C or tests.

pub mod shutdown;

pub use shutdown::Shutdown;
