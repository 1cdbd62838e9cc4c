//! System Inventory Report Visualiser
//!

pub mod charts;
pub mod cli;
pub mod errors;
pub mod loader;
pub mod summary;
pub mod types;
