pub mod config;
pub mod donor_registry;
pub mod logging;
