pub mod config_cmd;
pub mod launch;
pub mod scan;

pub use config_cmd::execute_config;
pub use launch::execute_launch;
pub use scan::execute_scan;
