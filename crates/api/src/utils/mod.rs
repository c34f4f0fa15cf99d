pub mod logging;

pub use logging::{error_label, log_command_execution};
