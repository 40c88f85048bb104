use tracing::{error, info};

use crate::adapters;

/// Forwards log lines to the process-wide `tracing` subscriber.
pub struct TracingLogger {}

impl adapters::Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(context = "mirror", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(context = "mirror", error_message = message, error_group = "mirror");
    }
}
