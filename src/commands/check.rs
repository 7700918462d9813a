//! Check command - Environment validation.
//!
//! Configuration is loaded (and therefore validated) before dispatch, so
//! reaching this point means every required variable is present. The command
//! exists so deploy scripts can verify an environment without starting the
//! server.

use crate::config::Config;
use crate::errors::AppResult;

/// Execute the check command
pub fn execute(config: Config) -> AppResult<()> {
    tracing::info!(
        environment = %config.environment,
        upload_dir = %config.upload_dir,
        max_upload_bytes = config.max_upload_bytes,
        "All required environment variables are set"
    );
    Ok(())
}
