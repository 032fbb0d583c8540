//! Admin Auth Config

use clap::Args;

/// Admin authentication settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Bearer token required by the product write endpoints
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: String,
}
