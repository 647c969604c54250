use std::path::Path;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::http;

/// Run the HTTP validation service. Flags override the config file.
pub async fn run(config_path: &Path, port: Option<u16>) -> Result<()> {
    let mut config = ServiceConfig::load_from(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    http::server::serve(config).await
}
