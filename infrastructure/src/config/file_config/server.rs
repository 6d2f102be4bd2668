//! HTTP server, fact-check and logging settings from TOML
//! (`[server]`, `[fact_check]` and `[logging]` sections)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

impl FileServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ConfigValidationError::InvalidServerAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFactCheckConfig {
    /// Claims fact-checked at the same time
    pub claim_concurrency: usize,
}

impl Default for FileFactCheckConfig {
    fn default() -> Self {
        Self {
            claim_concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily rolling log files (console only when unset)
    pub dir: Option<PathBuf>,
}
