//! Where the delegation file comes from.
//!
//! Either one plain GET against the registry or a copy already on disk.

use crate::error::RouteError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegationSource {
    Url(String),
    File(PathBuf),
}

impl DelegationSource {
    /// Read the whole delegation file into memory.
    pub async fn load(&self) -> Result<Vec<u8>, RouteError> {
        match self {
            DelegationSource::Url(url) => fetch_delegations(url).await,
            DelegationSource::File(path) => {
                log::info!("Reading delegation file: {}", path.display());
                std::fs::read(path).map_err(|source| RouteError::Input {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// GET the delegation file. Any transport failure or non-2xx answer is fatal.
pub async fn fetch_delegations(url: &str) -> Result<Vec<u8>, RouteError> {
    log::info!("Fetching data from {url}, it might take a few minutes, please wait...");

    let transport = |source: reqwest::Error| RouteError::Transport {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url).await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        log::error!("GET {url} returned {status}");
        return Err(RouteError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(transport)?;
    log::info!("Received {} bytes from {url}", body.len());
    Ok(body.to_vec())
}
