// Resource fetching - sequential loader for template content
//
// Templates are plain text files served by whatever hosts them (any
// static file server works). Each fetch either succeeds with the body
// text or fails with a displayable error; a failure never stops the
// remaining resources from loading.
//
// Loads are deliberately awaited one at a time, in catalog order. This
// trades total load time for deterministic fill-in order and trivial
// error isolation - template sets are small and the path is not
// performance critical. No timeout is applied: a hung server stalls the
// remaining cards but never crashes the app.

use crate::catalog::ResourceDescriptor;
use crate::events::LoadResult;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// HTTP fetcher bound to the configured base URL
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a resource identifier (a relative path)
    pub fn resource_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.base_url, identifier.trim_start_matches('/'))
    }

    /// Fetch one resource as text.
    ///
    /// A non-success status is an error like a transport failure; both
    /// surface the URL so the card's inline message names the resource.
    pub async fn fetch_text(&self, identifier: &str) -> Result<String> {
        let url = self.resource_url(identifier);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {status} fetching {url}");
        }

        response
            .text()
            .await
            .with_context(|| format!("reading body from {url}"))
    }
}

/// Load every catalog entry in order, one fetch outstanding at a time.
///
/// Each completion is sent to the TUI as it happens so cards fill in
/// progressively. Stops early only when the receiver is gone (the TUI
/// has shut down).
pub async fn run_loader(
    fetcher: Fetcher,
    catalog: Vec<ResourceDescriptor>,
    tx: mpsc::Sender<LoadResult>,
) {
    for (index, descriptor) in catalog.iter().enumerate() {
        let outcome = match fetcher.fetch_text(&descriptor.identifier).await {
            Ok(text) => {
                tracing::debug!(
                    "Loaded {:?} ({} bytes)",
                    descriptor.identifier,
                    text.len()
                );
                Ok(text)
            }
            Err(e) => {
                tracing::warn!("Failed to load {:?}: {:#}", descriptor.identifier, e);
                Err(format!("{e:#}"))
            }
        };

        if tx.send(LoadResult { index, outcome }).await.is_err() {
            tracing::debug!("Loader stopping: receiver closed");
            return;
        }
    }

    tracing::info!("All {} resources processed", catalog.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_joins_base_and_identifier() {
        let fetcher = Fetcher::new("http://127.0.0.1:8000");
        assert_eq!(
            fetcher.resource_url("prompts/a.txt"),
            "http://127.0.0.1:8000/prompts/a.txt"
        );
    }

    #[test]
    fn resource_url_normalizes_slashes() {
        let fetcher = Fetcher::new("http://host/base/");
        assert_eq!(fetcher.resource_url("/a.txt"), "http://host/base/a.txt");
    }
}
