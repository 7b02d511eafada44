use crate::{
    config::UpstreamConfig,
    error::FetchError,
    metrics,
    models::powerloom::{
        AggregateStats, DataProject, EpochId, LastFinalizedEpoch, TokenPair, TopPairsSnapshot,
    },
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Number of pairs shown by the "Top 3" action
pub const TOP_PAIRS_LIMIT: usize = 3;

/// Metrics label for the epoch resolution endpoint
const EPOCH_ENDPOINT: &str = "last_finalized_epoch";

/// Client for the Powerloom indexing API
///
/// Holds no per-request state: every operation resolves a fresh epoch and
/// issues its own requests.
#[derive(Clone)]
pub struct StatsFetcher {
    client: Client,
    base_url: String,
    source_key: String,
    timeout: Duration,
}

impl StatsFetcher {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            source_key: config.source_key.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Latest finalized epoch, read from the top pairs project
    pub async fn resolve_epoch_id(&self) -> Result<EpochId, FetchError> {
        let url = format!(
            "{}/api/last_finalized_epoch/{}",
            self.base_url,
            DataProject::TopPairs.project_id(&self.source_key)
        );

        let epoch: LastFinalizedEpoch = self.get_json(&url, EPOCH_ENDPOINT).await?;
        tracing::debug!(epoch_id = epoch.epoch_id, "Resolved last finalized epoch");

        Ok(epoch.epoch_id)
    }

    /// Resolve the current epoch, then fetch `project`'s snapshot for it
    pub async fn fetch_dataset<T: DeserializeOwned>(
        &self,
        project: DataProject,
    ) -> Result<T, FetchError> {
        let epoch_id = self.resolve_epoch_id().await?;
        self.fetch_dataset_at(epoch_id, project).await
    }

    /// Fetch `project`'s snapshot for a known epoch
    pub async fn fetch_dataset_at<T: DeserializeOwned>(
        &self,
        epoch_id: EpochId,
        project: DataProject,
    ) -> Result<T, FetchError> {
        let url = format!(
            "{}/api/data/{}/{}/",
            self.base_url,
            epoch_id,
            project.project_id(&self.source_key)
        );

        self.get_json(&url, project.as_str()).await
    }

    /// Top pairs by 24h volume, highest first, at most [`TOP_PAIRS_LIMIT`]
    pub async fn fetch_top_pairs(&self) -> Result<Vec<TokenPair>, FetchError> {
        let snapshot: TopPairsSnapshot = self.fetch_dataset(DataProject::TopPairs).await?;
        tracing::debug!(pairs = snapshot.pairs.len(), "Fetched top pairs snapshot");

        Ok(top_by_volume(snapshot.pairs, TOP_PAIRS_LIMIT))
    }

    pub async fn fetch_aggregate_stats(&self) -> Result<AggregateStats, FetchError> {
        self.fetch_dataset(DataProject::Stats).await
    }

    /// One-shot diagnostic: fetch the aggregate stats and log them.
    ///
    /// Never called implicitly; the `probe` CLI command is the only caller.
    pub async fn probe(&self) -> Result<AggregateStats, FetchError> {
        match self.fetch_aggregate_stats().await {
            Ok(stats) => {
                tracing::info!(
                    fee_24h = stats.fee_24h,
                    tvl = stats.tvl,
                    volume_24h = stats.volume_24h,
                    "24h stats for UniswapV2"
                );
                Ok(stats)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch 24h stats");
                Err(e)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T, FetchError> {
        let start = Instant::now();
        let result = self.send(url).await;
        metrics::record_upstream_duration(endpoint, start.elapsed());

        match result {
            Ok(body) => match serde_json::from_slice(&body) {
                Ok(value) => {
                    metrics::record_upstream_request(endpoint, "success");
                    Ok(value)
                }
                Err(e) => {
                    let err = FetchError::malformed(url, e);
                    metrics::record_upstream_request(endpoint, "failure");
                    metrics::record_upstream_error(endpoint, err.kind());
                    Err(err)
                }
            },
            Err(err) => {
                metrics::record_upstream_request(endpoint, "failure");
                metrics::record_upstream_error(endpoint, err.kind());
                Err(err)
            }
        }
    }

    async fn send(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Requesting upstream");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::UpstreamUnavailable {
                url: url.to_string(),
                status: Some(status.as_u16()),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        Ok(body.to_vec())
    }
}

/// Stable sort by 24h volume, descending, then keep the first `limit`.
///
/// Ties keep their upstream order. NaN ranks below every number.
pub fn top_by_volume(mut pairs: Vec<TokenPair>, limit: usize) -> Vec<TokenPair> {
    pairs.sort_by(|a, b| volume_rank(b).total_cmp(&volume_rank(a)));
    pairs.truncate(limit);
    pairs
}

fn volume_rank(pair: &TokenPair) -> f64 {
    if pair.volume_24h.is_nan() {
        f64::NEG_INFINITY
    } else {
        pair.volume_24h
    }
}
