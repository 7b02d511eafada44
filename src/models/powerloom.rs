use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a finalized snapshot produced by the indexing service
pub type EpochId = u64;

/// Data projects exposed by the Powerloom Uniswap V2 deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataProject {
    TopPairs,
    Stats,
}

impl DataProject {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataProject::TopPairs => "aggregate_24h_top_pairs_lite",
            DataProject::Stats => "aggregate_24h_stats_lite",
        }
    }

    /// Full project id as it appears in upstream paths
    pub fn project_id(&self, source_key: &str) -> String {
        format!("{}:{}", self.as_str(), source_key)
    }
}

impl fmt::Display for DataProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GET /api/last_finalized_epoch/{project_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFinalizedEpoch {
    #[serde(rename = "epochId")]
    pub epoch_id: EpochId,
}

/// A trading pair as reported by the top pairs project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(default)]
    pub address: String,
    pub name: String,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    #[serde(rename = "fee24h", default)]
    pub fee_24h: f64,
    #[serde(default)]
    pub liquidity: f64,
}

/// GET /api/data/{epoch}/aggregate_24h_top_pairs_lite:{key}/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPairsSnapshot {
    pub pairs: Vec<TokenPair>,
}

/// GET /api/data/{epoch}/aggregate_24h_stats_lite:{key}/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    #[serde(rename = "fee24h")]
    pub fee_24h: f64,
    pub tvl: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
}
