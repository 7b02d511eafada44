use serde::{Deserialize, Serialize};

/// Frame action POST body
///
/// Only `untrustedData.buttonIndex` is read; signature verification of
/// `trustedData.messageBytes` is left to the hosting client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameActionPayload {
    #[serde(rename = "untrustedData")]
    pub untrusted_data: UntrustedData,
    #[serde(rename = "trustedData", skip_serializing_if = "Option::is_none")]
    pub trusted_data: Option<TrustedData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UntrustedData {
    /// 1-based; out-of-range values are accepted and fall back to the welcome view
    #[serde(rename = "buttonIndex")]
    pub button_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustedData {
    #[serde(rename = "messageBytes")]
    pub message_bytes: String,
}

/// Query string of GET /api
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameQuery {
    pub action: Option<String>,
}

/// Query string of GET /api/image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageQuery {
    pub text: Option<String>,
}
