#![allow(dead_code)]

use powerloom_frame::{config::Config, handlers::AppState, providers::StatsFetcher};
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const SOURCE_KEY: &str = "testkey:UNISWAPV2";

pub fn test_config(upstream: &MockServer) -> Config {
    let mut config = Config::default();
    config.upstream.base_url = upstream.uri();
    config.upstream.source_key = SOURCE_KEY.to_string();
    config.upstream.timeout_seconds = 5;
    config.frame.public_url = "https://frame.example/api".to_string();
    config
}

pub fn fetcher(upstream: &MockServer) -> StatsFetcher {
    StatsFetcher::new(reqwest::Client::new(), &test_config(upstream).upstream)
}

pub fn app_state(upstream: &MockServer) -> AppState {
    AppState::new(test_config(upstream), reqwest::Client::new())
}

pub fn epoch_path() -> String {
    format!("/api/last_finalized_epoch/aggregate_24h_top_pairs_lite:{}", SOURCE_KEY)
}

pub fn top_pairs_path(epoch_id: u64) -> String {
    format!("/api/data/{}/aggregate_24h_top_pairs_lite:{}/", epoch_id, SOURCE_KEY)
}

pub fn stats_path(epoch_id: u64) -> String {
    format!("/api/data/{}/aggregate_24h_stats_lite:{}/", epoch_id, SOURCE_KEY)
}

/// Mount a JSON GET response, expecting exactly `hits` calls
pub async fn mount_json(server: &MockServer, at: String, status: u16, body: Value, hits: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(hits)
        .mount(server)
        .await;
}

/// Mount a raw-body GET response, expecting exactly `hits` calls
pub async fn mount_raw(server: &MockServer, at: String, body: &str, hits: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .expect(hits)
        .mount(server)
        .await;
}
