//! 基于 HTTP 的资源池数据源
//!
//! 实现 swarm-sidebar-core 的 PoolSource trait：`GET {api_base_url}/pools`

use std::time::Duration;

use async_trait::async_trait;
use swarm_sidebar_core::types::Pool;
use swarm_sidebar_core::{CoreError, CoreResult, PoolSource};

/// HTTP 资源池数据源
pub struct HttpPoolSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPoolSource {
    pub fn new(api_base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: pools_endpoint(api_base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// 拼接资源池列表地址
fn pools_endpoint(api_base_url: &str) -> String {
    format!("{}/pools", api_base_url.trim_end_matches('/'))
}

#[async_trait]
impl PoolSource for HttpPoolSource {
    async fn get_pools(&self) -> CoreResult<Vec<Pool>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::PoolSource(format!(
                "{} returned HTTP {status}",
                self.endpoint
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(pools_endpoint("http://h/api/"), "http://h/api/pools");
        assert_eq!(pools_endpoint("http://h/api"), "http://h/api/pools");
    }

    #[test]
    fn unreachable_backend_is_a_network_error() {
        let source = HttpPoolSource::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let err = tokio_test::block_on(source.get_pools()).unwrap_err();
        assert!(matches!(err, CoreError::NetworkError(_)));
        assert!(err.is_expected());
    }
}
