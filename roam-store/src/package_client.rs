use async_trait::async_trait;
use roam_core::{FetchError, FetchResult, PackageId, PackageSource};
use roam_shared::PackageDocument;
use std::time::Duration;
use url::Url;

use crate::app_config::{BackendConfig, ID_PLACEHOLDER};

/// Fetches package documents from the itinerary service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPackageSource {
    http: reqwest::Client,
    base_url: Url,
    package_path: String,
}

impl HttpPackageSource {
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            package_path: config.package_path.clone(),
        })
    }

    /// Full request URL for `id`.
    ///
    /// `{id}` may appear anywhere in a path segment or query value. Path
    /// occurrences are percent-encoded as part of their segment, query
    /// occurrences as form values.
    pub fn package_url(&self, id: &PackageId) -> Url {
        let (path, query) = match self.package_path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.package_path.as_str(), None),
        };

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(&fill(segment, id));
            }
        }

        if let Some(query) = query {
            let mut pairs = url.query_pairs_mut();
            for pair in query.split('&').filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                pairs.append_pair(&fill(key, id), &fill(value, id));
            }
        }
        url
    }
}

fn fill(template: &str, id: &PackageId) -> String {
    template.replace(ID_PLACEHOLDER, id.as_str())
}

#[async_trait]
impl PackageSource for HttpPackageSource {
    async fn fetch_package(&self, id: &PackageId) -> FetchResult {
        let url = self.package_url(id);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                FetchError::Transport(e.to_string())
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            tracing::warn!("Package {} returned status {}", id, status);
            return Err(FetchError::Status(status));
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| {
            tracing::warn!("Package {} body is not JSON: {}", id, e);
            FetchError::Parse(e.to_string())
        })?;

        tracing::debug!("Fetched data for package {}: {}", id, body);
        Ok(PackageDocument::from_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str, path: &str) -> HttpPackageSource {
        HttpPackageSource::new(&BackendConfig {
            base_url: base.parse().unwrap(),
            package_path: path.to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_package_url_fills_template() {
        let source = source("http://localhost:7000", "/api/v1/Iternaries/get/{id}");
        assert_eq!(
            source.package_url(&PackageId::new("abc123")).as_str(),
            "http://localhost:7000/api/v1/Iternaries/get/abc123"
        );
    }

    #[test]
    fn test_package_url_keeps_base_path_and_encodes_id() {
        let source = source("http://gateway.local/itineraries/", "/get/{id}");
        assert_eq!(
            source.package_url(&PackageId::new("a/b c")).as_str(),
            "http://gateway.local/itineraries/get/a%2Fb%20c"
        );
    }

    #[test]
    fn test_package_url_fills_placeholder_inside_segment() {
        let source = source("http://localhost:7000", "/api/pkg-{id}.json");
        assert_eq!(
            source.package_url(&PackageId::new("a")).as_str(),
            "http://localhost:7000/api/pkg-a.json"
        );
        assert_ne!(
            source.package_url(&PackageId::new("a")),
            source.package_url(&PackageId::new("b"))
        );
    }

    #[test]
    fn test_package_url_fills_query_template() {
        let source = source("http://localhost:7000", "/get?id={id}&lang=en");
        assert_eq!(
            source.package_url(&PackageId::new("a")).as_str(),
            "http://localhost:7000/get?id=a&lang=en"
        );
        assert_eq!(
            source.package_url(&PackageId::new("a&b=c")).as_str(),
            "http://localhost:7000/get?id=a%26b%3Dc&lang=en"
        );
    }
}
