use crate::adapters::http_client;
use crate::domain::model::RhymeKey;
use crate::domain::ports::{ConfigProvider, RhymeSource};
use crate::utils::error::{LimerickError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Datamuse `/words` endpoint, queried with `rel_rhy` and `md=ps` so each
/// entry carries part-of-speech tags and a syllable count.
pub struct DatamuseClient {
    client: Client,
    endpoint: String,
    max_results: u64,
}

impl DatamuseClient {
    pub fn new(client: Client, endpoint: impl Into<String>, max_results: u64) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            max_results,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            http_client(config.request_timeout())?,
            config.rhyme_endpoint(),
            config.max_results(),
        ))
    }
}

#[async_trait]
impl RhymeSource for DatamuseClient {
    async fn rhymes_for(&self, key: &RhymeKey) -> Result<Vec<Value>> {
        tracing::debug!("Querying {} for rhymes of '{}'", self.endpoint, key);
        let max = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("rel_rhy", key.as_str()), ("md", "ps"), ("max", max.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Rhyme service response status: {}", status);
        if !status.is_success() {
            return Err(LimerickError::StatusError {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        match response.json::<Value>().await? {
            Value::Array(entries) => Ok(entries),
            other => {
                tracing::warn!("Expected a JSON array from the rhyme service, got {}", other);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client_for(server: &MockServer) -> DatamuseClient {
        DatamuseClient::new(
            http_client(Duration::from_secs(5)).unwrap(),
            server.url("/words"),
            100,
        )
    }

    #[tokio::test]
    async fn test_query_parameters_and_entries() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/words")
                .query_param("rel_rhy", "na")
                .query_param("md", "ps")
                .query_param("max", "100");
            then.status(200).json_body(serde_json::json!([
                {"word": "tuna", "score": 2334, "numSyllables": 2, "tags": ["n"]},
                {"word": "sauna", "score": 1711, "numSyllables": 2, "tags": ["n"]}
            ]));
        });

        let entries = client_for(&server)
            .rhymes_for(&RhymeKey::new("na"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["word"], "tuna");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(503);
        });

        let err = client_for(&server)
            .rhymes_for(&RhymeKey::new("na"))
            .await
            .unwrap_err();

        api_mock.assert();
        assert!(matches!(err, LimerickError::StatusError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_non_array_body_yields_no_entries() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(200).json_body(serde_json::json!({"error": "nope"}));
        });

        let entries = client_for(&server)
            .rhymes_for(&RhymeKey::new("na"))
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
