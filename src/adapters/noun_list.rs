use crate::adapters::http_client;
use crate::domain::ports::{ConfigProvider, NounSource};
use crate::utils::error::{LimerickError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashSet;

/// Newline-delimited plain-text noun list served from a fixed URL.
/// Fetched fresh on every call.
pub struct HttpNounList {
    client: Client,
    url: String,
}

impl HttpNounList {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            http_client(config.request_timeout())?,
            config.noun_list_url(),
        ))
    }
}

pub fn parse_noun_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl NounSource for HttpNounList {
    async fn fetch_nouns(&self) -> Result<HashSet<String>> {
        tracing::debug!("Fetching noun list from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LimerickError::StatusError {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let nouns = parse_noun_list(&response.text().await?);
        tracing::debug!("Loaded {} nouns", nouns.len());
        Ok(nouns)
    }
}
