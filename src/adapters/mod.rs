// Adapters layer: HTTP implementations of the domain ports.

pub mod datamuse;
pub mod noun_list;

use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Every outbound request shares the same bounded timeout.
pub fn http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("limerick-gen/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
