// src/core/net.rs
//
// Blocking HTTPS GET. One client per page source; the collector never runs
// requests in parallel.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{PipelineError, Result};

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .header("Accept-Language", "tr-TR,tr;q=0.9,en;q=0.8")
        .send()
        .map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                PipelineError::Collection(format!("could not reach {url}: {e}"))
            } else {
                PipelineError::from(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::Collection(format!("HTTP {status} for {url}")));
    }
    Ok(response.text()?)
}
