use crate::models::{Org, PublicKey, User};
use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    /// No auth token is sent, so every call counts against the
    /// unauthenticated rate limit. No request timeout is configured.
    pub fn new(api_url: String) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("gitrecon"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client, api_url })
    }

    /// Raw body of the user's activity feed, whatever the response status.
    /// On 404 or 403 the body is the API's JSON error object and is handed
    /// to the caller unchanged.
    pub async fn user_events_raw(&self, username: &str) -> Result<String> {
        let url = format!("{}/users/{}/events?per_page=100000", self.api_url, username);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch events for {}", username))?;
        let body = response.text().await?;
        Ok(body)
    }

    pub async fn get_user(&self, username: &str) -> Result<User> {
        let url = format!("{}/users/{}", self.api_url, username);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            let user = response.json().await?;
            Ok(user)
        } else {
            Err(anyhow!(
                "Failed to fetch user {}: {}",
                username,
                response.status()
            ))
        }
    }

    pub async fn get_user_orgs(&self, username: &str) -> Result<Vec<Org>> {
        let url = format!("{}/users/{}/orgs", self.api_url, username);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            let orgs = response.json().await?;
            Ok(orgs)
        } else {
            Err(anyhow!(
                "Failed to fetch organizations for {}: {}",
                username,
                response.status()
            ))
        }
    }

    pub async fn get_user_keys(&self, username: &str) -> Result<Vec<PublicKey>> {
        let url = format!("{}/users/{}/keys", self.api_url, username);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            let keys = response.json().await?;
            Ok(keys)
        } else {
            Err(anyhow!(
                "Failed to fetch public keys for {}: {}",
                username,
                response.status()
            ))
        }
    }
}
