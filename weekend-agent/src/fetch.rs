use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::{Error, FetchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Source of page bodies for the pipeline.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Anonymous GET returning the response body.
    async fn get(&self, url: &str) -> Result<String, FetchError>;

    /// Logs in with a form POST and returns the body of that same response.
    /// The session cookie is kept for later requests.
    async fn fetch_with_session(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client })
    }

    async fn body(url: &str, response: reqwest::Result<Response>) -> Result<String, FetchError> {
        response
            .and_then(Response::error_for_status)
            .map_err(|err| FetchError::new(url, err))?
            .text()
            .await
            .map_err(|err| FetchError::new(url, err))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        Self::body(url, self.client.get(url).send().await).await
    }

    async fn fetch_with_session(
        &self,
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<String, FetchError> {
        debug!("POST {login_url} as {}", credentials.username);

        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];

        Self::body(login_url, self.client.post(login_url).form(&form).send().await).await
    }
}
