use crate::{ClientError, ClientResult};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};

/// Base address of a store plus the HTTP client used to reach it
#[derive(Debug, Clone)]
pub struct Endpoint {
    base_url: Url,
    client: ReqwestClient,
}

impl Endpoint {
    /// Create a new endpoint
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000"), may carry a path prefix
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ClientError::invalid_url(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            client: ReqwestClient::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("{} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send the request and return the body if the status is the expected one
    pub(crate) async fn execute(
        &self,
        req: RequestBuilder,
        expected: StatusCode,
    ) -> ClientResult<Vec<u8>> {
        let request = req.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!("{} {} -> {}", method, url, status);

        if status != expected {
            return Err(ClientError::remote(status.as_u16(), &body));
        }

        Ok(body)
    }
}
