use crate::{ClientResult, Endpoint, RecordStore};

use roster_core::{Record, RecordFields, RecordId};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

/// Store behind a generic JSON API.
///
/// | verb   | request                    | success |
/// |--------|----------------------------|---------|
/// | list   | `GET /{collection}`        | 200     |
/// | create | `POST /{collection}`       | 201     |
/// | update | `PUT /{collection}/{id}`   | 200     |
/// | delete | `DELETE /{collection}/{id}`| 200     |
#[derive(Debug, Clone)]
pub struct RestRecordStore {
    endpoint: Endpoint,
    collection: String,
}

impl RestRecordStore {
    pub fn new(base_url: &str, collection: &str) -> ClientResult<Self> {
        Ok(Self {
            endpoint: Endpoint::new(base_url)?,
            collection: collection.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn list(&self) -> ClientResult<Vec<Record>> {
        let url = self.endpoint.url(&[self.collection.as_str()])?;
        let req = self.endpoint.request(Method::GET, url);
        let body = self.endpoint.execute(req, StatusCode::OK).await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, fields: &RecordFields) -> ClientResult<Record> {
        let url = self.endpoint.url(&[self.collection.as_str()])?;
        let req = self.endpoint.request(Method::POST, url).json(fields);
        let body = self.endpoint.execute(req, StatusCode::CREATED).await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn update(&self, record: &Record) -> ClientResult<()> {
        let url = self.endpoint.url(&[self.collection.as_str(), record.id.as_str()])?;
        let req = self.endpoint.request(Method::PUT, url).json(&record.fields);
        self.endpoint.execute(req, StatusCode::OK).await?;

        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> ClientResult<()> {
        let url = self.endpoint.url(&[self.collection.as_str(), id.as_str()])?;
        let req = self.endpoint.request(Method::DELETE, url);
        self.endpoint.execute(req, StatusCode::OK).await?;

        Ok(())
    }
}
