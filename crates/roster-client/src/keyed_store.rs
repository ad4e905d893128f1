use crate::{ClientResult, Endpoint, RecordStore};

use roster_core::{Record, RecordFields, RecordId};

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

/// Store behind a keyed real-time database REST surface.
///
/// Children live under `/{collection}.json` as a `{key: fields}` object and
/// the database assigns keys on push. Every success is a 200.
#[derive(Debug, Clone)]
pub struct KeyedRecordStore {
    endpoint: Endpoint,
    collection: String,
}

/// Reply to a push: the key the database generated
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

impl KeyedRecordStore {
    pub fn new(base_url: &str, collection: &str) -> ClientResult<Self> {
        Ok(Self {
            endpoint: Endpoint::new(base_url)?,
            collection: collection.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn collection_segment(&self) -> String {
        format!("{}.json", self.collection)
    }

    fn child_segment(id: &RecordId) -> String {
        format!("{}.json", id)
    }
}

#[async_trait]
impl RecordStore for KeyedRecordStore {
    async fn list(&self) -> ClientResult<Vec<Record>> {
        let collection = self.collection_segment();
        let url = self.endpoint.url(&[collection.as_str()])?;
        let req = self.endpoint.request(Method::GET, url);
        let body = self.endpoint.execute(req, StatusCode::OK).await?;

        // An empty collection reads back as `null`; children come in key order.
        let children: Option<BTreeMap<String, RecordFields>> = serde_json::from_slice(&body)?;

        Ok(children
            .unwrap_or_default()
            .into_iter()
            .map(|(key, fields)| Record::new(RecordId::from(key), fields))
            .collect())
    }

    async fn create(&self, fields: &RecordFields) -> ClientResult<Record> {
        let collection = self.collection_segment();
        let url = self.endpoint.url(&[collection.as_str()])?;
        let req = self.endpoint.request(Method::POST, url).json(fields);
        let body = self.endpoint.execute(req, StatusCode::OK).await?;

        let pushed: PushResponse = serde_json::from_slice(&body)?;
        Ok(Record::new(RecordId::from(pushed.name), fields.clone()))
    }

    async fn update(&self, record: &Record) -> ClientResult<()> {
        let child = Self::child_segment(&record.id);
        let url = self.endpoint.url(&[self.collection.as_str(), child.as_str()])?;
        let req = self.endpoint.request(Method::PUT, url).json(&record.fields);
        self.endpoint.execute(req, StatusCode::OK).await?;

        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> ClientResult<()> {
        let child = Self::child_segment(id);
        let url = self.endpoint.url(&[self.collection.as_str(), child.as_str()])?;
        let req = self.endpoint.request(Method::DELETE, url);
        self.endpoint.execute(req, StatusCode::OK).await?;

        Ok(())
    }
}
