use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::ORIGIN, Client};

use crate::{config::ClassifierConfig, domain::SpamStatus};

use super::{
    inference::{build_request, parse_response},
    Classifier,
};

#[derive(Clone)]
pub struct ClassifierClient {
    http: Client,
    config: ClassifierConfig,
}

impl ClassifierClient {
    pub fn new(http: Client, config: ClassifierConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl Classifier for ClassifierClient {
    async fn classify(&self, content: &str) -> Result<SpamStatus> {
        let mut request = self
            .http
            .post(self.config.endpoint.clone())
            .json(&build_request(content));
        if let Some(origin) = &self.config.origin {
            request = request.header(ORIGIN, origin.as_str());
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("failed to reach classifier at {}", self.config.endpoint))?
            .error_for_status()?;

        parse_response(response).await
    }
}
