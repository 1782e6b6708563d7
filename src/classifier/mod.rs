mod client;
pub mod inference;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::SpamStatus;

pub use client::ClassifierClient;

/// Anything that can judge a message body as spam or ham.
#[async_trait]
pub trait Classifier: Send + Sync + 'static {
    async fn classify(&self, content: &str) -> Result<SpamStatus>;
}
