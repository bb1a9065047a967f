//! `/repositories` operations

use super::Api;
use crate::error::Result;
use crate::http::{RequestConfig, Transport};
use crate::models::{CreateRepositoryInput, Repository, RepositoryList};
use crate::normalize::create_repository_to_api;
use crate::types::PageRequest;
use reqwest::Method;
use std::time::Duration;
use tracing::debug;

/// Repository operations
#[derive(Clone, Copy)]
pub struct Repositories<'a> {
    api: Api<'a>,
}

impl<'a> Repositories<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            api: Api::new(transport),
        }
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            api: self.api.with_timeout(timeout),
        }
    }

    pub async fn list(&self, page: PageRequest) -> Result<RepositoryList> {
        self.api
            .get("/repositories", RequestConfig::new().page(page))
            .await
    }

    pub async fn create(&self, input: &CreateRepositoryInput) -> Result<Repository> {
        let body = create_repository_to_api(input)?;
        debug!(name = %body.name, "Creating repository");
        self.api.send(Method::POST, "/repositories", &body).await
    }

    pub async fn get(&self, repository_id: &str) -> Result<Repository> {
        self.api
            .get(
                &format!("/repositories/{repository_id}"),
                RequestConfig::new(),
            )
            .await
    }

    pub async fn delete(&self, repository_id: &str) -> Result<()> {
        debug!(repository_id, "Deleting repository");
        self.api
            .delete(&format!("/repositories/{repository_id}"))
            .await
    }
}
