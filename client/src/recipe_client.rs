use async_trait::async_trait;
use log::debug;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::client_api::{Recipe, RecipeClient, RecipeDraft};

/// Error type for recipe client
#[derive(Error, Debug)]
pub enum RCError {
    #[error("Error happens on connection with recipes server: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("Recipe {0} does not exist")]
    NotFound(String),
    #[error("Server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response status {0}")]
    UnexpectedStatus(u16),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the recipes service over HTTP
pub struct HttpRecipeClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRecipeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn recipes_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    fn recipe_url(&self, id: &str) -> String {
        format!("{}/recipes/{}", self.base_url, id)
    }

    /// Turns a non-success response into the matching [`RCError`].
    async fn error_from(response: Response, id: Option<&str>) -> RCError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return RCError::NotFound(id.to_string());
            }
        }
        if status.is_client_error() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
            };
            return RCError::Rejected {
                status: status.as_u16(),
                message,
            };
        }
        RCError::UnexpectedStatus(status.as_u16())
    }
}

#[async_trait]
impl RecipeClient for HttpRecipeClient {
    async fn list(&self) -> Result<Vec<Recipe>, RCError> {
        let response = self.http.get(self.recipes_url()).send().await?;
        if response.status() != StatusCode::OK {
            return Err(Self::error_from(response, None).await);
        }
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Recipe, RCError> {
        let response = self.http.get(self.recipe_url(id)).send().await?;
        if response.status() != StatusCode::OK {
            return Err(Self::error_from(response, Some(id)).await);
        }
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, RCError> {
        let response = self.http.post(self.recipes_url()).json(draft).send().await?;
        if response.status() != StatusCode::CREATED {
            return Err(Self::error_from(response, None).await);
        }
        let recipe: Recipe = response.json().await?;
        debug!("created recipe {}", recipe.id);
        Ok(recipe)
    }

    async fn update(&self, id: &str, draft: &RecipeDraft) -> Result<(), RCError> {
        let response = self.http.put(self.recipe_url(id)).json(draft).send().await?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(Self::error_from(response, Some(id)).await);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RCError> {
        let response = self.http.delete(self.recipe_url(id)).send().await?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(Self::error_from(response, Some(id)).await);
        }
        Ok(())
    }

    async fn healthy(&self) -> bool {
        match self.http.get(&self.base_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = HttpRecipeClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.recipes_url(), "http://127.0.0.1:8080/recipes");
        assert_eq!(client.recipe_url("abc"), "http://127.0.0.1:8080/recipes/abc");
    }
}
