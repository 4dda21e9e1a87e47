//! # Service API
//!
//! Couche d'accès typée vers l'API REST distante de la plateforme.
//! Chaque opération des écrans d'administration correspond à une méthode :
//! JSON pour le CRUD ordinaire, multipart pour les endpoints acceptant des
//! fichiers (vignettes, PDF, médias). Les GET partent sans jeton, les
//! mutations portent `Authorization: Bearer <token>`.

pub mod content;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod materials;
pub mod site;
pub mod tests;
pub mod users;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Part;
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Client typé vers l'API distante
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_base_url(&config.api_base_url, config.http_timeout_secs)
    }

    /// Construit un client vers une URL de base arbitraire (tests compris)
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http: Arc::new(http),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Résout un chemin d'asset renvoyé par le serveur en URL absolue
    pub fn file_url(&self, path: Option<&str>) -> Option<String> {
        let path = path?;
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Encode un identifiant destiné à un segment de chemin
    pub(crate) fn path_segment(id: &str) -> String {
        urlencoding::encode(id).into_owned()
    }

    fn json_headers(builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Content-Type", "application/json")
            .header("accept", "application/json")
    }

    /// GET sans jeton (les listes sont publiques côté backend)
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = Self::json_headers(self.http.get(self.endpoint(path)))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> AppResult<T> {
        let response = Self::json_headers(self.http.post(self.endpoint(path)))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> AppResult<T> {
        let response = Self::json_headers(self.http.put(self.endpoint(path)))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> AppResult<T> {
        let response = Self::json_headers(self.http.delete(self.endpoint(path)))
            .bearer_auth(token)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// POST multipart (uploads) : seul l'en-tête d'autorisation est posé,
    /// reqwest fixe lui-même le `Content-Type` avec la frontière.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        token: Option<&str>,
    ) -> AppResult<T> {
        let mut builder = self.http.post(self.endpoint(path)).multipart(form);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;
        Self::handle_response(response).await
    }

    /// Lit un fichier local et le transforme en part multipart
    pub(crate) async fn file_part(path: &Path) -> AppResult<Part> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        Ok(Part::bytes(bytes).file_name(file_name))
    }

    /// Traite la réponse : succès désérialisé, échec converti en erreur avec
    /// le message du corps JSON (`message`, puis `detail`), sinon le repli
    /// `HTTP error! status: {n}`.
    pub(crate) async fn handle_response<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|v| v.as_str())
                    .or_else(|| body.get("detail").and_then(|v| v.as_str()))
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        Err(match status.as_u16() {
            401 => AppError::Unauthorized(message),
            404 => AppError::NotFound(message),
            code => AppError::Api {
                status: code,
                message,
            },
        })
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::with_base_url("https://server.globaledutechlearn.com", 30).unwrap()
    }

    #[test]
    fn file_url_resolves_relative_paths_only() {
        let client = client();
        assert_eq!(client.file_url(None), None);
        assert_eq!(client.file_url(Some("")), None);
        assert_eq!(
            client.file_url(Some("uploads/courses/a.png")).unwrap(),
            "https://server.globaledutechlearn.com/uploads/courses/a.png"
        );
        assert_eq!(
            client.file_url(Some("https://cdn.example.com/a.png")).unwrap(),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(ApiClient::path_segment("abc/../x"), "abc%2F..%2Fx");
    }
}
