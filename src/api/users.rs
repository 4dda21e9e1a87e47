//! Gestion des utilisateurs : liste, fiche, mise à jour, suppression,
//! plus les téléchargements et tentatives de test rattachés.

use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{MessageResponse, User, UserResponse, UserUpdate, UsersResponse};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DownloadsResponse {
    #[serde(default)]
    pub downloads: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TestAttemptsResponse {
    #[serde(default)]
    pub attempts: Vec<serde_json::Value>,
}

impl ApiClient {
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let response: UsersResponse = self.get_json("/users").await?;
        Ok(response.users)
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<User> {
        let response: UserResponse = self
            .get_json(&format!("/users/{}", Self::path_segment(user_id)))
            .await?;
        Ok(response.user)
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/users/{}", Self::path_segment(user_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_user(&self, user_id: &str, token: &str) -> AppResult<MessageResponse> {
        self.delete_json(&format!("/users/{}", Self::path_segment(user_id)), token)
            .await
    }

    /// Téléchargements effectués par un utilisateur
    pub async fn user_downloads(&self, user_id: &str) -> AppResult<Vec<serde_json::Value>> {
        let response: DownloadsResponse = self
            .get_json(&format!("/downloads/user/{}", Self::path_segment(user_id)))
            .await?;
        Ok(response.downloads)
    }

    /// Tentatives de test d'un utilisateur
    pub async fn user_test_attempts(&self, user_id: &str) -> AppResult<Vec<serde_json::Value>> {
        let response: TestAttemptsResponse = self
            .get_json(&format!(
                "/test-attempts/user/{}",
                Self::path_segment(user_id)
            ))
            .await?;
        Ok(response.attempts)
    }
}
