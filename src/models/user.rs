use serde::{Deserialize, Serialize};
use validator::Validate;

/// Utilisateur de la plateforme (enregistrement miroir de l'API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub contact_no: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub education: String,

    #[serde(default)]
    pub course: String,

    #[serde(default)]
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase_uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub last_login: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Mise à jour partielle d'un utilisateur (PUT /users/{id})
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_phone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Réponse de connexion de l'administrateur (produite côté client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
    pub token: String,
    pub user: User,
}
