//! Modèles de données : les enregistrements plats renvoyés par l'API distante.
//!
//! Les identifiants (`_id`) et les horodatages sont possédés par le backend ;
//! le client ne garantit rien de plus que ce que vérifient les validateurs
//! de formulaire.

pub mod content;
pub mod course;
pub mod dashboard;
pub mod enrollment;
pub mod material;
pub mod site;
pub mod test;
pub mod user;

pub use content::*;
pub use course::*;
pub use dashboard::*;
pub use enrollment::*;
pub use material::*;
pub use site::*;
pub use test::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Réponse générique `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Réponse de création `{ "message": ..., "id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

/// Réponse d'upload de fichier `{ "message": ..., "file_path": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub file_path: String,
}
