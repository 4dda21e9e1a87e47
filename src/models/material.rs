use serde::{Deserialize, Serialize};
use validator::Validate;

/// Référence utilisateur dans un feedback : le backend renvoie tantôt
/// l'identifiant nu, tantôt l'objet utilisateur imbriqué.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Embedded(EmbeddedUser),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedUser {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Embedded(user) => &user.id,
        }
    }
}

/// Avis laissé par un étudiant sur un support ou un test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Support de cours (PDF) vendu sur la plateforme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "_id")]
    pub id: String,

    pub class_name: String,
    pub course: String,
    pub sub_category: String,
    pub module: String,
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub academic_year: String,

    /// Durée d'accès en jours
    #[serde(default)]
    pub time_period: u32,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub file_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(default)]
    pub sample_images: Vec<String>,

    #[serde(default)]
    pub download_count: u64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub feedback: Vec<FeedbackEntry>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialsResponse {
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialResponse {
    pub material: Material,
}

/// Champs du formulaire de création (le PDF et les aperçus partent en multipart)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMaterial {
    #[validate(length(min = 1, message = "Class name is required"))]
    pub class_name: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    pub sub_category: String,
    pub module: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: String,
    pub academic_year: String,

    #[validate(range(min = 1, message = "Access period must be positive"))]
    pub time_period: u32,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// Mise à jour partielle d'un support (PUT /materials/{id})
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct MaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<u32>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ref_deserializes_bare_id_and_embedded_object() {
        let bare: FeedbackEntry =
            serde_json::from_str(r#"{ "user_id": "66aa01", "rating": 4.0 }"#).unwrap();
        assert_eq!(bare.user_id.as_ref().unwrap().id(), "66aa01");

        let embedded: FeedbackEntry = serde_json::from_str(
            r#"{ "user_id": { "_id": "66aa02", "name": "Asha" }, "comment": "Great notes" }"#,
        )
        .unwrap();
        assert_eq!(embedded.user_id.as_ref().unwrap().id(), "66aa02");
    }

    #[test]
    fn feedback_without_user_id_is_tolerated() {
        let entry: FeedbackEntry = serde_json::from_str(r#"{ "comment": "anonymous" }"#).unwrap();
        assert!(entry.user_id.is_none());
    }
}
