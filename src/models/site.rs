//! Contenus éditoriaux du site : institution, contact, CGU, carrousel,
//! vidéos YouTube et bandeau défilant.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Institution partenaire présentée sur le site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionsResponse {
    pub institutions: Vec<Institution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionResponse {
    pub institution: Institution,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewInstitution {
    #[validate(length(min = 1, message = "Institution name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InstitutionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
}

/// Liens des réseaux sociaux du pied de page
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SocialMedia {
    #[validate(custom = "crate::utils::validators::validate_website")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_website")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_website")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_website")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Coordonnées affichées sur la page contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    pub contact: ContactItem,
}

/// Formulaire de mise à jour des coordonnées (PUT /contact/{id})
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_phone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_phone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(custom = "crate::utils::validators::validate_website")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,

    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

/// Message reçu via le formulaire de contact public
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessagesResponse {
    pub messages: Vec<ContactMessageItem>,
}

/// Conditions générales d'utilisation (document unique actif)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default)]
    pub effective_date: String,

    #[serde(default)]
    pub last_modified: String,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermsResponse {
    pub terms: TermsItem,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct TermsUpdate {
    #[validate(length(min = 1, message = "Terms content cannot be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Image du carrousel de la page d'accueil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselResponse {
    pub items: Vec<CarouselItem>,
}

/// Vidéo YouTube mise en avant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeVideo {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,
    pub youtube_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeVideosResponse {
    pub videos: Vec<YouTubeVideo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewYouTubeVideo {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(custom = "crate::utils::validators::validate_youtube_url")]
    pub youtube_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Texte du bandeau défilant de la page d'accueil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderTextItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub text: String,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SliderTextsResponse {
    pub items: Vec<SliderTextItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSliderText {
    #[validate(length(min = 1, message = "Slider text cannot be empty"))]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SliderTextUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
