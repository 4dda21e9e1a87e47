use serde::{Deserialize, Serialize};
use validator::Validate;

/// Notification poussée aux utilisateurs de l'application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,
    pub message: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub target_audience: String,

    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub read_by: Vec<String>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewNotification {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub target_audience: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Article d'actualité (rubrique « current affairs »)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAffairsItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,
    pub content: String,
    pub category: String,
    pub publish_date: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub view_count: u64,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentAffairsResponse {
    pub current_affairs: Vec<CurrentAffairsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCurrentAffairs {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub publish_date: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CurrentAffairsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// Témoignage d'étudiant (photo/vidéo envoyée en multipart à la création)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,
    pub description: String,
    pub student_name: String,
    pub course: String,

    #[serde(default)]
    pub rating: u8,

    pub media_type: String,

    #[serde(default)]
    pub media_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_image: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialResponse {
    pub testimonial: Testimonial,
}

/// Champs du formulaire de témoignage, note par défaut à 5
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// `image` ou `video`
    #[validate(length(min = 1, message = "Media type is required"))]
    pub media_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct TestimonialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}
