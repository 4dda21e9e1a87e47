use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::material::FeedbackEntry;

/// Cours proposé sur la plateforme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub instructor: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub thumbnail_image: String,

    #[serde(default)]
    pub enrolled_students: u64,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub feedback: Vec<FeedbackEntry>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseResponse {
    pub course: Course,
}

/// Champs du formulaire de création de cours (la vignette part en multipart)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Course title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Sub-category is required"))]
    pub sub_category: String,

    pub start_date: String,
    pub end_date: String,
    pub duration: String,

    #[validate(length(min = 1, message = "Instructor is required"))]
    pub instructor: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// Mise à jour partielle d'un cours (PUT /courses/{id})
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}
