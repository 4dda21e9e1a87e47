use serde::{Deserialize, Serialize};

/// Inscription d'un utilisateur à un cours (lecture seule côté admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub user_id: String,
    pub course_id: String,

    #[serde(default)]
    pub enrollment_date: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub payment_status: String,

    #[serde(default)]
    pub amount_paid: f64,

    #[serde(default)]
    pub certificate_issued: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentsResponse {
    pub enrollments: Vec<EnrollmentItem>,
}
