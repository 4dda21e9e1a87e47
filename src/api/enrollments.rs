//! Inscriptions : lecture par cours ou par utilisateur, suppression.

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{EnrollmentItem, EnrollmentsResponse, MessageResponse};

impl ApiClient {
    pub async fn enrollments_by_course(&self, course_id: &str) -> AppResult<Vec<EnrollmentItem>> {
        let response: EnrollmentsResponse = self
            .get_json(&format!(
                "/enrollments/course/{}",
                Self::path_segment(course_id)
            ))
            .await?;
        Ok(response.enrollments)
    }

    pub async fn enrollments_by_user(&self, user_id: &str) -> AppResult<Vec<EnrollmentItem>> {
        let response: EnrollmentsResponse = self
            .get_json(&format!(
                "/enrollments/user/{}",
                Self::path_segment(user_id)
            ))
            .await?;
        Ok(response.enrollments)
    }

    pub async fn delete_enrollment(
        &self,
        enrollment_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/enrollments/{}", Self::path_segment(enrollment_id)),
            token,
        )
        .await
    }
}
