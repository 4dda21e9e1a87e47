//! CRUD des cours. La création part en multipart avec la vignette,
//! les mises à jour sont des PUT JSON partiels.

use std::path::Path;

use reqwest::multipart::Form;
use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{
    Course, CourseResponse, CourseUpdate, CoursesResponse, CreatedResponse, MessageResponse,
    NewCourse,
};

impl ApiClient {
    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        let response: CoursesResponse = self.get_json("/courses").await?;
        Ok(response.courses)
    }

    pub async fn get_course(&self, course_id: &str) -> AppResult<Course> {
        let response: CourseResponse = self
            .get_json(&format!("/courses/{}", Self::path_segment(course_id)))
            .await?;
        Ok(response.course)
    }

    /// POST /courses : champs du formulaire + fichier `thumbnail`
    pub async fn create_course(
        &self,
        new_course: &NewCourse,
        thumbnail: &Path,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        new_course.validate()?;

        let form = Form::new()
            .part("thumbnail", Self::file_part(thumbnail).await?)
            .text("name", new_course.name.clone())
            .text("title", new_course.title.clone())
            .text("description", new_course.description.clone())
            .text("category", new_course.category.clone())
            .text("sub_category", new_course.sub_category.clone())
            .text("start_date", new_course.start_date.clone())
            .text("end_date", new_course.end_date.clone())
            .text("duration", new_course.duration.clone())
            .text("instructor", new_course.instructor.clone())
            .text("price", new_course.price.to_string());

        self.post_multipart("/courses", form, Some(token)).await
    }

    pub async fn update_course(
        &self,
        course_id: &str,
        update: &CourseUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/courses/{}", Self::path_segment(course_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_course(&self, course_id: &str, token: &str) -> AppResult<MessageResponse> {
        self.delete_json(&format!("/courses/{}", Self::path_segment(course_id)), token)
            .await
    }
}
