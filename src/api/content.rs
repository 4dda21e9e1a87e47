//! Contenus applicatifs : notifications, actualités, témoignages.

use std::path::Path;

use reqwest::multipart::Form;
use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{
    CreatedResponse, CurrentAffairsItem, CurrentAffairsResponse, CurrentAffairsUpdate,
    MessageResponse, NewCurrentAffairs, NewNotification, NewTestimonial, NotificationItem,
    NotificationUpdate, NotificationsResponse, Testimonial, TestimonialResponse,
    TestimonialUpdate, TestimonialsResponse,
};

impl ApiClient {
    // ---- Notifications ----

    pub async fn list_notifications(&self) -> AppResult<Vec<NotificationItem>> {
        let response: NotificationsResponse = self.get_json("/notifications").await?;
        Ok(response.notifications)
    }

    pub async fn create_notification(
        &self,
        notification: &NewNotification,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        notification.validate()?;
        self.post_json("/notifications", notification, token).await
    }

    pub async fn update_notification(
        &self,
        notification_id: &str,
        update: &NotificationUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.put_json(
            &format!("/notifications/{}", Self::path_segment(notification_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_notification(
        &self,
        notification_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/notifications/{}", Self::path_segment(notification_id)),
            token,
        )
        .await
    }

    // ---- Actualités ----

    pub async fn list_current_affairs(&self) -> AppResult<Vec<CurrentAffairsItem>> {
        let response: CurrentAffairsResponse = self.get_json("/current-affairs").await?;
        Ok(response.current_affairs)
    }

    pub async fn create_current_affairs(
        &self,
        item: &NewCurrentAffairs,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        item.validate()?;
        self.post_json("/current-affairs", item, token).await
    }

    pub async fn update_current_affairs(
        &self,
        item_id: &str,
        update: &CurrentAffairsUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.put_json(
            &format!("/current-affairs/{}", Self::path_segment(item_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_current_affairs(
        &self,
        item_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/current-affairs/{}", Self::path_segment(item_id)),
            token,
        )
        .await
    }

    // ---- Témoignages ----

    pub async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        let response: TestimonialsResponse = self.get_json("/testimonials").await?;
        Ok(response.testimonials)
    }

    pub async fn get_testimonial(&self, testimonial_id: &str) -> AppResult<Testimonial> {
        let response: TestimonialResponse = self
            .get_json(&format!(
                "/testimonials/{}",
                Self::path_segment(testimonial_id)
            ))
            .await?;
        Ok(response.testimonial)
    }

    /// POST /testimonials : champs + `media_file` + `student_image` optionnel.
    /// La note par défaut est 5, comme dans le formulaire d'origine.
    pub async fn create_testimonial(
        &self,
        testimonial: &NewTestimonial,
        media_file: &Path,
        student_image: Option<&Path>,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        testimonial.validate()?;

        let mut form = Form::new().part("media_file", Self::file_part(media_file).await?);
        if let Some(image) = student_image {
            form = form.part("student_image", Self::file_part(image).await?);
        }
        form = form
            .text("title", testimonial.title.clone())
            .text("description", testimonial.description.clone())
            .text("student_name", testimonial.student_name.clone())
            .text("course", testimonial.course.clone())
            .text("rating", testimonial.rating.unwrap_or(5).to_string())
            .text("media_type", testimonial.media_type.clone());

        self.post_multipart("/testimonials", form, Some(token)).await
    }

    pub async fn update_testimonial(
        &self,
        testimonial_id: &str,
        update: &TestimonialUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/testimonials/{}", Self::path_segment(testimonial_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_testimonial(
        &self,
        testimonial_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/testimonials/{}", Self::path_segment(testimonial_id)),
            token,
        )
        .await
    }
}
