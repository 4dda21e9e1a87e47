//! Contenus du site public : institutions, coordonnées, messages de contact,
//! CGU, carrousel, vidéos YouTube, bandeau défilant et upload générique.

use std::path::Path;

use reqwest::multipart::Form;
use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{
    CarouselItem, CarouselResponse, ContactItem, ContactMessageItem, ContactMessagesResponse,
    ContactResponse, ContactUpdate, CreatedResponse, Institution, InstitutionResponse,
    InstitutionUpdate, InstitutionsResponse, MessageResponse, NewInstitution, NewSliderText,
    NewYouTubeVideo, SliderTextItem, SliderTextUpdate, SliderTextsResponse, TermsItem,
    TermsResponse, TermsUpdate, UploadResponse, YouTubeVideo, YouTubeVideosResponse,
};

impl ApiClient {
    // ---- Institutions ----

    pub async fn list_institutions(&self) -> AppResult<Vec<Institution>> {
        let response: InstitutionsResponse = self.get_json("/institutions").await?;
        Ok(response.institutions)
    }

    pub async fn get_institution(&self, institution_id: &str) -> AppResult<Institution> {
        let response: InstitutionResponse = self
            .get_json(&format!(
                "/institutions/{}",
                Self::path_segment(institution_id)
            ))
            .await?;
        Ok(response.institution)
    }

    pub async fn create_institution(
        &self,
        institution: &NewInstitution,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        institution.validate()?;
        self.post_json("/institutions", institution, token).await
    }

    pub async fn update_institution(
        &self,
        institution_id: &str,
        update: &InstitutionUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.put_json(
            &format!("/institutions/{}", Self::path_segment(institution_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_institution(
        &self,
        institution_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/institutions/{}", Self::path_segment(institution_id)),
            token,
        )
        .await
    }

    // ---- Coordonnées ----

    pub async fn get_contact(&self) -> AppResult<ContactItem> {
        let response: ContactResponse = self.get_json("/contact").await?;
        Ok(response.contact)
    }

    pub async fn update_contact(
        &self,
        contact_id: &str,
        update: &ContactUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/contact/{}", Self::path_segment(contact_id)),
            update,
            token,
        )
        .await
    }

    // ---- Messages de contact ----

    pub async fn list_contact_messages(&self) -> AppResult<Vec<ContactMessageItem>> {
        let response: ContactMessagesResponse = self.get_json("/contact-messages").await?;
        Ok(response.messages)
    }

    pub async fn delete_contact_message(
        &self,
        message_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/contact-messages/{}", Self::path_segment(message_id)),
            token,
        )
        .await
    }

    // ---- Conditions générales ----

    pub async fn get_active_terms(&self) -> AppResult<TermsItem> {
        let response: TermsResponse = self.get_json("/terms-conditions").await?;
        Ok(response.terms)
    }

    pub async fn update_terms(
        &self,
        terms_id: &str,
        update: &TermsUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/terms-conditions/{}", Self::path_segment(terms_id)),
            update,
            token,
        )
        .await
    }

    // ---- Carrousel ----

    pub async fn list_carousel(&self) -> AppResult<Vec<CarouselItem>> {
        let response: CarouselResponse = self.get_json("/carousel").await?;
        Ok(response.items)
    }

    /// POST /carousel : une seule part `image`
    pub async fn create_carousel(&self, image: &Path, token: &str) -> AppResult<CreatedResponse> {
        let form = Form::new().part("image", Self::file_part(image).await?);
        self.post_multipart("/carousel", form, Some(token)).await
    }

    pub async fn delete_carousel(&self, item_id: &str, token: &str) -> AppResult<MessageResponse> {
        self.delete_json(&format!("/carousel/{}", Self::path_segment(item_id)), token)
            .await
    }

    // ---- Vidéos YouTube ----

    pub async fn list_youtube_videos(&self) -> AppResult<Vec<YouTubeVideo>> {
        let response: YouTubeVideosResponse = self.get_json("/youtube").await?;
        Ok(response.videos)
    }

    pub async fn create_youtube_video(
        &self,
        video: &NewYouTubeVideo,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        video.validate()?;
        self.post_json("/youtube", video, token).await
    }

    pub async fn delete_youtube_video(
        &self,
        video_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(&format!("/youtube/{}", Self::path_segment(video_id)), token)
            .await
    }

    // ---- Bandeau défilant ----

    pub async fn list_slider_texts(&self) -> AppResult<Vec<SliderTextItem>> {
        let response: SliderTextsResponse = self.get_json("/text-slider").await?;
        Ok(response.items)
    }

    pub async fn create_slider_text(
        &self,
        text: &NewSliderText,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        text.validate()?;
        self.post_json("/text-slider", text, token).await
    }

    pub async fn update_slider_text(
        &self,
        item_id: &str,
        update: &SliderTextUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.put_json(
            &format!("/text-slider/{}", Self::path_segment(item_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_slider_text(
        &self,
        item_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/text-slider/{}", Self::path_segment(item_id)),
            token,
        )
        .await
    }

    // ---- Upload générique ----

    /// POST /upload/image : une part `file`, jeton optionnel
    pub async fn upload_image(
        &self,
        file: &Path,
        token: Option<&str>,
    ) -> AppResult<UploadResponse> {
        let form = Form::new().part("file", Self::file_part(file).await?);
        self.post_multipart("/upload/image", form, token).await
    }
}
