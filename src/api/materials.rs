//! CRUD des supports de cours. La création envoie le PDF et les images
//! d'aperçu en multipart (`pdf_file`, `sample_images` répété).

use std::path::{Path, PathBuf};

use reqwest::multipart::Form;
use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{
    CreatedResponse, Material, MaterialResponse, MaterialUpdate, MaterialsResponse,
    MessageResponse, NewMaterial,
};

impl ApiClient {
    pub async fn list_materials(&self) -> AppResult<Vec<Material>> {
        let response: MaterialsResponse = self.get_json("/materials").await?;
        Ok(response.materials)
    }

    pub async fn get_material(&self, material_id: &str) -> AppResult<Material> {
        let response: MaterialResponse = self
            .get_json(&format!("/materials/{}", Self::path_segment(material_id)))
            .await?;
        Ok(response.material)
    }

    /// POST /materials : champs du formulaire + `pdf_file` + aperçus optionnels
    pub async fn create_material(
        &self,
        new_material: &NewMaterial,
        pdf_file: &Path,
        sample_images: &[PathBuf],
        token: &str,
    ) -> AppResult<CreatedResponse> {
        new_material.validate()?;

        let mut form = Form::new().part("pdf_file", Self::file_part(pdf_file).await?);
        for image in sample_images {
            form = form.part("sample_images", Self::file_part(image).await?);
        }
        form = form
            .text("class_name", new_material.class_name.clone())
            .text("course", new_material.course.clone())
            .text("sub_category", new_material.sub_category.clone())
            .text("module", new_material.module.clone())
            .text("title", new_material.title.clone())
            .text("description", new_material.description.clone())
            .text("academic_year", new_material.academic_year.clone())
            .text("time_period", new_material.time_period.to_string())
            .text("price", new_material.price.to_string());

        self.post_multipart("/materials", form, Some(token)).await
    }

    pub async fn update_material(
        &self,
        material_id: &str,
        update: &MaterialUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/materials/{}", Self::path_segment(material_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_material(
        &self,
        material_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/materials/{}", Self::path_segment(material_id)),
            token,
        )
        .await
    }
}
