// Skill endpoints
//
// Categories are listed with their skills embedded; individual skills are
// created and deleted under `/skills/`. Deleting a category cascades to its
// skills on the store side.

use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{SkillCategoryCreate, SkillCategoryResponse, SkillCreate, SkillResponse};

impl ContentClient {
    /// `GET /skills/categories`
    pub async fn list_skill_categories(&self) -> Result<Vec<SkillCategoryResponse>, Error> {
        let url = self.url("skills/categories")?;
        debug!("listing skill categories");
        self.get(url).await
    }

    /// `POST /skills/categories`
    pub async fn create_skill_category(
        &self,
        body: &SkillCategoryCreate,
    ) -> Result<SkillCategoryResponse, Error> {
        let url = self.url("skills/categories")?;
        debug!(name = %body.name, "creating skill category");
        self.post(url, body).await
    }

    /// `DELETE /skills/categories/{id}`
    pub async fn delete_skill_category(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("skills/categories/{id}"))?;
        debug!(id, "deleting skill category");
        self.delete(url).await
    }

    /// `POST /skills/`
    pub async fn create_skill(&self, body: &SkillCreate) -> Result<SkillResponse, Error> {
        let url = self.url("skills/")?;
        debug!(name = %body.name, category_id = body.category_id, "creating skill");
        self.post(url, body).await
    }

    /// `DELETE /skills/{id}`
    pub async fn delete_skill(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("skills/{id}"))?;
        debug!(id, "deleting skill");
        self.delete(url).await
    }
}
