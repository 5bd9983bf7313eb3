use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{ExperienceCreate, ExperienceResponse};

impl ContentClient {
    /// `GET /experiences/`
    pub async fn list_experiences(&self) -> Result<Vec<ExperienceResponse>, Error> {
        let url = self.url("experiences/")?;
        debug!("listing experiences");
        self.get(url).await
    }

    /// `POST /experiences/`
    pub async fn create_experience(
        &self,
        body: &ExperienceCreate,
    ) -> Result<ExperienceResponse, Error> {
        let url = self.url("experiences/")?;
        debug!(role = %body.role, company = %body.company, "creating experience");
        self.post(url, body).await
    }

    /// `DELETE /experiences/{id}`
    pub async fn delete_experience(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("experiences/{id}"))?;
        debug!(id, "deleting experience");
        self.delete(url).await
    }
}
