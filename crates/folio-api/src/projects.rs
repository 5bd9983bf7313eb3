use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{ProjectCreate, ProjectResponse};

impl ContentClient {
    /// `GET /projects/`
    pub async fn list_projects(&self) -> Result<Vec<ProjectResponse>, Error> {
        let url = self.url("projects/")?;
        debug!("listing projects");
        self.get(url).await
    }

    /// `POST /projects/`
    pub async fn create_project(&self, body: &ProjectCreate) -> Result<ProjectResponse, Error> {
        let url = self.url("projects/")?;
        debug!(title = %body.title, "creating project");
        self.post(url, body).await
    }

    /// `DELETE /projects/{id}`
    pub async fn delete_project(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("projects/{id}"))?;
        debug!(id, "deleting project");
        self.delete(url).await
    }
}
