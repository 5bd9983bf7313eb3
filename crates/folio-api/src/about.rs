// About section endpoints: paragraphs and headline stats.

use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{AboutCreate, AboutResponse, StatCreate, StatResponse};

impl ContentClient {
    /// `GET /about/content`
    pub async fn list_about(&self) -> Result<Vec<AboutResponse>, Error> {
        let url = self.url("about/content")?;
        debug!("listing about paragraphs");
        self.get(url).await
    }

    /// `POST /about/content`
    pub async fn create_about(&self, body: &AboutCreate) -> Result<AboutResponse, Error> {
        let url = self.url("about/content")?;
        debug!(section = %body.section, "creating about paragraph");
        self.post(url, body).await
    }

    /// `DELETE /about/content/{id}`
    pub async fn delete_about(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("about/content/{id}"))?;
        debug!(id, "deleting about paragraph");
        self.delete(url).await
    }

    /// `GET /about/stats`
    pub async fn list_stats(&self) -> Result<Vec<StatResponse>, Error> {
        let url = self.url("about/stats")?;
        debug!("listing stats");
        self.get(url).await
    }

    /// `POST /about/stats`
    pub async fn create_stat(&self, body: &StatCreate) -> Result<StatResponse, Error> {
        let url = self.url("about/stats")?;
        debug!(label = %body.label, "creating stat");
        self.post(url, body).await
    }

    /// `DELETE /about/stats/{id}`
    pub async fn delete_stat(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("about/stats/{id}"))?;
        debug!(id, "deleting stat");
        self.delete(url).await
    }
}
