use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{SocialLinkCreate, SocialLinkResponse};

impl ContentClient {
    /// `GET /social-links/`
    pub async fn list_social_links(&self) -> Result<Vec<SocialLinkResponse>, Error> {
        let url = self.url("social-links/")?;
        debug!("listing social links");
        self.get(url).await
    }

    /// `POST /social-links/`
    pub async fn create_social_link(
        &self,
        body: &SocialLinkCreate,
    ) -> Result<SocialLinkResponse, Error> {
        let url = self.url("social-links/")?;
        debug!(platform = %body.platform, "creating social link");
        self.post(url, body).await
    }

    /// `DELETE /social-links/{id}`
    pub async fn delete_social_link(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("social-links/{id}"))?;
        debug!(id, "deleting social link");
        self.delete(url).await
    }
}
