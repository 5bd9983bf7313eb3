// Contact endpoints. `create_contact` is the only write visitors use.

use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::models::{ContactCreate, ContactResponse};

impl ContentClient {
    /// `GET /contacts/` (newest first)
    pub async fn list_contacts(&self) -> Result<Vec<ContactResponse>, Error> {
        let url = self.url("contacts/")?;
        debug!("listing contacts");
        self.get(url).await
    }

    /// `POST /contacts/`
    pub async fn create_contact(&self, body: &ContactCreate) -> Result<ContactResponse, Error> {
        let url = self.url("contacts/")?;
        debug!("submitting contact message");
        self.post(url, body).await
    }

    /// `DELETE /contacts/{id}`
    pub async fn delete_contact(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("contacts/{id}"))?;
        debug!(id, "deleting contact");
        self.delete(url).await
    }
}
