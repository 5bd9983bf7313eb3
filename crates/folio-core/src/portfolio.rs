// ── Portfolio facade ──
//
// Owns the content store client and one remote collection per resource.
// Sections subscribe to collections; writes go through `execute`, which
// awaits a refresh of the affected collection before returning.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use folio_api::{ContentClient, TransportConfig};

use crate::config::PortfolioConfig;
use crate::error::CoreError;
use crate::model::{
    AboutSection, Contact, Experience, Ordered, Project, SkillCategory, SocialLink, Stat,
};
use crate::mutation::{DeleteTarget, Mutation};
use crate::section::Resource;
use crate::store::RemoteCollection;
use crate::stream::SyncStream;

/// The main entry point for front ends.
///
/// Cheaply cloneable via `Arc<PortfolioInner>`.
#[derive(Clone)]
pub struct Portfolio {
    inner: Arc<PortfolioInner>,
}

struct PortfolioInner {
    config: PortfolioConfig,
    client: ContentClient,
    about: RemoteCollection<AboutSection>,
    stats: RemoteCollection<Stat>,
    social_links: RemoteCollection<SocialLink>,
    experiences: RemoteCollection<Experience>,
    projects: RemoteCollection<Project>,
    skill_categories: RemoteCollection<SkillCategory>,
    contacts: RemoteCollection<Contact>,
}

/// Build a collection whose fetch calls one list endpoint and converts
/// each wire record into its domain type.
fn collection<W, T, F, Fut>(
    resource: Resource,
    client: &ContentClient,
    list: F,
) -> RemoteCollection<T>
where
    T: Ordered + From<W> + Send + Sync + 'static,
    W: Send + 'static,
    F: Fn(ContentClient) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<W>, folio_api::Error>> + Send + 'static,
{
    let client = client.clone();
    RemoteCollection::new(resource, move || {
        let request = list(client.clone());
        async move {
            let records = request.await?;
            Ok::<Vec<T>, CoreError>(records.into_iter().map(T::from).collect())
        }
    })
}

impl Portfolio {
    /// Build the client and idle collections. Does not fetch anything;
    /// call [`mount()`](Self::mount).
    pub fn new(config: PortfolioConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::new(config.timeout);
        let client = ContentClient::new(config.api_url.clone(), &transport)?;
        Ok(Self::with_client(config, client))
    }

    /// Build around an existing client.
    pub fn with_client(config: PortfolioConfig, client: ContentClient) -> Self {
        let inner = PortfolioInner {
            about: collection(Resource::About, &client, |c| async move {
                c.list_about().await
            }),
            stats: collection(Resource::Stats, &client, |c| async move {
                c.list_stats().await
            }),
            social_links: collection(Resource::SocialLinks, &client, |c| async move {
                c.list_social_links().await
            }),
            experiences: collection(Resource::Experiences, &client, |c| async move {
                c.list_experiences().await
            }),
            projects: collection(Resource::Projects, &client, |c| async move {
                c.list_projects().await
            }),
            skill_categories: collection(Resource::SkillCategories, &client, |c| async move {
                c.list_skill_categories().await
            }),
            contacts: collection(Resource::Contacts, &client, |c| async move {
                c.list_contacts().await
            }),
            config,
            client,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.inner.config
    }

    pub fn is_admin(&self) -> bool {
        self.inner.config.admin
    }

    /// Check that the content store answers `/health`.
    pub async fn ping(&self) -> Result<(), CoreError> {
        let health = self.inner.client.health().await?;
        debug!(status = %health.status, "content store health");
        Ok(())
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Initial load of every section, concurrently. The contact inbox is
    /// only fetched in admin mode.
    pub async fn mount(&self) {
        info!(url = %self.inner.config.api_url, admin = self.is_admin(), "mounting sections");
        let inner = &self.inner;
        futures_util::join!(
            inner.about.load(),
            inner.stats.load(),
            inner.social_links.load(),
            inner.experiences.load(),
            inner.projects.load(),
            inner.skill_categories.load(),
            async {
                if self.is_admin() {
                    inner.contacts.load().await;
                }
            },
        );
    }

    /// Re-read one resource.
    pub async fn refresh(&self, resource: Resource) {
        let inner = &self.inner;
        match resource {
            Resource::About => inner.about.refresh().await,
            Resource::Stats => inner.stats.refresh().await,
            Resource::SocialLinks => inner.social_links.refresh().await,
            Resource::Experiences => inner.experiences.refresh().await,
            Resource::Projects => inner.projects.refresh().await,
            Resource::SkillCategories => inner.skill_categories.refresh().await,
            Resource::Contacts => inner.contacts.refresh().await,
        }
    }

    /// Number of loaded entities, used as the next `order_index`.
    pub fn count(&self, resource: Resource) -> usize {
        let inner = &self.inner;
        match resource {
            Resource::About => inner.about.len(),
            Resource::Stats => inner.stats.len(),
            Resource::SocialLinks => inner.social_links.len(),
            Resource::Experiences => inner.experiences.len(),
            Resource::Projects => inner.projects.len(),
            Resource::SkillCategories => inner.skill_categories.len(),
            Resource::Contacts => inner.contacts.len(),
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Run a mutation, then refresh the affected collection.
    ///
    /// Failures are logged and returned; the collection is left as it was.
    /// After a contact submission the inbox is only refreshed in admin mode.
    pub async fn execute(&self, mutation: Mutation) -> Result<(), CoreError> {
        let resource = mutation.resource();
        debug!(%mutation, "executing");

        if let Err(e) = self.send(&mutation).await {
            warn!(%mutation, error = %e, "mutation failed");
            return Err(e);
        }

        if resource.admin_only() && !self.is_admin() {
            return Ok(());
        }
        self.refresh(resource).await;
        Ok(())
    }

    async fn send(&self, mutation: &Mutation) -> Result<(), CoreError> {
        let client = &self.inner.client;
        match mutation {
            Mutation::CreateAbout(body) => {
                client.create_about(body).await?;
            }
            Mutation::CreateStat(body) => {
                client.create_stat(body).await?;
            }
            Mutation::CreateSocialLink(body) => {
                client.create_social_link(body).await?;
            }
            Mutation::CreateExperience(body) => {
                client.create_experience(body).await?;
            }
            Mutation::CreateProject(body) => {
                client.create_project(body).await?;
            }
            Mutation::CreateSkillCategory(body) => {
                client.create_skill_category(body).await?;
            }
            Mutation::CreateSkill(body) => {
                client.create_skill(body).await?;
            }
            Mutation::CreateContact(body) => {
                client.create_contact(body).await?;
            }
            Mutation::Delete { target, id } => {
                let id = id.get();
                match target {
                    DeleteTarget::About => client.delete_about(id).await?,
                    DeleteTarget::Stat => client.delete_stat(id).await?,
                    DeleteTarget::SocialLink => client.delete_social_link(id).await?,
                    DeleteTarget::Experience => client.delete_experience(id).await?,
                    DeleteTarget::Project => client.delete_project(id).await?,
                    DeleteTarget::SkillCategory => client.delete_skill_category(id).await?,
                    DeleteTarget::Skill => client.delete_skill(id).await?,
                    DeleteTarget::Contact => client.delete_contact(id).await?,
                }
            }
        }
        Ok(())
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn about(&self) -> SyncStream<AboutSection> {
        self.inner.about.subscribe()
    }

    pub fn stats(&self) -> SyncStream<Stat> {
        self.inner.stats.subscribe()
    }

    pub fn social_links(&self) -> SyncStream<SocialLink> {
        self.inner.social_links.subscribe()
    }

    pub fn experiences(&self) -> SyncStream<Experience> {
        self.inner.experiences.subscribe()
    }

    pub fn projects(&self) -> SyncStream<Project> {
        self.inner.projects.subscribe()
    }

    pub fn skill_categories(&self) -> SyncStream<SkillCategory> {
        self.inner.skill_categories.subscribe()
    }

    pub fn contacts(&self) -> SyncStream<Contact> {
        self.inner.contacts.subscribe()
    }
}
