//! Data bridge: connects [`Portfolio`] streams to TUI actions.
//!
//! Runs as a background task. Subscribes to every collection, pushes the
//! initial snapshots, then mounts the portfolio while forwarding each
//! published snapshot (including the intermediate `Loading` ones) as an
//! [`Action`].

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use folio_core::Portfolio;

use crate::action::Action;

pub async fn spawn_data_bridge(
    portfolio: Portfolio,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut about = portfolio.about();
    let mut stats = portfolio.stats();
    let mut social_links = portfolio.social_links();
    let mut experiences = portfolio.experiences();
    let mut projects = portfolio.projects();
    let mut skill_categories = portfolio.skill_categories();
    let mut contacts = portfolio.contacts();

    let _ = action_tx.send(Action::AboutUpdated(about.current().clone()));
    let _ = action_tx.send(Action::StatsUpdated(stats.current().clone()));
    let _ = action_tx.send(Action::SocialLinksUpdated(social_links.current().clone()));
    let _ = action_tx.send(Action::ExperiencesUpdated(experiences.current().clone()));
    let _ = action_tx.send(Action::ProjectsUpdated(projects.current().clone()));
    let _ = action_tx.send(Action::SkillCategoriesUpdated(skill_categories.current().clone()));
    let _ = action_tx.send(Action::ContactsUpdated(contacts.current().clone()));

    // Reachability only feeds the status bar; sections still mount and show
    // their own errors when the store is down.
    let ping = portfolio.ping();
    let mount = portfolio.mount();
    tokio::pin!(ping, mount);
    let (mut pinged, mut mounted) = (false, false);

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            result = &mut ping, if !pinged => {
                pinged = true;
                match result {
                    Ok(()) => {
                        let _ = action_tx.send(Action::Connected);
                    }
                    Err(e) => {
                        warn!(error = %e, "content store health check failed");
                        let _ = action_tx.send(Action::Unreachable(e.user_message()));
                    }
                }
            }

            () = &mut mount, if !mounted => {
                mounted = true;
                info!("all sections mounted");
            }

            Some(s) = about.changed() => {
                let _ = action_tx.send(Action::AboutUpdated(s));
            }
            Some(s) = stats.changed() => {
                let _ = action_tx.send(Action::StatsUpdated(s));
            }
            Some(s) = social_links.changed() => {
                let _ = action_tx.send(Action::SocialLinksUpdated(s));
            }
            Some(s) = experiences.changed() => {
                let _ = action_tx.send(Action::ExperiencesUpdated(s));
            }
            Some(s) = projects.changed() => {
                let _ = action_tx.send(Action::ProjectsUpdated(s));
            }
            Some(s) = skill_categories.changed() => {
                debug!(categories = s.len(), "dispatching SkillCategoriesUpdated");
                let _ = action_tx.send(Action::SkillCategoriesUpdated(s));
            }
            Some(s) = contacts.changed() => {
                let _ = action_tx.send(Action::ContactsUpdated(s));
            }
        }
    }

    debug!("data bridge shut down");
}
