pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use folio_config::OwnerConfig;
use ratatui::text::{Line, Span};

use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

/// `#tag` chips separated by spaces.
pub fn tag_line(tags: &[String]) -> Line<'_> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("#{tag}"), theme::tag()));
    }
    Line::from(spans)
}

/// Create all screen components in tab order.
pub fn create_screens(admin: bool, owner: &OwnerConfig) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Hero,
            Box::new(hero::HeroScreen::new(owner.clone(), admin)),
        ),
        (ScreenId::About, Box::new(about::AboutScreen::new(admin))),
        (
            ScreenId::Experience,
            Box::new(experience::ExperienceScreen::new(admin)),
        ),
        (
            ScreenId::Projects,
            Box::new(projects::ProjectsScreen::new(admin)),
        ),
        (ScreenId::Skills, Box::new(skills::SkillsScreen::new(admin))),
        (
            ScreenId::Contact,
            Box::new(contact::ContactScreen::new(owner.clone(), admin)),
        ),
    ]
}
