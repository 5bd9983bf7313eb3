// Per-resource create forms.

use folio_api::models::{
    AboutCreate, ContactCreate, ExperienceCreate, ProjectCreate, SkillCategoryCreate, SkillCreate,
    SocialLinkCreate, StatCreate,
};

use super::{Draft, DraftValues, FieldKind, FormError, FormField, Placement};

pub struct AboutDraft;

impl Draft for AboutDraft {
    type Payload = AboutCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("section", "Section", FieldKind::Text),
        FormField::required("content", "Content", FieldKind::LongText),
    ];
    const SUBMIT_LABEL: &'static str = "Add Paragraph";

    fn build(values: &DraftValues, placement: Placement) -> Result<AboutCreate, FormError> {
        Ok(AboutCreate {
            section: values.text("section"),
            content: values.text("content"),
            order_index: placement.order_index,
        })
    }
}

pub struct StatDraft;

impl Draft for StatDraft {
    type Payload = StatCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("number", "Number", FieldKind::Text),
        FormField::required("label", "Label", FieldKind::Text),
    ];
    const SUBMIT_LABEL: &'static str = "Add Stat";

    fn build(values: &DraftValues, placement: Placement) -> Result<StatCreate, FormError> {
        Ok(StatCreate {
            number: values.text("number"),
            label: values.text("label"),
            order_index: placement.order_index,
        })
    }
}

pub struct SocialLinkDraft;

impl Draft for SocialLinkDraft {
    type Payload = SocialLinkCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("platform", "Platform", FieldKind::Text),
        FormField::required("url", "URL", FieldKind::Text),
        FormField::optional("icon_name", "Icon name", FieldKind::Text),
    ];
    const SUBMIT_LABEL: &'static str = "Add Link";

    fn build(values: &DraftValues, placement: Placement) -> Result<SocialLinkCreate, FormError> {
        Ok(SocialLinkCreate {
            platform: values.text("platform"),
            url: values.text("url"),
            icon_name: values.optional("icon_name"),
            order_index: placement.order_index,
        })
    }
}

pub struct ExperienceDraft;

impl Draft for ExperienceDraft {
    type Payload = ExperienceCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("role", "Role", FieldKind::Text),
        FormField::required("company", "Company", FieldKind::Text),
        FormField::required("period", "Period", FieldKind::Text),
        FormField::optional("start_date", "Start date", FieldKind::Text),
        FormField::optional("end_date", "End date", FieldKind::Text),
        FormField::required("description", "Description", FieldKind::LongText),
        FormField::optional("tags", "Tags (comma separated)", FieldKind::Tags),
    ];
    const SUBMIT_LABEL: &'static str = "Create Experience";

    fn build(values: &DraftValues, placement: Placement) -> Result<ExperienceCreate, FormError> {
        Ok(ExperienceCreate {
            role: values.text("role"),
            company: values.text("company"),
            period: values.text("period"),
            start_date: values.optional("start_date"),
            end_date: values.optional("end_date"),
            description: values.text("description"),
            tags: values.tags("tags"),
            order_index: placement.order_index,
        })
    }
}

pub struct ProjectDraft;

impl Draft for ProjectDraft {
    type Payload = ProjectCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("title", "Title", FieldKind::Text),
        FormField::optional("image", "Image URL", FieldKind::Text),
        FormField::required("description", "Description", FieldKind::LongText),
        FormField::optional("live_url", "Live URL", FieldKind::Text),
        FormField::optional("github_url", "GitHub URL", FieldKind::Text),
        FormField::optional("tags", "Tags (comma separated)", FieldKind::Tags),
    ];
    const SUBMIT_LABEL: &'static str = "Create Project";

    /// Projects created from the admin form are always featured.
    fn build(values: &DraftValues, placement: Placement) -> Result<ProjectCreate, FormError> {
        Ok(ProjectCreate {
            title: values.text("title"),
            description: values.text("description"),
            image: values.optional("image"),
            tags: values.tags("tags"),
            live_url: values.optional("live_url"),
            github_url: values.optional("github_url"),
            featured: "true".into(),
            order_index: placement.order_index,
        })
    }
}

pub struct SkillCategoryDraft;

impl Draft for SkillCategoryDraft {
    type Payload = SkillCategoryCreate;

    const FIELDS: &'static [FormField] =
        &[FormField::required("name", "Category name", FieldKind::Text)];
    const SUBMIT_LABEL: &'static str = "Add Category";

    fn build(values: &DraftValues, placement: Placement) -> Result<SkillCategoryCreate, FormError> {
        Ok(SkillCategoryCreate {
            name: values.text("name"),
            order_index: placement.order_index,
        })
    }
}

/// A skill inside an existing category; `placement.parent` is required.
pub struct SkillDraft;

impl Draft for SkillDraft {
    type Payload = SkillCreate;

    const FIELDS: &'static [FormField] =
        &[FormField::required("name", "Skill name", FieldKind::Text)];
    const SUBMIT_LABEL: &'static str = "Add Skill";

    fn build(values: &DraftValues, placement: Placement) -> Result<SkillCreate, FormError> {
        let category = placement
            .parent
            .ok_or(FormError::MissingParent { parent: "category" })?;
        Ok(SkillCreate {
            name: values.text("name"),
            category_id: category.get(),
            order_index: placement.order_index,
        })
    }
}

/// The public contact form. Not placed; contacts carry no `order_index`.
pub struct ContactDraft;

impl Draft for ContactDraft {
    type Payload = ContactCreate;

    const FIELDS: &'static [FormField] = &[
        FormField::required("name", "Name", FieldKind::Text),
        FormField::required("email", "Email", FieldKind::Email),
        FormField::required("message", "Message", FieldKind::LongText),
    ];
    const SUBMIT_LABEL: &'static str = "Send Message";

    fn build(values: &DraftValues, _placement: Placement) -> Result<ContactCreate, FormError> {
        Ok(ContactCreate {
            name: values.text("name"),
            email: values.text("email"),
            message: values.text("message"),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::CreateForm;
    use crate::model::EntityId;

    #[test]
    fn experience_payload_parses_tags_and_appends() {
        let mut form = CreateForm::<ExperienceDraft>::new();
        let draft = form.draft_mut();
        draft.set("role", "Engineer");
        draft.set("company", " Acme ");
        draft.set("period", "2021 - Present");
        draft.set("description", "Built things");
        draft.set("tags", "react, node.js ,  ");

        let payload = form.submit(Placement::append(3)).unwrap();
        assert_eq!(
            payload,
            ExperienceCreate {
                role: "Engineer".into(),
                company: "Acme".into(),
                period: "2021 - Present".into(),
                start_date: None,
                end_date: None,
                description: "Built things".into(),
                tags: vec!["react".into(), "node.js".into()],
                order_index: 3,
            }
        );
    }

    #[test]
    fn project_payload_is_featured() {
        let mut form = CreateForm::<ProjectDraft>::new();
        form.draft_mut().set("title", "CLI");
        form.draft_mut().set("description", "A tool");
        form.draft_mut().set("live_url", "   ");

        let payload = form.submit(Placement::append(0)).unwrap();
        assert_eq!(payload.featured, "true");
        assert!(payload.live_url.is_none());
        assert!(payload.tags.is_empty());
    }

    #[test]
    fn skill_requires_category() {
        let mut form = CreateForm::<SkillDraft>::new();
        form.draft_mut().set("name", "Rust");
        assert_eq!(
            form.submit(Placement::append(0)).unwrap_err(),
            FormError::MissingParent { parent: "category" }
        );

        let payload = form
            .submit(Placement::append(4).under(EntityId::new(7)))
            .unwrap();
        assert_eq!(payload.category_id, 7);
        assert_eq!(payload.order_index, 4);
    }

    #[test]
    fn contact_email_is_checked() {
        let mut form = CreateForm::<ContactDraft>::new();
        form.draft_mut().set("name", "Ada");
        form.draft_mut().set("email", "not-an-email");
        form.draft_mut().set("message", "Hi");
        assert_eq!(
            form.submit(Placement::default()).unwrap_err(),
            FormError::InvalidEmail { label: "Email" }
        );
    }
}
