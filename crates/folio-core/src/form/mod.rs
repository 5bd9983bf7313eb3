// ── Admin create forms ──
//
// Field buffers, presence/email validation, tag parsing, and the
// open/submit/complete lifecycle shared by every section's create form.
// Per-resource field lists and payload builders live in `drafts.rs`.

mod drafts;

use std::marker::PhantomData;

use thiserror::Error;

use crate::model::EntityId;

pub use drafts::{
    AboutDraft, ContactDraft, ExperienceDraft, ProjectDraft, SkillCategoryDraft, SkillDraft,
    SocialLinkDraft, StatDraft,
};

// ── Fields ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Must look like `local@domain` when non-empty.
    Email,
    /// Multi-line free text.
    LongText,
    /// Comma-separated list, see [`parse_tags`].
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{label} is required")]
    Missing { label: &'static str },

    #[error("{label} must be a valid email address")]
    InvalidEmail { label: &'static str },

    #[error("no {parent} selected")]
    MissingParent { parent: &'static str },

    #[error("a submission is already in progress")]
    Busy,
}

/// Split a comma-separated tag field into trimmed, non-empty tags,
/// preserving input order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
}

// ── Draft buffers ───────────────────────────────────────────────────

/// Raw input for a fixed list of fields plus the focused field index.
#[derive(Debug, Clone)]
pub struct DraftValues {
    fields: &'static [FormField],
    values: Vec<String>,
    focus: usize,
}

impl DraftValues {
    pub fn new(fields: &'static [FormField]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
            focus: 0,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        self.fields
    }

    /// Field definitions paired with their current raw input.
    pub fn entries(&self) -> impl Iterator<Item = (&FormField, &str)> {
        self.fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Raw input for `key`, empty when the key is unknown.
    pub fn get(&self, key: &str) -> &str {
        self.index_of(key)
            .and_then(|i| self.values.get(i))
            .map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(slot) = self.index_of(key).and_then(|i| self.values.get_mut(i)) {
            *slot = value.into();
        }
    }

    /// Trimmed input for `key`.
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_owned()
    }

    /// Trimmed input for `key`, `None` when blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|s| !s.is_empty())
    }

    pub fn tags(&self, key: &str) -> Vec<String> {
        parse_tags(self.get(key))
    }

    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = self
                .focus
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.focus) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focus) {
            value.pop();
        }
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.focus = 0;
    }

    /// Presence of required fields and email shape, in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in self.entries() {
            let value = value.trim();
            if field.required && value.is_empty() {
                return Err(FormError::Missing { label: field.label });
            }
            if field.kind == FieldKind::Email && !value.is_empty() && !is_plausible_email(value) {
                return Err(FormError::InvalidEmail { label: field.label });
            }
        }
        Ok(())
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }
}

// ── Drafts ──────────────────────────────────────────────────────────

/// Where a new entity lands: `order_index` is the current count of its
/// siblings, `parent` is the owning entity for nested resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub order_index: i32,
    pub parent: Option<EntityId>,
}

impl Placement {
    /// Append after `count` existing siblings.
    pub fn append(count: usize) -> Self {
        Self {
            order_index: i32::try_from(count).unwrap_or(i32::MAX),
            parent: None,
        }
    }

    pub fn under(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// A resource-specific create form: its fields and how validated input
/// becomes a create payload.
pub trait Draft {
    type Payload;

    const FIELDS: &'static [FormField];
    /// Idle label of the submit control.
    const SUBMIT_LABEL: &'static str;

    fn build(values: &DraftValues, placement: Placement) -> Result<Self::Payload, FormError>;
}

// ── Create form lifecycle ───────────────────────────────────────────

/// Admin create form for one resource.
///
/// `submit` validates and hands back the payload while marking the form
/// in flight; the caller reports the outcome through `complete`.
#[derive(Debug)]
pub struct CreateForm<D: Draft> {
    draft: DraftValues,
    open: bool,
    submitting: bool,
    _draft: PhantomData<D>,
}

impl<D: Draft> Default for CreateForm<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> CreateForm<D> {
    pub fn new() -> Self {
        Self {
            draft: DraftValues::new(D::FIELDS),
            open: false,
            submitting: false,
            _draft: PhantomData,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the form. The draft is kept until a successful submit.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &DraftValues {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftValues {
        &mut self.draft
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Creating..."
        } else {
            D::SUBMIT_LABEL
        }
    }

    /// Validate and build the payload. Rejected while a previous submit is
    /// still in flight.
    pub fn submit(&mut self, placement: Placement) -> Result<D::Payload, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        self.draft.validate()?;
        let payload = D::build(&self.draft, placement)?;
        self.submitting = true;
        Ok(payload)
    }

    /// Record the outcome of the create call. Success clears the draft and
    /// closes the form; failure leaves both untouched.
    pub fn complete(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.draft.clear();
            self.open = false;
        }
    }
}
