// classifieds/src/form/flow.rs
use serde::Serialize;
use tracing::debug;

use crate::form::form_data::{FormData, FormValue};
use crate::form::validation::{validate, FormErrors};
use crate::locale::LocaleContext;
use crate::models::{AdSubmission, CategoryFieldsResponse};
use crate::registry::FieldConfigRegistry;
use crate::resolver::ResolvedFields;

static UNRESOLVED: ResolvedFields = ResolvedFields::None;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    CategorySelection,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Editing,
    Validating,
    Invalid,
    Submitting,
    Settled,
}

/// Identifies one remote field request. Only the ticket of the latest
/// selection is accepted back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    slug: String,
    generation: u64,
}

impl FetchTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldState {
    NotRequested,
    Loading(FetchTicket),
    Resolved(ResolvedFields),
}

/// State of one post-ad session: the chosen category, its fields, the
/// values typed so far and the errors from the last submit.
#[derive(Debug, Clone)]
pub struct PostAdFlow {
    step: Step,
    phase: FormPhase,
    category: Option<String>,
    generation: u64,
    fields: FieldState,
    form: FormData,
    errors: FormErrors,
}

impl Default for PostAdFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl PostAdFlow {
    pub fn new() -> Self {
        Self {
            step: Step::CategorySelection,
            phase: FormPhase::Idle,
            category: None,
            generation: 0,
            fields: FieldState::NotRequested,
            form: FormData::new(),
            errors: FormErrors::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn fields(&self) -> &FieldState {
        &self.fields
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fields, FieldState::Loading(_))
    }

    /// The resolved fields, or `None` while nothing has resolved yet.
    pub fn resolved(&self) -> &ResolvedFields {
        match &self.fields {
            FieldState::Resolved(resolved) => resolved,
            _ => &UNRESOLVED,
        }
    }

    /// Moves to the form step for `slug` with a blank form. A matching
    /// family resolves immediately; otherwise a ticket for the remote fetch
    /// is returned and the fields stay loading until it completes.
    pub fn select_category(&mut self, registry: &FieldConfigRegistry, slug: &str) -> Option<FetchTicket> {
        self.generation += 1;
        self.step = Step::Form;
        self.phase = FormPhase::Idle;
        self.category = Some(slug.to_string());
        self.form.clear();
        self.errors.clear();

        match registry.resolve_config(slug) {
            Some(config) => {
                self.fields = FieldState::Resolved(ResolvedFields::Config(config));
                None
            }
            None => {
                let ticket = FetchTicket {
                    slug: slug.to_string(),
                    generation: self.generation,
                };
                self.fields = FieldState::Loading(ticket.clone());
                Some(ticket)
            }
        }
    }

    /// Applies a remote response. Returns `false`, leaving state untouched,
    /// when the ticket belongs to a selection that has since been replaced.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, response: &CategoryFieldsResponse) -> bool {
        let current = matches!(&self.fields, FieldState::Loading(pending) if *pending == ticket);
        if !current {
            debug!(
                "Discarding stale field response for '{}' (generation {}, current {})",
                ticket.slug, ticket.generation, self.generation
            );
            return false;
        }
        self.fields = FieldState::Resolved(ResolvedFields::from_remote(response));
        true
    }

    /// Records a value and clears that field's error only.
    pub fn set_field(&mut self, name: &str, value: FormValue) {
        self.form.set(name, value);
        self.errors.remove(name);
        if matches!(self.phase, FormPhase::Idle | FormPhase::Invalid | FormPhase::Settled) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Applies every value of a posted form.
    pub fn set_form(&mut self, form: FormData) {
        for (name, value) in form.iter() {
            self.set_field(name, value.clone());
        }
    }

    /// Validates the form. On success the flow enters `Submitting` and the
    /// submission to send is returned; on failure the errors are kept and
    /// the flow is `Invalid`. A second submit while one is in flight, or a
    /// submit outside the form step, is ignored.
    pub fn submit(&mut self, ctx: &LocaleContext) -> Option<AdSubmission> {
        if self.step != Step::Form || self.phase == FormPhase::Submitting {
            return None;
        }
        let slug = self.category.clone()?;

        self.phase = FormPhase::Validating;
        self.errors = validate(&self.form, self.resolved(), ctx);
        if !self.errors.is_empty() {
            debug!("Post-ad form for '{}' has {} errors", slug, self.errors.len());
            self.phase = FormPhase::Invalid;
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(AdSubmission::new(&slug, self.form.to_json_map()))
    }

    /// Completes a submission and returns to category selection.
    pub fn finish_submission(&mut self) {
        self.reset();
        self.phase = FormPhase::Settled;
    }

    /// Leaves the form. Any fetch still in flight becomes stale.
    pub fn back_to_categories(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.step = Step::CategorySelection;
        self.phase = FormPhase::Idle;
        self.category = None;
        self.fields = FieldState::NotRequested;
        self.form.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::FieldSource;
    use serde_json::json;

    fn registry() -> FieldConfigRegistry {
        FieldConfigRegistry::builtin()
    }

    fn response(name: &str) -> CategoryFieldsResponse {
        serde_json::from_value(json!({
            "data": { "1": [{ "id": 1, "name": name, "label": name, "type": "text" }] }
        }))
        .unwrap()
    }

    #[test]
    fn test_config_category_resolves_without_ticket() {
        let mut flow = PostAdFlow::new();
        assert!(flow.select_category(&registry(), "apartments-villas-for-sale").is_none());
        assert_eq!(flow.step(), Step::Form);
        assert_eq!(flow.resolved().source(), FieldSource::Config);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut flow = PostAdFlow::new();
        let first = flow.select_category(&registry(), "jobs").unwrap();
        let second = flow.select_category(&registry(), "pets").unwrap();

        assert!(!flow.complete_fetch(first, &response("salary")));
        assert!(flow.is_loading());

        assert!(flow.complete_fetch(second, &response("breed")));
        assert_eq!(flow.resolved().main_fields()[0].name(), "breed");
    }

    #[test]
    fn test_late_response_cannot_replace_config_fields() {
        let mut flow = PostAdFlow::new();
        let ticket = flow.select_category(&registry(), "jobs").unwrap();
        flow.select_category(&registry(), "cars-for-sale");

        assert!(!flow.complete_fetch(ticket, &response("salary")));
        assert_eq!(flow.resolved().source(), FieldSource::Config);
    }

    #[test]
    fn test_response_after_back_is_discarded() {
        let mut flow = PostAdFlow::new();
        let ticket = flow.select_category(&registry(), "jobs").unwrap();
        flow.back_to_categories();

        assert!(!flow.complete_fetch(ticket, &response("salary")));
        assert_eq!(flow.fields(), &FieldState::NotRequested);
        assert_eq!(flow.step(), Step::CategorySelection);
    }

    #[test]
    fn test_change_clears_exactly_one_error() {
        let mut flow = PostAdFlow::new();
        flow.select_category(&registry(), "cars");
        assert!(flow.submit(&LocaleContext::default()).is_none());
        assert_eq!(flow.phase(), FormPhase::Invalid);
        let before = flow.errors().len();
        assert!(flow.errors().contains("make"));

        flow.set_field("make", FormValue::Text("toyota".into()));
        assert_eq!(flow.errors().len(), before - 1);
        assert!(!flow.errors().contains("make"));
        assert!(flow.errors().contains("title"));
        assert_eq!(flow.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_successful_submit_then_settle() {
        let mut flow = PostAdFlow::new();
        flow.select_category(&registry(), "jobs");
        flow.set_field("title", FormValue::Text("Senior accountant wanted".into()));
        flow.set_field("description", FormValue::Text("Full time position in a Beirut office".into()));

        let submission = flow.submit(&LocaleContext::default()).unwrap();
        assert_eq!(submission.category_slug, "jobs");
        assert_eq!(flow.phase(), FormPhase::Submitting);
        assert!(flow.submit(&LocaleContext::default()).is_none());

        flow.finish_submission();
        assert_eq!(flow.phase(), FormPhase::Settled);
        assert_eq!(flow.step(), Step::CategorySelection);
        assert!(flow.form().is_empty());
    }

    #[test]
    fn test_selection_resets_form() {
        let mut flow = PostAdFlow::new();
        flow.select_category(&registry(), "cars");
        flow.set_field("make", FormValue::Text("bmw".into()));
        flow.select_category(&registry(), "motorcycles");
        assert!(flow.form().is_empty());
        assert!(flow.errors().is_empty());
    }
}
