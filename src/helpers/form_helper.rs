// classifieds/src/helpers/form_helper.rs
use convert_case::{Case, Casing};
use serde::Serialize;

use crate::configs::category_fields::{basic_info_fields, contact_fields, location_fields, media_fields};
use crate::form::{FieldState, FormData, FormErrors, PostAdFlow};
use crate::locale::LocaleContext;
use crate::models::{CategoryField, CustomField, FieldKind, FieldTable, RemoteFieldKind};
use crate::resolver::{FieldSource, ResolvedField, ResolvedFields};

/// The HTML input a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Number,
    Select,
    Radio,
    Checkbox,
    Textarea,
}

impl From<FieldKind> for InputKind {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => InputKind::Text,
            FieldKind::Number => InputKind::Number,
            FieldKind::Select => InputKind::Select,
            FieldKind::Checkbox => InputKind::Checkbox,
            FieldKind::Textarea => InputKind::Textarea,
        }
    }
}

/// Remote fields render as text, number, select, radio or textarea.
/// Every other kind is skipped.
pub fn remote_input_kind(kind: RemoteFieldKind) -> Option<InputKind> {
    match kind {
        RemoteFieldKind::Text => Some(InputKind::Text),
        RemoteFieldKind::Number => Some(InputKind::Number),
        RemoteFieldKind::Select => Some(InputKind::Select),
        RemoteFieldKind::Radio => Some(InputKind::Radio),
        RemoteFieldKind::Textarea => Some(InputKind::Textarea),
        RemoteFieldKind::Multiselect
        | RemoteFieldKind::Checkbox
        | RemoteFieldKind::Date
        | RemoteFieldKind::Unknown => None,
    }
}

pub fn input_kind(field: &ResolvedField) -> Option<InputKind> {
    match field {
        ResolvedField::Config(field) => Some(field.kind.into()),
        ResolvedField::Api(field) => remote_input_kind(field.kind),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Checked(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputConstraints {
    None,
    Bounds { min: Option<f64>, max: Option<f64> },
    Options { options: Vec<ChoiceView> },
}

/// Everything a template needs to draw one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputContract {
    pub key: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: InputKind,
    pub value: InputValue,
    pub constraints: InputConstraints,
    pub required: bool,
    pub error: Option<String>,
}

fn bind_value(kind: InputKind, name: &str, form: &FormData) -> InputValue {
    match kind {
        InputKind::Checkbox => InputValue::Checked(form.is_truthy(name)),
        _ => InputValue::Text(form.get(name).map(|v| v.to_string()).unwrap_or_default()),
    }
}

/// Renders a configured field with labels, placeholder and option labels in
/// the context's language.
pub fn render_custom_field(
    field: &CustomField,
    ctx: &LocaleContext,
    form: &FormData,
    errors: &FormErrors,
) -> InputContract {
    let kind = InputKind::from(field.kind);
    let constraints = match field.kind {
        FieldKind::Select => InputConstraints::Options {
            options: field
                .options
                .iter()
                .map(|option| ChoiceView {
                    value: option.value.clone(),
                    label: option.localized_label(ctx.locale).to_string(),
                })
                .collect(),
        },
        FieldKind::Number => InputConstraints::Bounds {
            min: field.min,
            max: field.max,
        },
        _ => InputConstraints::None,
    };

    InputContract {
        key: field.name.clone(),
        label: field.localized_label(ctx.locale).to_string(),
        placeholder: field.localized_placeholder(ctx.locale).map(str::to_string),
        kind,
        value: bind_value(kind, &field.name, form),
        constraints,
        required: field.required,
        error: errors.get(&field.name).map(str::to_string),
    }
}

/// Renders a remote field as served. Remote fields carry a single language,
/// so the locale plays no part here.
pub fn render_api_field(field: &CategoryField, form: &FormData, errors: &FormErrors) -> Option<InputContract> {
    let kind = remote_input_kind(field.kind)?;
    let constraints = match kind {
        InputKind::Select | InputKind::Radio => InputConstraints::Options {
            options: field
                .choices
                .iter()
                .map(|choice| ChoiceView {
                    value: choice.value.clone(),
                    label: choice.label.clone(),
                })
                .collect(),
        },
        InputKind::Number => InputConstraints::Bounds {
            min: field.min,
            max: field.max,
        },
        _ => InputConstraints::None,
    };
    let label = if field.label.trim().is_empty() {
        field.name.to_case(Case::Title)
    } else {
        field.label.clone()
    };

    Some(InputContract {
        key: field.name.clone(),
        label,
        placeholder: field.placeholder.clone(),
        kind,
        value: bind_value(kind, &field.name, form),
        constraints,
        required: field.required,
        error: errors.get(&field.name).map(str::to_string),
    })
}

pub fn render_field(
    field: &ResolvedField,
    ctx: &LocaleContext,
    form: &FormData,
    errors: &FormErrors,
) -> Option<InputContract> {
    match field {
        ResolvedField::Config(field) => Some(render_custom_field(field, ctx, form, errors)),
        ResolvedField::Api(field) => render_api_field(field, form, errors),
    }
}

/// Names and input kinds of every field a post for `resolved` may carry.
pub fn field_bindings(resolved: &ResolvedFields) -> Vec<(String, InputKind)> {
    let fixed = basic_info_fields()
        .into_iter()
        .chain(media_fields())
        .chain(location_fields())
        .chain(contact_fields())
        .map(|field| (field.name, InputKind::from(field.kind)));

    let category: Vec<(String, InputKind)> = match resolved {
        ResolvedFields::Config(config) => config
            .all_fields()
            .map(|field| (field.name.clone(), InputKind::from(field.kind)))
            .collect(),
        ResolvedFields::Api(fields) => fields
            .iter()
            .filter_map(|field| remote_input_kind(field.kind).map(|kind| (field.name.clone(), kind)))
            .collect(),
        ResolvedFields::None => Vec::new(),
    };

    fixed.chain(category).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub title: String,
    pub fields: Vec<InputContract>,
}

fn custom_section(title: &str, fields: &[CustomField], ctx: &LocaleContext, flow: &PostAdFlow) -> SectionView {
    SectionView {
        title: title.to_string(),
        fields: fields
            .iter()
            .map(|field| render_custom_field(field, ctx, flow.form(), flow.errors()))
            .collect(),
    }
}

fn table_section(table: &FieldTable, ctx: &LocaleContext, flow: &PostAdFlow) -> SectionView {
    custom_section(table.localized_title(ctx.locale), &table.fields, ctx, flow)
}

/// The post-ad form, section by section.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub source: FieldSource,
    pub loading: bool,
    pub basic: SectionView,
    pub media: SectionView,
    pub category: Option<SectionView>,
    pub tables: Vec<SectionView>,
    pub location: SectionView,
    pub contact: SectionView,
}

pub fn build_form_view(flow: &PostAdFlow, ctx: &LocaleContext) -> FormView {
    let resolved = flow.resolved();
    let text = ctx.text;

    let category_fields: Vec<InputContract> = resolved
        .main_fields()
        .iter()
        .filter_map(|field| render_field(field, ctx, flow.form(), flow.errors()))
        .collect();
    let category = (!category_fields.is_empty()).then(|| SectionView {
        title: text.additional_details.to_string(),
        fields: category_fields,
    });

    let tables: Vec<SectionView> = resolved
        .config()
        .map(|config| {
            config
                .details_table
                .iter()
                .chain(config.amenities_table.iter())
                .map(|table| table_section(table, ctx, flow))
                .collect()
        })
        .unwrap_or_default();

    FormView {
        source: resolved.source(),
        loading: matches!(flow.fields(), FieldState::Loading(_)),
        basic: custom_section(text.basic_info, &basic_info_fields(), ctx, flow),
        media: custom_section(text.add_video, &media_fields(), ctx, flow),
        category,
        tables,
        location: custom_section(text.location, &location_fields(), ctx, flow),
        contact: custom_section(text.contact_info, &contact_fields(), ctx, flow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValue;
    use crate::locale::Locale;
    use crate::models::FieldOption;
    use crate::registry::FieldConfigRegistry;
    use serde_json::json;

    fn condition() -> CustomField {
        CustomField::new("condition", "Condition", "الحالة", FieldKind::Select)
            .required()
            .options(vec![
                FieldOption::new("new", "New", "جديد"),
                FieldOption::new("used", "Used", "مستعمل"),
            ])
    }

    fn remote(kind: &str) -> CategoryField {
        serde_json::from_value(json!({
            "id": 7, "name": "storage_size", "label": "Storage", "type": kind,
            "choices": [
                { "id": 1, "label": "128 GB", "value": "128" },
                { "id": 2, "label": "64 GB", "value": "64" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_custom_field_renders_in_arabic() {
        let ctx = LocaleContext::new(Locale::Ar);
        let contract = render_custom_field(&condition(), &ctx, &FormData::new(), &FormErrors::new());

        assert_eq!(contract.label, "الحالة");
        assert_eq!(
            contract.constraints,
            InputConstraints::Options {
                options: vec![
                    ChoiceView { value: "new".into(), label: "جديد".into() },
                    ChoiceView { value: "used".into(), label: "مستعمل".into() },
                ]
            }
        );
        assert!(contract.required);
    }

    #[test]
    fn test_remote_field_ignores_locale() {
        let field = ResolvedField::Api(remote("select"));
        let en = render_field(&field, &LocaleContext::new(Locale::En), &FormData::new(), &FormErrors::new());
        let ar = render_field(&field, &LocaleContext::new(Locale::Ar), &FormData::new(), &FormErrors::new());

        assert_eq!(en, ar);
        let contract = en.unwrap();
        assert_eq!(contract.label, "Storage");
        match contract.constraints {
            InputConstraints::Options { options } => {
                assert_eq!(options[0].value, "128");
                assert_eq!(options[1].value, "64");
            }
            other => panic!("unexpected constraints {:?}", other),
        }
    }

    #[test]
    fn test_only_supported_remote_kinds_render() {
        for kind in ["multiselect", "checkbox", "date", "range"] {
            assert!(
                render_api_field(&remote(kind), &FormData::new(), &FormErrors::new()).is_none(),
                "{} should be skipped",
                kind
            );
        }
        let radio = render_api_field(&remote("radio"), &FormData::new(), &FormErrors::new()).unwrap();
        assert_eq!(radio.kind, InputKind::Radio);
        let textarea = render_api_field(&remote("textarea"), &FormData::new(), &FormErrors::new()).unwrap();
        assert_eq!(textarea.constraints, InputConstraints::None);
    }

    #[test]
    fn test_bindings_skip_unrendered_remote_fields() {
        let fields = vec![remote("text"), remote("checkbox")];
        let bindings = field_bindings(&ResolvedFields::Api(fields));
        assert_eq!(bindings.iter().filter(|(name, _)| name == "storage_size").count(), 1);
        assert!(bindings.contains(&("videoUrl".to_string(), InputKind::Text)));
    }

    #[test]
    fn test_blank_remote_label_falls_back_to_name() {
        let mut field = remote("text");
        field.label = String::new();
        let contract = render_api_field(&field, &FormData::new(), &FormErrors::new()).unwrap();
        assert_eq!(contract.label, "Storage Size");
    }

    #[test]
    fn test_checkbox_defaults_to_unchecked() {
        let field = CustomField::new("parking", "Parking", "موقف سيارات", FieldKind::Checkbox);
        let contract = render_custom_field(&field, &LocaleContext::default(), &FormData::new(), &FormErrors::new());
        assert_eq!(contract.value, InputValue::Checked(false));
        assert_eq!(serde_json::to_value(&contract.value).unwrap(), json!(false));
    }

    #[test]
    fn test_value_and_error_are_bound() {
        let mut form = FormData::new();
        form.set("condition", FormValue::Text("used".into()));
        let mut errors = FormErrors::new();
        errors.insert("condition", "Condition is required".into());

        let contract = render_custom_field(&condition(), &LocaleContext::default(), &form, &errors);
        assert_eq!(contract.value, InputValue::Text("used".into()));
        assert_eq!(contract.error.as_deref(), Some("Condition is required"));
    }

    #[test]
    fn test_constraints_serialize_with_type_tag() {
        let bounds = InputConstraints::Bounds { min: Some(0.0), max: None };
        assert_eq!(serde_json::to_value(bounds).unwrap(), json!({ "type": "bounds", "min": 0.0, "max": null }));
    }

    #[test]
    fn test_form_view_for_property_family() {
        let mut flow = PostAdFlow::new();
        flow.select_category(&FieldConfigRegistry::builtin(), "apartments-villas-for-rent");
        let view = build_form_view(&flow, &LocaleContext::new(Locale::Ar));

        assert_eq!(view.source, FieldSource::Config);
        assert!(!view.loading);
        assert_eq!(view.category.unwrap().fields[0].key, "size");
        assert_eq!(view.tables.len(), 1);
        assert_eq!(view.tables[0].fields.len(), 16);
    }

    #[test]
    fn test_form_view_while_loading() {
        let mut flow = PostAdFlow::new();
        flow.select_category(&FieldConfigRegistry::builtin(), "jobs");
        let view = build_form_view(&flow, &LocaleContext::default());

        assert!(view.loading);
        assert!(view.category.is_none());
        assert_eq!(view.basic.fields[0].key, "title");
        assert_eq!(view.media.fields[0].key, "videoUrl");
    }

    #[test]
    fn test_bindings_cover_family_tables() {
        let registry = FieldConfigRegistry::builtin();
        let resolved = ResolvedFields::Config(registry.resolve_config("cars").unwrap());
        let bindings = field_bindings(&resolved);
        assert!(bindings.contains(&("color".to_string(), InputKind::Select)));
        assert!(bindings.contains(&("showPhone".to_string(), InputKind::Checkbox)));
    }
}
