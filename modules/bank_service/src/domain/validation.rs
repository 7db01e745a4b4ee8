//! Field validation for bank input

use crate::contract::{BankDraft, BankError, BankInput, Catalog, FieldViolation};

pub const CODE_MAX_CHARS: usize = 20;
pub const NAME_MAX_CHARS: usize = 200;
pub const COUNTRY_MAX_CHARS: usize = 100;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check a required text field: present, not blank, at most `max` characters.
fn check_required(
    catalog: Catalog,
    field: &str,
    value: Option<&str>,
    max: usize,
    required_message: &str,
    out: &mut Vec<FieldViolation>,
) {
    match value {
        None => out.push(FieldViolation::new(field, required_message)),
        Some(v) if is_blank(v) => out.push(FieldViolation::new(field, required_message)),
        Some(v) if char_len(v) > max => {
            out.push(FieldViolation::new(field, catalog.size_message(1, max)))
        }
        Some(_) => {}
    }
}

/// Validate a draft and return every violation, in field order
///
/// A blank required field reports only the "required" message.
/// Lengths are counted in characters, not bytes.
pub fn validate(catalog: Catalog, draft: &BankDraft) -> Vec<FieldViolation> {
    let fields = catalog.field_names();
    let mut violations = Vec::new();

    check_required(
        catalog,
        fields.code,
        draft.code.as_deref(),
        CODE_MAX_CHARS,
        catalog.code_required_message(),
        &mut violations,
    );
    check_required(
        catalog,
        fields.name,
        draft.name.as_deref(),
        NAME_MAX_CHARS,
        catalog.name_required_message(),
        &mut violations,
    );

    if let Some(country) = draft.country.as_deref() {
        if char_len(country) > COUNTRY_MAX_CHARS {
            violations.push(FieldViolation::new(
                fields.country,
                catalog.size_message(0, COUNTRY_MAX_CHARS),
            ));
        }
    }

    violations
}

/// Validate a draft and build the input value the service accepts
pub fn into_input(catalog: Catalog, draft: BankDraft) -> Result<BankInput, BankError> {
    let violations = validate(catalog, &draft);
    if !violations.is_empty() {
        return Err(BankError::Validation {
            catalog,
            violations,
        });
    }

    match (draft.code, draft.name) {
        (Some(code), Some(name)) => Ok(BankInput {
            code,
            name,
            country: draft.country,
            active: draft.active.unwrap_or(true),
        }),
        _ => Err(BankError::Internal),
    }
}

/// Recover violations from a summary message produced by [`BankError`]'s `Display`
///
/// Used by remote clients that only see the error body. Segments that do not
/// look like `field: message` are kept whole with an empty field name.
pub fn parse_violations(catalog: Catalog, message: &str) -> Vec<FieldViolation> {
    let summary = message
        .strip_prefix(catalog.validation_prefix())
        .unwrap_or(message);

    summary
        .split("; ")
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(": ") {
            Some((field, msg)) => FieldViolation::new(field, msg),
            None => FieldViolation::new("", segment),
        })
        .collect()
}
