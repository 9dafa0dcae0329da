//! Input validation for list parameters and create payloads.
//!
//! Every check runs and every violation is reported, so a client sees all
//! problems with a request at once.

use serde::Serialize;

use crate::pokemon::model::NewPokemon;

pub const NAME_MAX_CHARS: usize = 50;
pub const MAX_TYPES: usize = 2;
pub const LIST_LIMIT_DEFAULT: i64 = 20;
pub const LIST_LIMIT_MAX: i64 = 100;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the value came from: `query`, `path` or `body`.
    pub location: &'static str,
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        location: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Parse raw `limit` and `offset` query values, then range-check them.
///
/// Missing values take their defaults. A value that is not an integer is
/// reported under its own field name, alongside any range violation of the
/// other field.
pub fn parse_list_params(
    limit: Option<&str>,
    offset: Option<&str>,
) -> Result<(i64, i64), Vec<FieldError>> {
    let mut errors = Vec::new();

    let limit = parse_query_int("limit", limit, LIST_LIMIT_DEFAULT, &mut errors);
    let offset = parse_query_int("offset", offset, 0, &mut errors);

    if let Err(range_errors) = validate_list_params(
        limit.unwrap_or(LIST_LIMIT_DEFAULT),
        offset.unwrap_or(0),
    ) {
        errors.extend(
            range_errors
                .into_iter()
                .filter(|e| match e.field.as_str() {
                    "limit" => limit.is_some(),
                    _ => offset.is_some(),
                }),
        );
    }

    // Parameter order, not check order.
    errors.sort_by_key(|e| e.field != "limit");
    finish(errors)?;

    Ok((limit.unwrap_or(LIST_LIMIT_DEFAULT), offset.unwrap_or(0)))
}

fn parse_query_int(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    match raw {
        None => Some(default),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(FieldError::new("query", field, "must be an integer"));
                None
            }
        },
    }
}

/// Check `limit` in [1, 100] and `offset` >= 0.
pub fn validate_list_params(limit: i64, offset: i64) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !(1..=LIST_LIMIT_MAX).contains(&limit) {
        errors.push(FieldError::new(
            "query",
            "limit",
            format!("must be between 1 and {LIST_LIMIT_MAX}"),
        ));
    }
    if offset < 0 {
        errors.push(FieldError::new("query", "offset", "must be greater than or equal to 0"));
    }

    finish(errors)
}

/// Check a create payload against the record constraints.
pub fn validate_new_pokemon(payload: &NewPokemon) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let name_chars = payload.name.chars().count();
    if name_chars == 0 || name_chars > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "body",
            "name",
            format!("must be between 1 and {NAME_MAX_CHARS} characters"),
        ));
    }
    if payload.height <= 0 {
        errors.push(FieldError::new("body", "height", "must be greater than 0"));
    }
    if payload.weight <= 0 {
        errors.push(FieldError::new("body", "weight", "must be greater than 0"));
    }
    if payload.types.is_empty() || payload.types.len() > MAX_TYPES {
        errors.push(FieldError::new(
            "body",
            "types",
            format!("must contain between 1 and {MAX_TYPES} items"),
        ));
    }
    if matches!(payload.base_experience, Some(exp) if exp < 0) {
        errors.push(FieldError::new(
            "body",
            "base_experience",
            "must be greater than or equal to 0",
        ));
    }

    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
