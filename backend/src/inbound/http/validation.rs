//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies deserialise every field as optional so a missing field
//! surfaces as a structured `invalid_request` error naming the field, rather
//! than as a generic deserialisation failure.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyList,
    DuplicateItem,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyList => "empty_list",
            ErrorCode::DuplicateItem => "duplicate_item",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn missing_entry_field_error(field: FieldName, index: usize) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_index(ErrorCode::MissingField, index)
}

pub(crate) fn empty_list_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must contain at least one entry"))
        .with_code(ErrorCode::EmptyList)
}

pub(crate) fn duplicate_item_error(field: FieldName, item_id: i32) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("item {item_id} is listed more than once"))
        .with_code(ErrorCode::DuplicateItem)
}

/// Treat blank strings as absent and return the present value.
pub(crate) fn required_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing_field_error(field)),
    }
}

/// Return the present value or a missing-field error.
pub(crate) fn required<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    const NAME: FieldName = FieldName::new("name");

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn required_text_rejects_absent_values(#[case] value: Option<String>) {
        let error = required_text(value, NAME).expect_err("missing");
        assert_eq!(error.message(), "missing required field: name");
        let details = error.details().expect("details present");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("name"));
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("missing_field")
        );
    }

    #[rstest]
    fn required_text_keeps_value_verbatim() {
        let value = required_text(Some(" Pizza ".to_owned()), NAME).expect("present");
        assert_eq!(value, " Pizza ");
    }

    #[rstest]
    fn entry_errors_carry_index() {
        let error = missing_entry_field_error(FieldName::new("item_count"), 2);
        let details = error.details().expect("details present");
        assert_eq!(details.get("index").and_then(Value::as_u64), Some(2));
    }
}
