use super::ToolKind;

/// Form rejection raised before any scoring work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in the required field `{0}`")]
    MissingField(&'static str),
    #[error("please select at least one {0}")]
    EmptySelection(&'static str),
    #[error("please select different phone models")]
    IdenticalModels,
    #[error("{actual:?} form submitted to the {expected:?} tool")]
    ToolMismatch { expected: ToolKind, actual: ToolKind },
}

/// Trimmed, non-empty text or a missing-field error.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        assert_eq!(
            required_text("model", Some("   ".to_string())),
            Err(ValidationError::MissingField("model"))
        );
        assert_eq!(
            required_text("model", Some(" Galaxy S24 ".to_string())),
            Ok("Galaxy S24".to_string())
        );
        assert_eq!(optional_text(Some(String::new())), None);
    }
}
