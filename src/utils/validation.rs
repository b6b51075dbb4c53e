use crate::utils::error::{AdvisorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(AdvisorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AdvisorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Delimiter and quote must be distinct, visible, single-line characters.
pub fn validate_separators(delimiter: char, quote: char) -> Result<()> {
    for (field, ch) in [("delimiter", delimiter), ("quote", quote)] {
        if ch.is_whitespace() || ch == '\0' {
            return Err(AdvisorError::InvalidConfigValueError {
                field: field.to_string(),
                value: ch.escape_default().to_string(),
                reason: "Character cannot be whitespace, a line break or NUL".to_string(),
            });
        }
    }

    if delimiter == quote {
        return Err(AdvisorError::InvalidConfigValueError {
            field: "quote".to_string(),
            value: quote.to_string(),
            reason: "Quote character must differ from the delimiter".to_string(),
        });
    }

    Ok(())
}

/// Parses a single-character setting such as `--delimiter ';'`.
pub fn parse_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(AdvisorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected exactly one character".to_string(),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AdvisorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
