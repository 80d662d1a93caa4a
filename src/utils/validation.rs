use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref SLUG_FORMAT: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

pub fn validate_slug_format(slug: &str) -> Result<(), ValidationError> {
    if !SLUG_FORMAT.is_match(slug) {
        let mut error = ValidationError::new("invalid_format");
        error.message = Some(Cow::from(
            "The slug must contain only lowercase letters, numbers and dashes",
        ));

        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        assert!(validate_slug_format("base-schema").is_ok());
        assert!(validate_slug_format("csv-v2-1").is_ok());
    }

    #[test]
    fn rejects_uppercase_and_whitespace() {
        assert!(validate_slug_format("Base Schema").is_err());
    }

    #[test]
    fn rejects_the_empty_string() {
        assert!(validate_slug_format("").is_err());
    }
}
