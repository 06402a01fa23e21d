use crate::utils::error::{LookupError, Result};

pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LookupError::InvalidName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Fido").is_ok());
        assert!(validate_name("").is_err());
        // Names are not trimmed; whitespace-only input reaches the repository.
        assert!(validate_name("   ").is_ok());
    }

    #[test]
    fn test_validate_name_error_message() {
        let err = validate_name("").unwrap_err();
        assert_eq!(err.to_string(), "Name must not be null or empty");
    }
}
