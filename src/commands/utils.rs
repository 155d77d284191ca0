use crate::error::CliError;
use crate::error::Result;

pub fn validate_page(page: &str) -> Result<()> {
    if page.trim().is_empty() {
        return Err(CliError::InvalidArguments(
            "Page key cannot be empty".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_key_name(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CliError::InvalidArguments(
            "Key name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_page_rejects_blank() {
        assert!(validate_page("cart").is_ok());
        assert!(validate_page("").is_err());
        assert!(validate_page("  ").is_err());
    }

    #[test]
    fn validate_key_name_accepts_space_key() {
        assert!(validate_key_name(" ").is_ok());
        assert!(validate_key_name("").is_err());
    }
}
