use thiserror::Error;

/// An environment variable required by the application is not set, or is blank.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// Values that are empty or whitespace-only are reported as missing too, so a
/// placeholder line like `POLYGON_API_KEY=` in a `.env` file does not count as
/// a configured secret. The value is returned untrimmed.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVarError(name.to_string())),
    }
}

/// Like [`get_env_var`], but treats a missing variable as `None`.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    get_env_var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = get_env_var("SHARED_UTILS_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err,
            MissingEnvVarError("SHARED_UTILS_SURELY_UNSET_VARIABLE".to_string())
        );
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHARED_UTILS_SURELY_UNSET_VARIABLE"
        );
    }

    #[test]
    fn blank_and_present_values() {
        // Each name is only touched by this test.
        unsafe {
            std::env::set_var("SHARED_UTILS_BLANK_VARIABLE", "   ");
            std::env::set_var("SHARED_UTILS_PRESENT_VARIABLE", "abc");
        }
        assert!(get_env_var("SHARED_UTILS_BLANK_VARIABLE").is_err());
        assert_eq!(get_optional_env_var("SHARED_UTILS_BLANK_VARIABLE"), None);
        assert_eq!(get_env_var("SHARED_UTILS_PRESENT_VARIABLE").unwrap(), "abc");
    }
}
