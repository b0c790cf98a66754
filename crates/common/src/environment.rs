use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing::debug;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a value is successfully retrieved from either environment variable;
/// returns [Result::Err()] otherwise.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).with_context(|| {
            format!(
                "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
                name, name, e
            )
        })?,
    };
    Ok(value.trim().to_string())
}

/// Like [get_env_var], but a variable that is set in neither form yields [Option::None].
/// A `_FILE` variable pointing at an unreadable file is still an error.
pub fn get_optional_env_var(name: &str) -> Result<Option<String>> {
    if let Ok(s) = env::var(name) {
        return Ok(Some(s.trim().to_string()));
    }
    match env::var(format!("{}_FILE", name)) {
        Ok(_) => Ok(Some(get_env_var(name)?)),
        Err(_) => {
            debug!("{} is not set; falling back to its default.", name);
            Ok(None)
        }
    }
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}.", path))
}

pub mod variables {
    pub use crate::environment_variables::*;
}

#[cfg(test)]
mod tests {
    use crate::environment::{get_env_var, get_optional_env_var};
    use std::env;
    use std::io::Write;

    // Each test uses its own variable names; the process environment is shared between threads.

    #[test]
    fn get_env_var_trims_value_from_environment() {
        // Arrange
        env::set_var("ARRCLONE_TEST_DIRECT", "  some-value \n");

        // Act
        let actual = get_env_var("ARRCLONE_TEST_DIRECT");

        // Assert
        assert_eq!("some-value", actual.unwrap());
    }

    #[test]
    fn get_env_var_reads_value_from_file_variable() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-from-file").unwrap();
        env::set_var("ARRCLONE_TEST_SECRET_FILE", file.path());

        // Act
        let actual = get_env_var("ARRCLONE_TEST_SECRET");

        // Assert
        assert_eq!("secret-from-file", actual.unwrap());
    }

    #[test]
    fn get_env_var_returns_error_given_missing_variable() {
        // Act
        let actual = get_env_var("ARRCLONE_TEST_DEFINITELY_MISSING");

        // Assert
        assert!(actual.is_err());
    }

    #[test]
    fn get_optional_env_var_returns_none_given_missing_variable() {
        // Act
        let actual = get_optional_env_var("ARRCLONE_TEST_OPTIONAL_MISSING");

        // Assert
        assert!(actual.unwrap().is_none());
    }

    #[test]
    fn get_optional_env_var_returns_error_given_unreadable_file() {
        // Arrange
        env::set_var(
            "ARRCLONE_TEST_BROKEN_FILE",
            "/definitely/not/a/real/path/for/arrclone",
        );

        // Act
        let actual = get_optional_env_var("ARRCLONE_TEST_BROKEN");

        // Assert
        assert!(actual.is_err());
    }
}
