use crate::shared::error::DepGraphError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Characters that belong to dependency-expression syntax and can never be
/// part of a single package name
const RESERVED_CHARS: [char; 4] = [',', '|', '(', ')'];

/// NewType wrapper for a user-supplied package name with validation
///
/// Only the requested root goes through this type. Names read from
/// repository metadata are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        let name = name.trim().to_string();

        if name.is_empty() {
            return Err(invalid("Package name cannot be empty".to_string()));
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        if let Some(ch) = name
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || RESERVED_CHARS.contains(c))
        {
            return Err(invalid(format!(
                "Package name '{}' contains invalid character {:?}. \
                 Whitespace, control characters and ',', '|', '(', ')' are not allowed.",
                name, ch
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(message: String) -> anyhow::Error {
    DepGraphError::Validation { message }.into()
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("libc6".to_string()).unwrap();
        assert_eq!(name.as_str(), "libc6");
    }

    #[test]
    fn test_package_name_allows_debian_punctuation() {
        let name = PackageName::new("libstdc++6".to_string()).unwrap();
        assert_eq!(name.as_str(), "libstdc++6");
        assert!(PackageName::new("python3.11-minimal".to_string()).is_ok());
    }

    #[test]
    fn test_package_name_trims_surrounding_whitespace() {
        let name = PackageName::new("  firefox \n".to_string()).unwrap();
        assert_eq!(name.as_str(), "firefox");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
        assert!(PackageName::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_expression_syntax() {
        let result = PackageName::new("foo | bar".to_string());
        assert!(result.is_err());
        let result = PackageName::new("foo,bar".to_string());
        assert!(result.unwrap_err().to_string().contains("invalid character"));
    }

    #[test]
    fn test_package_name_length_boundary() {
        assert!(PackageName::new("a".repeat(255)).is_ok());
        let result = PackageName::new("a".repeat(256));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("bash".to_string()).unwrap();
        assert_eq!(format!("{}", name), "bash");
    }
}
