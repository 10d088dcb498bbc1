use crate::shared::error::DepGraphError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum length of the filter substring to prevent DoS attacks
const MAX_FILTER_LENGTH: usize = 255;

/// PackageFilter - Excludes packages whose name contains a substring
///
/// Matching is case-insensitive. An empty substring disables the filter.
/// The filter remembers whether it ever matched so callers can warn about a
/// substring that had no effect.
#[derive(Debug)]
pub struct PackageFilter {
    original: String,
    needle: String,
    matched: Cell<bool>,
}

impl PackageFilter {
    /// Creates a new PackageFilter from a raw substring
    ///
    /// Surrounding whitespace is significant: `" dev"` only matches names
    /// containing a space, which never happens for real packages.
    ///
    /// # Errors
    /// - Substring longer than 255 characters
    /// - Substring containing control characters
    pub fn new(substring: &str) -> Result<Self> {
        validate_substring(substring)?;

        Ok(Self {
            original: substring.to_string(),
            needle: substring.to_lowercase(),
            matched: Cell::new(false),
        })
    }

    /// A filter that never matches
    pub fn disabled() -> Self {
        Self {
            original: String::new(),
            needle: String::new(),
            matched: Cell::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// The substring as given by the user
    pub fn substring(&self) -> &str {
        &self.original
    }

    /// Checks if a package name is filtered out
    pub fn matches(&self, package_name: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        let is_match = package_name.to_lowercase().contains(&self.needle);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    /// Whether any name checked so far was filtered out
    pub fn was_matched(&self) -> bool {
        self.matched.get()
    }
}

impl Default for PackageFilter {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Validates a filter substring
fn validate_substring(substring: &str) -> Result<()> {
    let length = substring.chars().count();
    if length > MAX_FILTER_LENGTH {
        return Err(DepGraphError::Validation {
            message: format!(
                "Filter substring is too long ({} chars). Maximum: {} chars",
                length, MAX_FILTER_LENGTH
            ),
        }
        .into());
    }

    if let Some(ch) = substring.chars().find(|c| c.is_control()) {
        return Err(DepGraphError::Validation {
            message: format!(
                "Filter substring contains invalid control character {:?}",
                ch
            ),
        }
        .into());
    }

    Ok(())
}
