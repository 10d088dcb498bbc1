use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `:any`, `:armhf`, `:native` ...
static ARCH_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\w+").expect("architecture qualifier regex is valid"));

/// `(>= 1.0)`, `(<< 2:3.4~)` ...
static VERSION_CONSTRAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("version constraint regex is valid"));

/// DependencyExpressionParser turns one `Depends`-style field value into bare package names
///
/// Every alternative of `a | b` is kept: the resulting edge set over-approximates
/// what an installer would pick. Fragments without a usable token are dropped.
pub struct DependencyExpressionParser;

impl DependencyExpressionParser {
    /// Parses a logical field value (continuation lines already joined)
    ///
    /// # Examples
    /// ```
    /// use apt_depgraph::dependency_analysis::services::DependencyExpressionParser;
    ///
    /// let names = DependencyExpressionParser::parse("foo (>= 1.0) | bar:any, baz");
    /// let names: Vec<&str> = names.iter().map(String::as_str).collect();
    /// assert_eq!(names, vec!["bar", "baz", "foo"]);
    /// ```
    pub fn parse(expression: &str) -> BTreeSet<String> {
        if expression.trim().is_empty() {
            return BTreeSet::new();
        }

        let stripped = ARCH_QUALIFIER.replace_all(expression, "");

        stripped
            .split(',')
            .flat_map(|requirement| requirement.split('|'))
            .filter_map(Self::package_name)
            .collect()
    }

    /// Extracts the package name of a single alternative
    fn package_name(alternative: &str) -> Option<String> {
        let without_version = VERSION_CONSTRAINT.replacen(alternative, 1, "");
        without_version
            .split_whitespace()
            .next()
            .map(str::to_string)
    }
}
