use crate::shared::error::DepGraphError;
use std::collections::{BTreeMap, BTreeSet};

/// Lookup contract the graph builder consumes
///
/// `dependencies_of` reports unknown names as `DepGraphError::PackageNotFound`;
/// direct callers see that error, the graph builder absorbs it.
pub trait PackageCatalog {
    fn exists(&self, name: &str) -> bool;

    fn dependencies_of(&self, name: &str) -> Result<&BTreeSet<String>, DepGraphError>;
}

/// One package entry of the repository index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    dependencies: BTreeSet<String>,
}

impl PackageRecord {
    pub fn new(name: String) -> Self {
        Self {
            name,
            dependencies: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Union of the `Depends` and `Pre-Depends` names of this package
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    pub(crate) fn add_dependencies(&mut self, names: impl IntoIterator<Item = String>) {
        self.dependencies.extend(names);
    }
}

/// Package name -> record mapping built by the metadata parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: BTreeMap<String, PackageRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` unless it is already known.
    ///
    /// # Returns
    /// `true` when a new record was created
    pub(crate) fn register(&mut self, name: &str) -> bool {
        if self.records.contains_key(name) {
            return false;
        }
        self.records
            .insert(name.to_string(), PackageRecord::new(name.to_string()));
        true
    }

    pub(crate) fn record_mut(&mut self, name: &str) -> Option<&mut PackageRecord> {
        self.records.get_mut(name)
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(name)
    }

    /// Package names in lexicographic order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PackageCatalog for Catalog {
    fn exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    fn dependencies_of(&self, name: &str) -> Result<&BTreeSet<String>, DepGraphError> {
        self.records
            .get(name)
            .map(PackageRecord::dependencies)
            .ok_or_else(|| DepGraphError::PackageNotFound {
                name: name.to_string(),
            })
    }
}

impl<'a> FromIterator<(&'a str, &'a [&'a str])> for Catalog {
    /// Builds a catalog directly from `(name, dependencies)` pairs.
    ///
    /// Later pairs for an already registered name are ignored, matching the
    /// first-occurrence rule of the metadata parser.
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a [&'a str])>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (name, deps) in iter {
            if catalog.register(name) {
                if let Some(record) = catalog.record_mut(name) {
                    record.add_dependencies(deps.iter().map(|d| d.to_string()));
                }
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let entries: [(&str, &[&str]); 3] = [("A", &["B", "C"]), ("B", &["C"]), ("C", &[])];
        entries.into_iter().collect()
    }

    #[test]
    fn test_exists() {
        let catalog = sample();
        assert!(catalog.exists("A"));
        assert!(catalog.exists("C"));
        assert!(!catalog.exists("D"));
        assert!(!catalog.exists("a"));
    }

    #[test]
    fn test_dependencies_of_known_package() {
        let catalog = sample();
        let deps = catalog.dependencies_of("A").unwrap();
        assert_eq!(
            deps.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["B", "C"]
        );
        assert!(catalog.dependencies_of("C").unwrap().is_empty());
    }

    #[test]
    fn test_dependencies_of_unknown_package_fails() {
        let catalog = sample();
        let err = catalog.dependencies_of("missing").unwrap_err();
        assert_eq!(
            err,
            DepGraphError::PackageNotFound {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_register_first_occurrence_wins() {
        let mut catalog = Catalog::new();
        assert!(catalog.register("pkg"));
        catalog
            .record_mut("pkg")
            .unwrap()
            .add_dependencies(["dep".to_string()]);
        assert!(!catalog.register("pkg"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("pkg").unwrap().dependencies().contains("dep"));
    }

    #[test]
    fn test_package_names_sorted() {
        let entries: [(&str, &[&str]); 3] = [("zlib1g", &[]), ("bash", &[]), ("libc6", &[])];
        let catalog: Catalog = entries.into_iter().collect();
        assert_eq!(
            catalog.package_names().collect::<Vec<_>>(),
            vec!["bash", "libc6", "zlib1g"]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("anything").is_none());
    }
}
