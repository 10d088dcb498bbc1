use serde::Serialize;

/// A closed chain of "depends on" edges
///
/// The last element repeats the first one: `[a, b, a]` means `a -> b -> a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle(Vec<String>);

impl Cycle {
    /// Closes `path` by appending its first element again.
    ///
    /// Returns `None` for an empty path.
    pub fn closing(path: Vec<String>) -> Option<Self> {
        let first = path.first()?.clone();
        let mut packages = path;
        packages.push(first);
        Some(Self(packages))
    }

    /// Full sequence including the repeated endpoint
    pub fn packages(&self) -> &[String] {
        &self.0
    }

    /// Distinct members of the cycle, i.e. the sequence without its closing element
    pub fn members(&self) -> &[String] {
        &self.0[..self.0.len().saturating_sub(1)]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `from -> to` is one of the edges walked by this cycle
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.0.windows(2).any(|pair| pair[0] == from && pair[1] == to)
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}
