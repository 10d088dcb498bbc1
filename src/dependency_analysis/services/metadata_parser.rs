use super::DependencyExpressionParser;
use crate::dependency_analysis::domain::Catalog;

const PACKAGE_FIELD: &str = "Package";
const DEPENDENCY_FIELDS: [&str; 2] = ["Depends", "Pre-Depends"];

/// MetadataParser builds a Catalog from a Debian-style `Packages` index
///
/// Blocks are separated by blank lines, fields start at column zero as
/// `Key: value`, and indented lines continue the previous field. Only
/// `Package`, `Depends` and `Pre-Depends` are interpreted.
pub struct MetadataParser;

/// Which record dependency fields of the current block belong to
enum Context {
    /// No `Package` field seen in this block yet
    Unset,
    /// Dependencies go to this freshly created record
    Record(String),
    /// Repeated declaration: the first record wins, dependencies are discarded
    Shadowed,
}

/// Parser state while scanning lines
struct ScanState {
    catalog: Catalog,
    context: Context,
    field: Option<(String, String)>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            context: Context::Unset,
            field: None,
        }
    }

    fn start_field(&mut self, key: &str, value: &str) {
        self.flush_field();
        self.field = Some((key.to_string(), value.trim().to_string()));
    }

    fn continue_field(&mut self, line: &str) {
        if let Some((_, value)) = self.field.as_mut() {
            let continuation = line.trim();
            if continuation.is_empty() {
                return;
            }
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(continuation);
        }
    }

    fn end_block(&mut self) {
        self.flush_field();
        self.context = Context::Unset;
    }

    fn flush_field(&mut self) {
        let Some((key, value)) = self.field.take() else {
            return;
        };

        if key == PACKAGE_FIELD {
            let name = value.trim();
            if name.is_empty() {
                return;
            }
            self.context = if self.catalog.register(name) {
                Context::Record(name.to_string())
            } else {
                Context::Shadowed
            };
        } else if DEPENDENCY_FIELDS.contains(&key.as_str()) {
            if let Context::Record(name) = &self.context {
                let names = DependencyExpressionParser::parse(&value);
                if let Some(record) = self.catalog.record_mut(name) {
                    record.add_dependencies(names);
                }
            }
        }
    }

    fn finish(mut self) -> Catalog {
        self.flush_field();
        self.catalog
    }
}

impl MetadataParser {
    /// Parses the full index text
    ///
    /// Never fails: unparseable lines are skipped.
    pub fn parse(metadata: &str) -> Catalog {
        let mut state = ScanState::new();

        for line in metadata.lines() {
            if line.trim().is_empty() {
                state.end_block();
            } else if line.starts_with(|c: char| c.is_whitespace()) {
                state.continue_field(line);
            } else if let Some((key, value)) = line.split_once(':') {
                state.start_field(key.trim(), value);
            } else {
                // Not a field and not a continuation
                state.flush_field();
            }
        }

        state.finish()
    }
}
