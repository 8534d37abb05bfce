use std::fmt::Display;

/// Ordered log of the decisions taken while validating a single identifier.
///
/// The trace is for developers only. It never influences the verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace(Vec<String>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Display) {
        self.0.push(entry.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.iter().any(|entry| entry.contains(needle))
    }

    pub fn into_entries(self) -> Vec<String> {
        self.0
    }
}
