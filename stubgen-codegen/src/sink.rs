//! Output boundary toward the host build.

use eyre::Result;

/// Receives generated units from the registrar.
///
/// The registrar hands over `(name, text)` pairs and treats any error as a
/// per-unit failure: it is reported as a diagnostic and the remaining units
/// are still registered.
pub trait OutputSink {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()>;
}

/// In-memory sink, used by tests and by dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    sources: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered `(name, text)` pairs in registration order.
    pub fn sources(&self) -> &[(String, String)] {
        &self.sources
    }

    /// Look up a registered unit by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }

    /// Consume the sink and return its contents.
    pub fn into_sources(self) -> Vec<(String, String)> {
        self.sources
    }
}

impl OutputSink for MemorySink {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()> {
        self.sources.push((name.to_string(), text.to_string()));
        Ok(())
    }
}
