//! Generator configuration.

/// Fully qualified name of the marker attribute type.
///
/// A method is selected only if one of its attributes resolves to this type;
/// matching is semantic, never by written name alone.
pub const MARKER_ATTRIBUTE: &str = "Commands.CmdAttribute";

/// Boilerplate attribute lines carried by every generated stub, in emission
/// order. The downstream dispatcher consumes exactly these.
pub const STUB_ATTRIBUTES: &[&str] = &["Command", "Description", "Aliases"];

/// File extension of generated units.
pub const GENERATED_EXTENSION: &str = "cs";

/// Options for one generator instance.
///
/// Defaults are the fixed values the downstream dispatcher expects; tests
/// and embedding hosts may rebind them.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Fully qualified name the marker attribute must resolve to.
    pub marker_attribute: String,
    /// Attribute names emitted above every generated stub.
    pub stub_attributes: Vec<String>,
    /// Extension for generated unit names.
    pub extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            marker_attribute: MARKER_ATTRIBUTE.to_string(),
            stub_attributes: STUB_ATTRIBUTES.iter().map(ToString::to_string).collect(),
            extension: GENERATED_EXTENSION.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Override the marker attribute.
    pub fn with_marker_attribute(mut self, fqn: impl Into<String>) -> Self {
        self.marker_attribute = fqn.into();
        self
    }

    /// Override the generated-unit extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.marker_attribute, MARKER_ATTRIBUTE);
        assert_eq!(options.stub_attributes.len(), 3);
        assert_eq!(options.extension, "cs");
    }

    #[test]
    fn test_overrides() {
        let options = GeneratorOptions::default()
            .with_marker_attribute("My.Marker")
            .with_extension("txt");
        assert_eq!(options.marker_attribute, "My.Marker");
        assert_eq!(options.extension, "txt");
    }
}
