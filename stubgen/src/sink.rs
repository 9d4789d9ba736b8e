//! Filesystem-backed output sink.

use std::path::PathBuf;

use eyre::{Context, Result};
use stubgen_codegen::OutputSink;

/// Sink that writes each registered unit as a file in one directory.
///
/// Unit names are flat (`NS.Outer.Inner.g.cs`), so no nested directories are
/// created beyond the root.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputSink for DirectorySink {
    fn add_source(&mut self, name: &str, text: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .wrap_err_with(|| format!("failed to create {}", self.root.display()))?;
        let path = self.root.join(name);
        std::fs::write(&path, text)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_units_into_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = DirectorySink::new(dir.path().join("out"));

        sink.add_source("NS.A.g.cs", "// text\n").expect("write");

        let written =
            std::fs::read_to_string(dir.path().join("out").join("NS.A.g.cs")).expect("read back");
        assert_eq!(written, "// text\n");
    }

    #[test]
    fn test_overwrites_existing_unit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = DirectorySink::new(dir.path());

        sink.add_source("NS.A.g.cs", "first").expect("write");
        sink.add_source("NS.A.g.cs", "second").expect("overwrite");

        let written = std::fs::read_to_string(dir.path().join("NS.A.g.cs")).expect("read back");
        assert_eq!(written, "second");
    }
}
