//! Sketch location

use std::path::{Path, PathBuf};

use crate::errors::{ArdiError, Result};

/// Extension of the main Arduino source file
pub const SKETCH_EXTENSION: &str = "ino";

/// A sketch directory and its same-named main source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    /// Directory passed to arduino-cli compile/upload
    pub dir: PathBuf,
    /// `<dir>/<name>.ino`
    pub main_file: PathBuf,
}

impl Sketch {
    /// Resolve the command-line sketch argument.
    ///
    /// A bare name (no path separator) is looked up under `sketches_dir`;
    /// anything else is taken as a path with a single trailing separator
    /// removed.
    pub fn resolve(arg: Option<&str>, sketches_dir: &Path) -> Result<Self> {
        let arg = arg.map(str::trim).filter(|a| !a.is_empty());
        let arg = arg.ok_or(ArdiError::MissingSketch)?;

        let dir = if arg.contains(['/', std::path::MAIN_SEPARATOR]) {
            let trimmed = arg
                .strip_suffix('/')
                .or_else(|| arg.strip_suffix(std::path::MAIN_SEPARATOR))
                .unwrap_or(arg);
            PathBuf::from(trimmed)
        } else {
            sketches_dir.join(arg)
        };

        Ok(Self::from_dir(dir))
    }

    /// Build a sketch from its directory
    pub fn from_dir(dir: PathBuf) -> Self {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let main_file = dir.join(format!("{}.{}", name, SKETCH_EXTENSION));
        Self { dir, main_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_resolves_under_sketches_dir() {
        let sketch = Sketch::resolve(Some("blink"), Path::new("sketches")).unwrap();
        assert_eq!(sketch.dir, PathBuf::from("sketches/blink"));
        assert_eq!(sketch.main_file, PathBuf::from("sketches/blink/blink.ino"));
    }

    #[test]
    fn test_path_argument_used_verbatim() {
        let sketch = Sketch::resolve(Some("projects/blink/"), Path::new("sketches")).unwrap();
        assert_eq!(sketch.dir, PathBuf::from("projects/blink"));
        assert_eq!(sketch.main_file, PathBuf::from("projects/blink/blink.ino"));
    }

    #[test]
    fn test_missing_argument() {
        let err = Sketch::resolve(None, Path::new("sketches")).unwrap_err();
        assert!(matches!(err, ArdiError::MissingSketch));

        let err = Sketch::resolve(Some("  "), Path::new("sketches")).unwrap_err();
        assert!(matches!(err, ArdiError::MissingSketch));
    }
}
