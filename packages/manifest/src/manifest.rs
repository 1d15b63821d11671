use crate::error::ManifestError;
use crate::filesystem::FileSystem;
use crate::result::ManifestResult;
use crate::value::type_name;
use serde_json::{Map, Value};
use std::path::Path;

pub const DEFAULT_MANIFEST_NAME: &str = "uxcore.manifest.json";

/// A component library's export object, as dumped to JSON.
///
/// Member order is the library's own enumeration order and is preserved
/// through loading, so traversal over it is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    exports: Map<String, Value>,
}

impl Manifest {
    pub fn new(exports: Map<String, Value>) -> Self {
        Self { exports }
    }

    /// Wrap an already-parsed JSON value; the root must be an object
    pub fn from_value(value: Value) -> ManifestResult<Self> {
        match value {
            Value::Object(exports) => Ok(Self { exports }),
            other => Err(ManifestError::NotAnObject {
                found: type_name(&other),
            }),
        }
    }

    pub fn from_json_str(source: &str) -> ManifestResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Load a manifest file through the given file system
    pub fn load(path: &Path, fs: &dyn FileSystem) -> ManifestResult<Self> {
        if !fs.exists(path) {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let source = fs.read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Top-level exports in enumeration order
    pub fn exports(&self) -> &Map<String, Value> {
        &self.exports
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}
