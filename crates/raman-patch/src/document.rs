use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{InputError, PatchError};
use crate::path::{PathSegment, TargetPath};

/// How a document is written back to disk.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

/// A JSON input file held in memory with its key order intact.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    root: Value,
}

impl ConfigDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatchError> {
        let path = path.as_ref().to_path_buf();
        let malformed = |source: InputError| PatchError::MalformedInput {
            path: path.clone(),
            source,
        };

        let text = fs::read_to_string(&path).map_err(|e| malformed(e.into()))?;
        let root = serde_json::from_str(&text).map_err(|e| malformed(e.into()))?;
        log::debug!("Loaded document from {}", path.display());

        Ok(Self { path, root })
    }

    pub fn from_value(path: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn get(&self, target: &TargetPath) -> Option<&Value> {
        target
            .segments()
            .iter()
            .try_fold(&self.root, |current, segment| match (segment, current) {
                (PathSegment::Key(key), Value::Object(map)) => map.get(*key),
                (PathSegment::Index(index), Value::Array(items)) => items.get(*index),
                _ => None,
            })
    }

    /// Walks `target` and hands back the value found there.
    ///
    /// Fails with [`PatchError::MissingField`] naming the first segment that
    /// is absent, out of range, or sits below a value of the wrong kind.
    pub fn resolve_mut(&mut self, target: &TargetPath) -> Result<&mut Value, PatchError> {
        let Self { path, root } = self;
        let mut current = root;

        for (depth, segment) in target.segments().iter().enumerate() {
            let next = match (segment, current) {
                (PathSegment::Key(key), Value::Object(map)) => map.get_mut(*key),
                (PathSegment::Index(index), Value::Array(items)) => items.get_mut(*index),
                _ => None,
            };
            current = next.ok_or_else(|| PatchError::MissingField {
                path: path.clone(),
                field: target.prefix(depth + 1).to_string(),
            })?;
        }

        Ok(current)
    }

    /// Typed view of the value at `target`. Unknown keys are ignored.
    pub fn read<T: DeserializeOwned>(&self, target: &TargetPath) -> Result<T, PatchError> {
        let value = self.get(target).ok_or_else(|| self.missing(target.to_string()))?;
        T::deserialize(value).map_err(|_| self.missing(target.to_string()))
    }

    pub fn missing(&self, field: impl Into<String>) -> PatchError {
        PatchError::MissingField {
            path: self.path.clone(),
            field: field.into(),
        }
    }

    pub fn render(&self, style: OutputStyle) -> Result<String, PatchError> {
        let text = match style {
            OutputStyle::Pretty => serde_json::to_string_pretty(&self.root),
            OutputStyle::Compact => serde_json::to_string(&self.root),
        };
        text.map_err(PatchError::Serialize)
    }

    /// Overwrites the file the document was loaded from.
    ///
    /// The write is not atomic: a failure half way leaves a truncated file.
    pub fn save(&self, style: OutputStyle) -> Result<(), PatchError> {
        let mut text = self.render(style)?;
        text.push('\n');
        fs::write(&self.path, text).map_err(|source| PatchError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Wrote document to {}", self.path.display());
        Ok(())
    }
}
