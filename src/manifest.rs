use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

#[cfg(target_os = "windows")]
pub const LINE_ENDING: &str = "\r\n";

#[cfg(not(target_os = "windows"))]
pub const LINE_ENDING: &str = "\n";

/// Represents the contents of a `package.json` manifest.
///
/// The root object is kept as an ordered map, so keys this tool never touches
/// survive a load/save round trip unchanged and in their original order.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(transparent)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Loads a `Manifest` from a file path.
    ///
    /// # Errors
    /// Returns an error if the file can't be read, or if its contents are
    /// not a JSON document with an object at the root.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Manifest> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read manifest {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("could not parse manifest {}", path.display()))
    }

    /// Saves the `Manifest` to the given file path, overwriting it in place.
    ///
    /// # Errors
    /// Returns an error if the file can't be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("could not write manifest {}", path.display()))
    }

    /// Serializes the manifest with 4-space indentation and a trailing
    /// platform line ending.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        let mut text = String::from_utf8(buf)?;
        text.push_str(LINE_ENDING);
        Ok(text)
    }

    /// The `dependencies` section, if present and a mapping.
    pub fn dependencies(&self) -> Option<&Map<String, Value>> {
        self.section("dependencies")
    }

    /// The `devDependencies` section, if present and a mapping.
    pub fn dev_dependencies(&self) -> Option<&Map<String, Value>> {
        self.section("devDependencies")
    }

    /// The `resolutions` section, if present and a mapping.
    pub fn resolutions(&self) -> Option<&Map<String, Value>> {
        self.section("resolutions")
    }

    /// Forces `name` to `version` across the manifest.
    ///
    /// Entries already listed under `dependencies` or `devDependencies` are
    /// overwritten; names absent from those sections are not added to them.
    /// The `resolutions` section always records the override and is created
    /// first if the manifest has none.
    pub fn force_version(&mut self, name: &str, version: &str) {
        if let Some(deps) = self.section_mut("dependencies") {
            if let Some(constraint) = deps.get_mut(name) {
                *constraint = Value::String(version.to_string());
            }
        }
        if let Some(deps) = self.section_mut("devDependencies") {
            if let Some(constraint) = deps.get_mut(name) {
                *constraint = Value::String(version.to_string());
            }
        }
        let resolutions = self
            .root
            .entry("resolutions")
            .or_insert_with(|| Value::Object(Map::new()));
        // A non-object `resolutions` value can't record anything; start over.
        if !resolutions.is_object() {
            *resolutions = Value::Object(Map::new());
        }
        if let Value::Object(resolutions) = resolutions {
            resolutions.insert(name.to_string(), Value::String(version.to_string()));
        }
    }

    fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.root.get(key).and_then(Value::as_object)
    }

    fn section_mut(&mut self, key: &str) -> Option<&mut Map<String, Value>> {
        self.root.get_mut(key).and_then(Value::as_object_mut)
    }
}
