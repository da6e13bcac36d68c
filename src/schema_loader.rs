//! JSON Schema loading for the content document.
//!
//! Reads a schema from disk (or from the copy compiled into the binary),
//! extracts the `schema_version` const it pins, and compiles a validator.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled schema plus the document version it accepts.
pub(crate) struct ContentSchema {
    pub schema_version: String,
    compiled: JSONSchema,
}

impl ContentSchema {
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::from_value(&value).with_context(|| format!("compiling schema {}", path.display()))
    }

    pub(crate) fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("parsing bundled schema")?;
        Self::from_value(&value).context("compiling bundled schema")
    }

    fn from_value(value: &Value) -> Result<Self> {
        let schema_version = extract_schema_version(value)
            .ok_or_else(|| anyhow!("schema missing schema_version const"))?;
        // ValidationError borrows the schema, so flatten it to text here.
        let compiled = JSONSchema::compile(value).map_err(|err| anyhow!("{err}"))?;
        Ok(Self {
            schema_version,
            compiled,
        })
    }

    /// Validate `instance`, reporting every violation at once.
    pub(crate) fn validate(&self, instance: &Value, label: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{label} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema
        .pointer(SCHEMA_VERSION_POINTER)
        .and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
