//! Reading and rewriting the npm package manifest.
//!
//! Only the `version` field is ever written. Key order, indentation, line
//! endings and the trailing newline of the original file are kept so the
//! release commit shows a one-line diff.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{json, Value};

use crate::error::{PublishError, Result};

pub const MANIFEST_FILE: &str = "package.json";
pub const LOCKFILE: &str = "package-lock.json";

/// Name and current version of the package being published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

/// Reads `name` and `version` from `package.json` in `root`.
pub fn read_package_info(root: &Path) -> Result<PackageInfo> {
    let path = root.join(MANIFEST_FILE);
    let contents = fs::read_to_string(&path)
        .map_err(|e| PublishError::manifest(format!("cannot read {}: {}", path.display(), e)))?;
    let doc: Value = serde_json::from_str(&contents)?;

    let field = |key: &str| {
        doc.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                PublishError::manifest(format!("{} has no string \"{}\"", path.display(), key))
            })
    };

    Ok(PackageInfo {
        name: field("name")?,
        version: field("version")?,
    })
}

/// Sets the version in `package.json` and, when present, `package-lock.json`.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The files that were rewritten, manifest first
/// * `Err` - If the manifest is missing, is not a JSON object, or cannot be written
pub fn write_version(root: &Path, version: &str) -> Result<Vec<PathBuf>> {
    let manifest = root.join(MANIFEST_FILE);
    update_json_file(&manifest, |doc| {
        let object = doc
            .as_object_mut()
            .ok_or_else(|| PublishError::manifest("package.json is not a JSON object"))?;
        object.insert("version".to_string(), json!(version));
        Ok(())
    })?;
    let mut updated = vec![manifest];

    let lockfile = root.join(LOCKFILE);
    if lockfile.exists() {
        update_json_file(&lockfile, |doc| {
            if let Some(v) = doc.get_mut("version") {
                *v = json!(version);
            }
            if let Some(v) = doc
                .get_mut("packages")
                .and_then(|packages| packages.get_mut(""))
                .and_then(|root_pkg| root_pkg.get_mut("version"))
            {
                *v = json!(version);
            }
            Ok(())
        })?;
        updated.push(lockfile);
    }

    for path in &updated {
        log::debug!("set version {} in {}", version, path.display());
    }

    Ok(updated)
}

fn update_json_file<F>(path: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&mut Value) -> Result<()>,
{
    let contents = fs::read_to_string(path)
        .map_err(|e| PublishError::manifest(format!("cannot read {}: {}", path.display(), e)))?;
    let mut doc: Value = serde_json::from_str(&contents)?;

    edit(&mut doc)?;

    let indent = detect_indent(&contents);
    let mut out = Vec::with_capacity(contents.len() + 8);
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    doc.serialize(&mut serializer)?;
    if contents.ends_with('\n') {
        out.push(b'\n');
    }

    // serde_json escapes newlines inside strings, so every raw \n is a line break
    let mut rendered = String::from_utf8_lossy(&out).into_owned();
    if contents.contains("\r\n") {
        rendered = rendered.replace('\n', "\r\n");
    }

    fs::write(path, rendered)
        .map_err(|e| PublishError::manifest(format!("cannot write {}: {}", path.display(), e)))
}

/// Leading whitespace of the first indented line, two spaces if there is none.
fn detect_indent(contents: &str) -> String {
    contents
        .lines()
        .find_map(|line| {
            let trimmed = line.trim_start_matches([' ', '\t']);
            let width = line.len() - trimmed.len();
            (width > 0 && !trimmed.is_empty()).then(|| line[..width].to_string())
        })
        .unwrap_or_else(|| "  ".to_string())
}
