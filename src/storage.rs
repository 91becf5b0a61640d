use crate::{
    error::{Error, Result},
    model::{item::Item, Checklist},
};
use serde_json::Value;
use std::{fs, path::Path};

/// The classified shape of an on-disk document.
enum Document {
    /// An array of plain strings, the original storage format. Every name
    /// gets the default priority on upgrade.
    Legacy(Vec<String>),
    /// An array of `{name, priority}` objects, the current format.
    Current(Vec<Item>),
    /// Anything else. Treated as an empty checklist so a damaged file never
    /// blocks usage.
    Unrecognized,
}

fn classify(value: Value) -> Document {
    let Value::Array(elements) = value else {
        return Document::Unrecognized;
    };

    if elements.iter().all(Value::is_string) {
        let names = elements
            .into_iter()
            .filter_map(|element| match element {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect();
        return Document::Legacy(names);
    }

    let items = elements.into_iter().filter_map(item_from_value).collect();
    Document::Current(items)
}

/// Coerces one array element to an item. Strings become `med`-priority items,
/// objects take their `name` and `priority` fields with defaults for anything
/// missing or unrecognized, and other shapes are dropped.
fn item_from_value(value: Value) -> Option<Item> {
    match value {
        Value::String(name) => Some(Item::new(name)),
        Value::Object(mut fields) => {
            let name = match fields.remove("name") {
                Some(Value::String(name)) => name,
                _ => String::new(),
            };
            let priority = fields
                .remove("priority")
                .and_then(|level| serde_json::from_value(level).ok())
                .unwrap_or_default();
            Some(Item { name, priority })
        }
        _ => None,
    }
}

/// Reads the checklist stored at `path`.
///
/// A missing file, contents that aren't valid JSON, or a top level that isn't
/// an array all load as an empty checklist rather than an error.
#[must_use]
pub fn load(path: &Path) -> Checklist {
    let Ok(contents) = fs::read_to_string(path) else {
        return Checklist::default();
    };
    let Ok(value) = serde_json::from_str(&contents) else {
        return Checklist::default();
    };

    match classify(value) {
        Document::Legacy(names) => Checklist::new(names.into_iter().map(Item::new).collect()),
        Document::Current(items) => Checklist::new(items),
        Document::Unrecognized => Checklist::default(),
    }
}

/// Writes the checklist to `path` in the current format, overwriting whatever
/// was there. Always pretty-printed so the file stays hand-editable.
///
/// # Errors
///
/// Returns a save error if the file cannot be written, including when the
/// parent directory does not exist. Directories are never created here.
pub fn save(path: &Path, checklist: &Checklist) -> Result<()> {
    let save_error = |source: std::io::Error| Error::Save {
        path: path.to_path_buf(),
        source,
    };

    let contents =
        serde_json::to_string_pretty(checklist.items()).map_err(|err| save_error(err.into()))?;
    fs::write(path, contents).map_err(save_error)?;
    Ok(())
}
