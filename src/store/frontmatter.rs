//! YAML front-matter parsing.
//!
//! A document carries front-matter when its first line is `---` and a later
//! line closes the block with `---`. Only the `tags` (or `tag`) key matters
//! here.

use serde_yaml::Value;
use tracing::warn;

/// Returns the raw YAML between the opening and closing `---` lines.
pub fn split_front_matter(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            return Some(&text[start..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parses tag values out of a YAML front-matter block.
///
/// `tags` may be a list or a single string; strings are split on commas and
/// whitespace. Non-string scalars in a list are kept in their YAML text form.
///
/// # Errors
///
/// Returns the YAML error if the block is not valid YAML.
pub fn parse_tags(yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(yaml)?;
    let Some(mapping) = value.as_mapping() else {
        return Ok(Vec::new());
    };

    let tags = mapping
        .get("tags")
        .or_else(|| mapping.get("tag"))
        .cloned()
        .unwrap_or(Value::Null);

    Ok(match tags {
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => split_tag_string(&s),
        other => scalar_to_string(&other).into_iter().collect(),
    })
}

/// Extracts front-matter tags from a whole document.
///
/// Returns `None` when there is no front-matter or it has no tags. Invalid
/// YAML is logged and treated as having no tags.
pub fn front_matter_tags(text: &str) -> Option<Vec<String>> {
    let yaml = split_front_matter(text)?;
    match parse_tags(yaml) {
        Ok(tags) if !tags.is_empty() => Some(tags),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "ignoring unparseable front-matter");
            None
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
    .filter(|s| !s.is_empty())
}

fn split_tag_string(s: &str) -> Vec<String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
