//! Leading YAML frontmatter detection and validation.
//!
//! A document has frontmatter when its first line is exactly `---` and some
//! later line is exactly `---`. The lines in between must parse as YAML.
//! Documents without an opening marker, or with an opening marker but no
//! closing one, are not checked.

/// The line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Return the YAML between the frontmatter delimiters, if the document has any.
///
/// Trailing `\r` is ignored when matching delimiter lines so CRLF documents
/// behave the same as LF ones.
pub fn extract(content: &str) -> Option<String> {
    let mut lines = content.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    if lines.next()? != DELIMITER {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if line == DELIMITER {
            return Some(block.join("\n"));
        }
        block.push(line);
    }

    None
}

/// Check that a document's frontmatter, if present, is well-formed YAML.
///
/// The parsed value is discarded; only success or failure matters.
pub fn validate(content: &str) -> Result<(), serde_yaml::Error> {
    if let Some(yaml) = extract(content) {
        serde_yaml::from_str::<serde_yaml::Value>(&yaml)?;
    }
    Ok(())
}
