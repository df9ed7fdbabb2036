//! Header-block metadata extraction for command documents.
//!
//! A document's metadata is the block between a leading `---` line and the next `---`:
//!
//! ```text
//! ---
//! description: Plan a feature quickly
//! argument-hint: <feature>
//! ---
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DELIMITER: &str = "---";

pub type Metadata = HashMap<String, String>;

/// Parse the header block of `content`. Returns an empty map when there is no complete block.
pub fn extract(content: &str) -> Metadata {
    let mut fields = Metadata::new();

    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return fields;
    };
    let Some(end) = rest.find(DELIMITER) else {
        return fields;
    };

    for line in rest[..end].lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    fields
}

/// Read `path` and parse its header block. Unreadable files yield an empty map.
pub fn extract_file(path: &Path) -> Metadata {
    match fs::read_to_string(path) {
        Ok(content) => extract(&content),
        Err(e) => {
            log_status!("catalog", "Cannot read {}: {}", path.display(), e);
            Metadata::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn extracts_trimmed_fields() {
        let meta = extract("---\ndescription:  Plan fast  \nargument-hint: <task>\n---\nbody");
        assert_eq!(meta.get("description").unwrap(), "Plan fast");
        assert_eq!(meta.get("argument-hint").unwrap(), "<task>");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let meta = extract("---\nusage: run: now\n---\n");
        assert_eq!(meta.get("usage").unwrap(), "run: now");
    }

    #[test]
    fn skips_lines_without_colon() {
        let meta = extract("---\njust text\ndescription: ok\n---\n");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("description").unwrap(), "ok");
    }

    #[test]
    fn requires_leading_delimiter() {
        assert!(extract("\n---\ndescription: late\n---\n").is_empty());
        assert!(extract("# Title\ndescription: no block").is_empty());
    }

    #[test]
    fn unterminated_block_is_empty() {
        assert!(extract("---\ndescription: open\n").is_empty());
    }

    #[test]
    fn extract_file_missing_is_empty() {
        let dir = tempdir().unwrap();
        assert!(extract_file(&dir.path().join("missing.md")).is_empty());
    }

    #[test]
    fn extract_file_invalid_utf8_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0x2d, 0x2d, 0x2d, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();
        assert!(extract_file(&path).is_empty());
    }
}
