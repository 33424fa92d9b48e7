use super::ValidationError;
use std::fmt;

/// Opaque key naming a Figma file (the `:key` in `figma.com/file/:key/...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey(String);

impl FileKey {
    /// Parse a file key, rejecting absent, empty and whitespace-only input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ValidationError::MissingFileKey);
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty list of node identifiers such as `1:2` or `I12:3;4:5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIds(Vec<String>);

impl NodeIds {
    /// Validates that the list is non-empty and that no entry is blank.
    pub fn new<S: AsRef<str>>(ids: &[S]) -> Result<Self, ValidationError> {
        if ids.is_empty() || ids.iter().any(|id| id.as_ref().trim().is_empty()) {
            return Err(ValidationError::MissingNodeIds);
        }
        Ok(Self(
            ids.iter().map(|id| id.as_ref().trim().to_string()).collect(),
        ))
    }

    /// Splits a comma-separated `ids` query value. An absent or empty value
    /// yields an empty list, which callers then reject through [`NodeIds::new`].
    pub fn split_query(raw: Option<&str>) -> Vec<String> {
        match raw {
            Some(value) if !value.is_empty() => value.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The ids joined for the `ids=` query parameter.
    pub fn to_query_value(&self) -> String {
        self.0.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_key_parsing() {
        let key = FileKey::parse("abc123XYZ").unwrap();
        assert_eq!(key.as_str(), "abc123XYZ");

        let key = FileKey::parse("  padded  ").unwrap();
        assert_eq!(key.as_str(), "padded");
    }

    #[test]
    fn test_missing_file_keys() {
        assert_eq!(FileKey::parse(""), Err(ValidationError::MissingFileKey));
        assert_eq!(FileKey::parse("   "), Err(ValidationError::MissingFileKey));
        assert_eq!(
            ValidationError::MissingFileKey.to_string(),
            "File key is required"
        );
    }

    #[test]
    fn test_node_ids_validation() {
        let empty: [&str; 0] = [];
        assert_eq!(NodeIds::new(&empty), Err(ValidationError::MissingNodeIds));
        assert_eq!(NodeIds::new(&[""]), Err(ValidationError::MissingNodeIds));
        assert_eq!(
            NodeIds::new(&["1:1", ""]),
            Err(ValidationError::MissingNodeIds)
        );

        let ids = NodeIds::new(&["1:1", "2:2"]).unwrap();
        assert_eq!(ids.as_slice(), ["1:1", "2:2"]);
        assert_eq!(ids.to_query_value(), "1:1,2:2");
    }

    #[test]
    fn test_split_query() {
        assert!(NodeIds::split_query(None).is_empty());
        assert!(NodeIds::split_query(Some("")).is_empty());
        assert_eq!(NodeIds::split_query(Some("1:1,2:2")), vec!["1:1", "2:2"]);
        // A trailing comma leaves an empty entry that validation rejects.
        let ids = NodeIds::split_query(Some("1:1,"));
        assert_eq!(NodeIds::new(&ids), Err(ValidationError::MissingNodeIds));
    }
}
