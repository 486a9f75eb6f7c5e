use serde::{Deserialize, Serialize};

/// One row of the conversation catalog (`index.json`).
///
/// `index` is the 1-based conversation number shown in the menu and used for
/// selection; it is unique within one index file. `uuid` serializes as
/// `null` when absent so split archives stay readable by older tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub index: usize,
    pub name: String,
    pub filename: String,
    #[serde(default)]
    pub uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_uuid() {
        let json = r#"{"index":1,"name":"Hi There","filename":"001_Hi_There.json","uuid":"abc-123"}"#;
        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.index, 1);
        assert_eq!(entry.name, "Hi There");
        assert_eq!(entry.filename, "001_Hi_There.json");
        assert_eq!(entry.uuid.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_deserialize_null_uuid() {
        let json = r#"{"index":2,"name":"Untitled","filename":"002_Untitled.json","uuid":null}"#;
        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.uuid, None);
    }

    #[test]
    fn test_deserialize_missing_uuid() {
        let json = r#"{"index":3,"name":"x","filename":"003_x.json"}"#;
        let entry: IndexEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.uuid, None);
    }

    #[test]
    fn test_serialize_absent_uuid_as_null() {
        let entry = IndexEntry {
            index: 2,
            name: "Untitled".to_string(),
            filename: "002_Untitled.json".to_string(),
            uuid: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""uuid":null"#));
    }
}
