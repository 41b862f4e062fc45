//! Startup data for the resource store.
//!
//! The store is seeded either from the built-in list below or from a JSON file
//! holding an array of `{ "id", "creator", "text" }` objects. Ids in the file may
//! be strings of digits or plain integers.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::error::ResourceError;
use super::model::Resource;

const DEFAULT_CREATOR: &str = "A Tribe Called Quest";

const DEFAULT_TEXTS: [&str; 5] = [
    "Vo-cab-u-lary's necessary when digging into my library",
    "Well, then grab the microphone and let your words rip",
    "You on point Tip? Yo, all the time, Phife",
    "Back in the days when I was a teenager before I had status and before I had a pager",
    "Talk to Joey, Earl, Kendrick, and Cole, gatekeepers of flow",
];

/// The built-in seed collection.
pub fn default_resources() -> Vec<Resource> {
    DEFAULT_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| Resource {
            id: (i + 1).to_string(),
            creator: Some(DEFAULT_CREATOR.to_string()),
            text: (*text).to_string(),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: SeedId,
    #[serde(default)]
    creator: Option<String>,
    text: String,
}

impl TryFrom<SeedRecord> for Resource {
    type Error = ResourceError;

    fn try_from(record: SeedRecord) -> Result<Self, Self::Error> {
        let id = match record.id {
            SeedId::Number(n) => n.to_string(),
            SeedId::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s,
            SeedId::Text(s) => {
                return Err(ResourceError::invalid_data(format!(
                    "id {s:?} is not a decimal number"
                )));
            }
        };

        Ok(Resource {
            id,
            creator: record.creator,
            text: record.text,
        })
    }
}

/// Parse a JSON array of resources.
pub fn parse_resources(json: &str) -> Result<Vec<Resource>, ResourceError> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(json).map_err(|e| ResourceError::invalid_data(e.to_string()))?;

    records.into_iter().map(Resource::try_from).collect()
}

/// Load the seed collection from a JSON file.
pub async fn load_resources(path: &Path) -> Result<Vec<Resource>, ResourceError> {
    let json = tokio::fs::read_to_string(path).await?;
    let resources = parse_resources(&json)?;
    info!("Loaded {} resources from {}", resources.len(), path.display());
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_resources() {
        let resources = default_resources();
        assert_eq!(resources.len(), 5);
        assert_eq!(resources[0].id, "1");
        assert_eq!(resources[4].id, "5");
        assert!(
            resources
                .iter()
                .all(|r| r.creator.as_deref() == Some("A Tribe Called Quest"))
        );
    }

    #[test]
    fn test_parse_mixed_ids() {
        let json = r#"[
            { "id": "1", "creator": "A", "text": "first" },
            { "id": 2, "text": "second" }
        ]"#;
        let resources = parse_resources(json).unwrap();
        assert_eq!(resources[0].id, "1");
        assert_eq!(resources[1].id, "2");
        assert_eq!(resources[1].creator, None);
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        let json = r#"[{ "id": "abc", "text": "first" }]"#;
        assert!(matches!(
            parse_resources(json),
            Err(ResourceError::InvalidData(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_resources("{ not json").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "10", "creator": "B", "text": "from a file" }}]"#).unwrap();

        let resources = load_resources(file.path()).await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].id, "10");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_resources(Path::new("/nonexistent/resources.json")).await;
        tokio_test::assert_err!(result);
    }
}
