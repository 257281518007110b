use super::VectorRecord;

/// What a caller sees of a matched record: no score, no raw vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<VectorRecord> for Recommendation {
    fn from(record: VectorRecord) -> Self {
        Self {
            name: record.metadata_str("name").map(String::from),
            description: record.metadata_str("description").map(String::from),
            id: record.id,
        }
    }
}
