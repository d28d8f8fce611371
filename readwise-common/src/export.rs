use serde::{Deserialize, Deserializer};

use crate::Tag;

/// Body of a `GET /api/v2/export/` response.
///
/// Only the fields the journal entries need are modelled, everything else the
/// export endpoint returns is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<BookEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookEntry {
    pub title: String,

    #[serde(default, deserialize_with = "non_empty")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub source_url: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub summary: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    pub cover_image_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Highlight {
    pub text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,

    #[serde(default, deserialize_with = "non_empty")]
    pub note: Option<String>,
}

impl ExportResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Readwise sends `""` or `null` for fields that were never filled in, both
/// mean "absent" here.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
