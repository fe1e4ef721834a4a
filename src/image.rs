//! Image record data model.
//!
//! [`Image`] mirrors one entry of the JSON image list: identity, lineage, sizes and tags.
//! Records are decoded once and only read afterwards.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder tag docker reports for untagged images
pub const NONE_TAG: &str = "<none>:<none>";

/// Number of characters kept by [`truncate_id`]
pub const SHORT_ID_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(
        default,
        rename = "ParentId",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub parent_id: String,
    #[serde(
        default,
        rename = "RepoTags",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub repo_tags: Vec<String>,
    #[serde(default, rename = "VirtualSize")]
    pub virtual_size: u64,
    #[serde(default, rename = "Size")]
    pub size: u64,
    #[serde(default, rename = "Created")]
    pub created: i64,
}

impl Image {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// True when the image carries at least one real tag.
    ///
    /// Only the first entry is inspected: docker emits the sentinel as the sole entry.
    pub fn is_tagged(&self) -> bool {
        self.repo_tags
            .first()
            .is_some_and(|tag| tag.as_str() != NONE_TAG)
    }

    pub fn short_id(&self) -> &str {
        truncate_id(&self.id)
    }

    /// Start-token match against the full id, the short id, or any tag.
    pub fn matches(&self, token: &str) -> bool {
        token == self.id
            || token == self.short_id()
            || self.repo_tags.iter().any(|tag| tag == token)
    }
}

/// Returns the first [`SHORT_ID_LEN`] characters of an identifier.
///
/// Identifiers that are too short are returned whole.
pub fn truncate_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
