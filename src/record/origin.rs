use serde::{Deserialize, Serialize};

/// Provenance of the source record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Origin {
    /// Permanent link to the record
    pub permalink: String,

    /// Permanent link to the record's API representation
    pub api_permalink: String,

    /// Name of the hosting repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,

    /// URL of the hosting repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,

    /// Preview image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    /// Repository page for this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_repository_url: Option<String>,

    /// Submitting author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// Author of the source record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Author display name
    pub name: String,

    /// Author profile page
    pub profile_url: String,

    /// Author profile API endpoint
    pub profile_api_url: String,
}
