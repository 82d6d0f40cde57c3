//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Assigned by the store on first save, `null` until then
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Build an unsaved book (no id yet)
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}
