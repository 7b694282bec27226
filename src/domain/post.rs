use crate::domain::{ContentRecord, lenient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: String,
    // null for posts the importer found no SEO metadata for
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub seo_title: Option<String>,
}

impl ContentRecord for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}
