//! Learning Resources

use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Document,
    Video,
    Link,
    Worksheet,
}

impl ResourceKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Document => "📄",
            ResourceKind::Video => "🎬",
            ResourceKind::Link => "🔗",
            ResourceKind::Worksheet => "📝",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Document => "Document",
            ResourceKind::Video => "Video",
            ResourceKind::Link => "Link",
            ResourceKind::Worksheet => "Worksheet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub kind: ResourceKind,
    pub url: String,
    /// Markdown description
    pub description: String,
    pub grade_level: String,
}

impl_entity!(Resource, "resource");
