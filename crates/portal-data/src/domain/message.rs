//! Direct Messages and Notifications

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub subject: String,
    /// Markdown body
    pub body: String,
    pub sent_at: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
}

impl_entity!(Message, "message");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub from_id: String,
    pub to_id: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Reminder,
    Alert,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "ℹ️",
            NotificationKind::Reminder => "⏰",
            NotificationKind::Alert => "⚠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub kind: NotificationKind,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
}

impl_entity!(Notification, "notification");
