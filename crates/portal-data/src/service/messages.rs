//! Messages and Notifications

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

fn newest_messages_first(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
    messages
}

impl MockBackend {
    /// Messages addressed to `user_id`, newest first
    pub async fn inbox(&self, user_id: &str) -> DomainResult<Vec<Message>> {
        self.read_delay().await;
        let list = self.stores().messages.list_where(&|m: &Message| m.to_id == user_id).await?;
        Ok(newest_messages_first(list))
    }

    /// Messages written by `user_id`, newest first
    pub async fn sent(&self, user_id: &str) -> DomainResult<Vec<Message>> {
        self.read_delay().await;
        let list = self.stores().messages.list_where(&|m: &Message| m.from_id == user_id).await?;
        Ok(newest_messages_first(list))
    }

    pub async fn send_message(&self, new_message: &NewMessage) -> DomainResult<Message> {
        self.write_delay().await;
        require_fields(&[
            ("Recipient", &new_message.to_id),
            ("Subject", &new_message.subject),
            ("Message", &new_message.body),
        ])?;
        let sender = self.require_user(&new_message.from_id).await?;
        let recipient = self.require_user(&new_message.to_id).await?;

        let message = Message {
            id: String::new(),
            from_id: sender.id,
            from_name: sender.name,
            to_id: recipient.id,
            subject: new_message.subject.trim().to_string(),
            body: new_message.body.trim().to_string(),
            sent_at: self.now(),
            read: false,
        };
        let created = self.stores().messages.create(&message).await?;
        info!(message_id = %created.id, to = %created.to_id, "message sent");
        Ok(created)
    }

    pub async fn mark_message_read(&self, id: &str) -> DomainResult<Message> {
        self.write_delay().await;
        self.stores().messages.modify(id, |m| {
            m.read = true;
            Ok(())
        })
    }

    pub async fn unread_message_count(&self, user_id: &str) -> DomainResult<usize> {
        self.read_delay().await;
        let unread = self
            .stores()
            .messages
            .list_where(&|m: &Message| m.to_id == user_id && !m.read)
            .await?;
        Ok(unread.len())
    }

    /// Newest first
    pub async fn notifications_for(&self, user_id: &str) -> DomainResult<Vec<Notification>> {
        self.read_delay().await;
        let mut list = self
            .stores()
            .notifications
            .list_where(&|n: &Notification| n.user_id == user_id)
            .await?;
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    pub async fn mark_notification_read(&self, id: &str) -> DomainResult<Notification> {
        self.write_delay().await;
        self.stores().notifications.modify(id, |n| {
            n.read = true;
            Ok(())
        })
    }

    /// Returns how many notifications changed
    pub async fn mark_all_notifications_read(&self, user_id: &str) -> DomainResult<usize> {
        self.write_delay().await;
        self.stores()
            .notifications
            .modify_where(|n| n.user_id == user_id && !n.read, |n| n.read = true)
    }

    pub async fn unread_notification_count(&self, user_id: &str) -> DomainResult<usize> {
        self.read_delay().await;
        let unread = self
            .stores()
            .notifications
            .list_where(&|n: &Notification| n.user_id == user_id && !n.read)
            .await?;
        Ok(unread.len())
    }

    /// Raise a notification as a side effect of another call (no extra delay)
    pub(crate) async fn notify(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) -> DomainResult<Notification> {
        let notification = Notification {
            id: String::new(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            kind,
            created_at: self.now(),
            read: false,
        };
        self.stores().notifications.create(&notification).await
    }
}
