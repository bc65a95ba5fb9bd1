//! Repository Tests
//!
//! Exercises InMemoryRepository through the Repository trait.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Resource, ResourceKind};
    use crate::repository::{InMemoryRepository, Repository};

    fn resource(id: &str, subject: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {}", id),
            subject: subject.to_string(),
            kind: ResourceKind::Document,
            url: "https://example.test".to_string(),
            description: String::new(),
            grade_level: "Grade 7".to_string(),
        }
    }

    fn setup() -> InMemoryRepository<Resource> {
        InMemoryRepository::seeded(
            "Resource",
            vec![resource("resource-1", "Maths"), resource("resource-2", "Science")],
        )
    }

    #[tokio::test]
    async fn test_create_mints_unused_id() {
        let repo = setup();
        let created = repo.create(&resource("", "History")).await.expect("create");
        assert_eq!(created.id, "resource-3");
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = setup();
        let err = repo.create(&resource("resource-1", "Maths")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_update_delete() {
        let repo = setup();
        let mut found = repo.find_by_id("resource-2").await.unwrap().expect("present");
        found.title = "Cells".to_string();
        repo.update(&found).await.expect("update");
        assert_eq!(repo.find_by_id("resource-2").await.unwrap().unwrap().title, "Cells");

        repo.delete("resource-2").await.expect("delete");
        assert!(repo.find_by_id("resource-2").await.unwrap().is_none());
        assert_eq!(
            repo.delete("resource-2").await.unwrap_err(),
            DomainError::not_found("Resource", "resource-2")
        );
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = setup();
        let err = repo.update(&resource("resource-99", "Art")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_where_keeps_order() {
        let repo = setup();
        repo.create(&resource("", "Maths")).await.unwrap();
        let maths = repo.list_where(&|r: &Resource| r.subject == "Maths").await.unwrap();
        let ids: Vec<_> = maths.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["resource-1", "resource-3"]);
    }

    #[test]
    fn test_modify_where_counts_changes() {
        let repo = setup();
        let changed = repo
            .modify_where(|r| r.subject == "Science", |r| r.grade_level = "Grade 8".into())
            .unwrap();
        assert_eq!(changed, 1);
    }
}
