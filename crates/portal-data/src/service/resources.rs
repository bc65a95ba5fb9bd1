//! Resource Library

use super::MockBackend;
use crate::domain::*;
use crate::repository::Repository;

impl MockBackend {
    /// All resources, or only those for `subject`
    pub async fn list_resources(&self, subject: Option<&str>) -> DomainResult<Vec<Resource>> {
        self.read_delay().await;
        match subject.map(str::trim).filter(|s| !s.is_empty()) {
            Some(subject) => {
                self.stores()
                    .resources
                    .list_where(&|r: &Resource| r.subject.eq_ignore_ascii_case(subject))
                    .await
            }
            None => self.stores().resources.list().await,
        }
    }

    /// Resources at the child's grade level; empty for an unknown child
    pub async fn resources_for_child(&self, child_id: &str) -> DomainResult<Vec<Resource>> {
        self.read_delay().await;
        let Some(child) = self.stores().children.find_by_id(child_id).await? else {
            return Ok(Vec::new());
        };
        let grade = child.grade.trim();
        self.stores()
            .resources
            .list_where(&|r: &Resource| r.grade_level.trim().eq_ignore_ascii_case(grade))
            .await
    }

    pub async fn resource_by_id(&self, id: &str) -> DomainResult<Resource> {
        self.read_delay().await;
        self.stores()
            .resources
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Resource", id))
    }

    /// Distinct subjects, alphabetical
    pub async fn resource_subjects(&self) -> DomainResult<Vec<String>> {
        self.read_delay().await;
        let mut subjects: Vec<String> = self
            .stores()
            .resources
            .list()
            .await?
            .into_iter()
            .map(|r| r.subject)
            .collect();
        subjects.sort();
        subjects.dedup();
        Ok(subjects)
    }
}
