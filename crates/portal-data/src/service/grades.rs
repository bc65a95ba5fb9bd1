//! Gradebook

use std::collections::BTreeMap;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

/// Mean percentage per subject, sorted by subject name
pub fn subject_averages(grades: &[Grade]) -> Vec<SubjectAverage> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for grade in grades {
        let entry = totals.entry(grade.subject.as_str()).or_insert((0.0, 0));
        entry.0 += grade.percentage();
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(subject, (sum, count))| SubjectAverage {
            subject: subject.to_string(),
            average: sum / count as f64,
            count,
        })
        .collect()
}

/// Mean percentage across all grades, `None` when there are none
pub fn overall_average(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    Some(grades.iter().map(Grade::percentage).sum::<f64>() / grades.len() as f64)
}

impl MockBackend {
    /// Newest first
    pub async fn grades_for_student(&self, student_id: &str) -> DomainResult<Vec<Grade>> {
        self.read_delay().await;
        let mut grades = self.stores().grades.list_where(&|g: &Grade| g.student_id == student_id).await?;
        grades.sort_by(|a, b| b.recorded_on.cmp(&a.recorded_on));
        Ok(grades)
    }

    pub async fn grades_for_child(&self, child_id: &str) -> DomainResult<Vec<Grade>> {
        self.grades_for_student(child_id).await
    }

    pub async fn subject_averages(&self, student_id: &str) -> DomainResult<Vec<SubjectAverage>> {
        let grades = self.grades_for_student(student_id).await?;
        Ok(subject_averages(&grades))
    }

    pub async fn record_grade(&self, new_grade: &NewGrade) -> DomainResult<Grade> {
        self.write_delay().await;
        require_fields(&[
            ("Student", &new_grade.student_id),
            ("Subject", &new_grade.subject),
            ("Assessment", &new_grade.assessment),
        ])?;
        if new_grade.max_score == 0 || new_grade.score > new_grade.max_score {
            return Err(DomainError::InvalidInput(format!(
                "score {}/{} is out of range",
                new_grade.score, new_grade.max_score
            )));
        }
        let grade = Grade {
            id: String::new(),
            student_id: new_grade.student_id.clone(),
            subject: new_grade.subject.trim().to_string(),
            assessment: new_grade.assessment.trim().to_string(),
            score: new_grade.score,
            max_score: new_grade.max_score,
            recorded_on: new_grade.recorded_on.unwrap_or_else(|| self.today()),
        };
        self.stores().grades.create(&grade).await
    }
}
