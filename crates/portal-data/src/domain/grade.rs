//! Grade Records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub student_id: String,
    pub subject: String,
    /// Name of the quiz, test or assignment
    pub assessment: String,
    pub score: u32,
    pub max_score: u32,
    pub recorded_on: NaiveDate,
}

impl_entity!(Grade, "grade");

impl Grade {
    pub fn percentage(&self) -> f64 {
        percentage(self.score, self.max_score)
    }

    pub fn letter(&self) -> char {
        letter_for(self.percentage())
    }
}

pub fn percentage(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / f64::from(max_score)
}

/// A >= 90, B >= 80, C >= 70, D >= 60, otherwise F
pub fn letter_for(percentage: f64) -> char {
    match percentage {
        p if p >= 90.0 => 'A',
        p if p >= 80.0 => 'B',
        p if p >= 70.0 => 'C',
        p if p >= 60.0 => 'D',
        _ => 'F',
    }
}

/// Mean percentage for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAverage {
    pub subject: String,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGrade {
    pub student_id: String,
    pub subject: String,
    pub assessment: String,
    pub score: u32,
    pub max_score: u32,
    pub recorded_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_boundaries() {
        assert_eq!(letter_for(90.0), 'A');
        assert_eq!(letter_for(89.9), 'B');
        assert_eq!(letter_for(70.0), 'C');
        assert_eq!(letter_for(60.0), 'D');
        assert_eq!(letter_for(12.0), 'F');
    }

    #[test]
    fn test_zero_max_score() {
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(15, 20), 75.0);
    }
}
