//! Job posting domain types
//!
//! The backend exposes a job's identifier under one of three field names
//! (`idJobPost`, `jobId`, `id`), sometimes as a number and sometimes as a
//! string. All ingestion goes through [`JobId`] so that one canonical string
//! form is used everywhere; raw heterogeneous records never escape this
//! module.

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical string form of a job posting identifier.
///
/// Comparisons and set membership are always on the string form, so a record
/// carrying `idJobPost: 5` and one carrying `jobId: "5"` refer to the same
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Coerce a raw JSON value into a canonical id.
    ///
    /// Accepts strings and integer numbers; everything else (null, objects,
    /// booleans) is treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// First non-null of the three raw id shapes, coerced to string form.
    pub fn from_raw_fields(
        id_job_post: Option<&Value>,
        job_id: Option<&Value>,
        id: Option<&Value>,
    ) -> Option<Self> {
        [id_job_post, job_id, id]
            .into_iter()
            .flatten()
            .find_map(Self::from_value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid job id: {value}")))
    }
}

/// A job posting as rendered on listing and detail screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "JobPostWire")]
pub struct JobPost {
    #[serde(rename = "idJobPost")]
    pub id: JobId,
    pub title: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    /// Years of experience required; 0 means none.
    pub experience: Option<i32>,
    pub job_type: Option<i32>,
    pub job_type_name: Option<String>,
    pub expire_at: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub benefit: Option<String>,
}

/// Wire shape of a job record before id normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobPostWire {
    id_job_post: Option<Value>,
    job_id: Option<Value>,
    id: Option<Value>,
    #[serde(default)]
    title: String,
    location: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    experience: Option<i32>,
    job_type: Option<i32>,
    job_type_name: Option<String>,
    expire_at: Option<NaiveDateTime>,
    description: Option<String>,
    requirement: Option<String>,
    benefit: Option<String>,
}

impl TryFrom<JobPostWire> for JobPost {
    type Error = String;

    fn try_from(wire: JobPostWire) -> Result<Self, Self::Error> {
        let id = JobId::from_raw_fields(
            wire.id_job_post.as_ref(),
            wire.job_id.as_ref(),
            wire.id.as_ref(),
        )
        .ok_or_else(|| format!("job record '{}' has no usable id", wire.title))?;

        Ok(JobPost {
            id,
            title: wire.title,
            location: wire.location,
            salary_min: wire.salary_min,
            salary_max: wire.salary_max,
            experience: wire.experience,
            job_type: wire.job_type,
            job_type_name: wire.job_type_name,
            expire_at: wire.expire_at,
            description: wire.description,
            requirement: wire.requirement,
            benefit: wire.benefit,
        })
    }
}

/// One selectable job type in the listing-page filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTypeOption {
    pub id: i32,
    pub name: String,
}

/// Distinct filter values extracted from the full job catalog.
///
/// The listing page populates its sidebar from these rather than from a
/// dedicated backend endpoint.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub experiences: Vec<i32>,
    pub job_types: Vec<JobTypeOption>,
}

impl FilterOptions {
    pub fn from_catalog(jobs: &[JobPost]) -> Self {
        let mut locations: Vec<String> = jobs
            .iter()
            .filter_map(|j| j.location.clone())
            .filter(|l| !l.is_empty())
            .collect();
        locations.sort();
        locations.dedup();

        let mut experiences: Vec<i32> = jobs.iter().filter_map(|j| j.experience).collect();
        experiences.sort_unstable();
        experiences.dedup();

        let mut job_types: Vec<JobTypeOption> = Vec::new();
        for job in jobs {
            if let (Some(id), Some(name)) = (job.job_type, job.job_type_name.as_ref()) {
                if !job_types.iter().any(|t| t.id == id) {
                    job_types.push(JobTypeOption {
                        id,
                        name: name.clone(),
                    });
                }
            }
        }
        job_types.sort_by_key(|t| t.id);

        Self {
            locations,
            experiences,
            job_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_number_equals_id_from_string() {
        let a = JobId::from_value(&json!(5)).unwrap();
        let b = JobId::from_value(&json!("5")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "5");
    }

    #[test]
    fn test_first_non_null_raw_field_wins() {
        let id = JobId::from_raw_fields(
            Some(&json!(5)),
            Some(&Value::Null),
            Some(&Value::Null),
        )
        .unwrap();
        assert_eq!(id.as_str(), "5");

        let id = JobId::from_raw_fields(None, Some(&json!(5)), None).unwrap();
        assert_eq!(id.as_str(), "5");

        // idJobPost takes priority over the others
        let id = JobId::from_raw_fields(Some(&json!("7")), Some(&json!(8)), Some(&json!(9)))
            .unwrap();
        assert_eq!(id.as_str(), "7");
    }

    #[test]
    fn test_job_post_normalizes_any_id_shape() {
        let a: JobPost =
            serde_json::from_value(json!({ "idJobPost": 5, "title": "Backend Engineer" }))
                .unwrap();
        let b: JobPost =
            serde_json::from_value(json!({ "jobId": "5", "title": "Backend Engineer" })).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_job_post_without_id_is_an_error() {
        let result: Result<JobPost, _> =
            serde_json::from_value(json!({ "title": "Ghost posting" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_job_id_list_deserializes_mixed_shapes() {
        let ids: Vec<JobId> = serde_json::from_value(json!([1, "2", 3])).unwrap();
        assert_eq!(
            ids,
            vec![JobId::new("1"), JobId::new("2"), JobId::new("3")]
        );
    }

    #[test]
    fn test_filter_options_dedupe_and_sort() {
        let jobs: Vec<JobPost> = serde_json::from_value(json!([
            { "idJobPost": 1, "title": "A", "location": "Hanoi", "experience": 2,
              "jobType": 1, "jobTypeName": "Full-time" },
            { "idJobPost": 2, "title": "B", "location": "Da Nang", "experience": 0,
              "jobType": 2, "jobTypeName": "Part-time" },
            { "idJobPost": 3, "title": "C", "location": "Hanoi", "experience": 2,
              "jobType": 1, "jobTypeName": "Full-time" }
        ]))
        .unwrap();

        let options = FilterOptions::from_catalog(&jobs);
        assert_eq!(options.locations, vec!["Da Nang", "Hanoi"]);
        assert_eq!(options.experiences, vec![0, 2]);
        assert_eq!(
            options.job_types,
            vec![
                JobTypeOption { id: 1, name: "Full-time".into() },
                JobTypeOption { id: 2, name: "Part-time".into() }
            ]
        );
    }
}
