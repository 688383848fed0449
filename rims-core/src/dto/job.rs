//! Job search/filter DTOs

use serde::{Deserialize, Serialize};

/// Query parameters for the paginated job search endpoint.
///
/// Field names follow the backend's PascalCase query-string convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(rename = "Search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Experience", skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    #[serde(rename = "JobType", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<i32>,
    #[serde(rename = "PageNumber")]
    pub page_number: u32,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            search: None,
            location: None,
            experience: None,
            job_type: None,
            page_number: 1,
            page_size: 6,
        }
    }
}
