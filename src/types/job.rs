// src/types/job.rs
//! Job listing data structures, shared by the catalog, the filter and the views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type JobId = u64;

// ===== Job Record =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub work_mode: WorkMode,
    pub salary: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: ExperienceRange,
    pub education: Education,
    pub company_info: CompanyInfo,
    pub posted_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    #[serde(alias = "on-site")]
    Onsite,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::Onsite => "Onsite",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
    pub unit: String,
}

impl fmt::Display for ExperienceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.min, self.max, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.degree, self.field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Job {
    /// Route of the detail view for this job
    pub fn detail_path(&self) -> String {
        detail_path(self.id)
    }
}

/// Route of the detail view for a job id
pub fn detail_path(id: JobId) -> String {
    format!("/job/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_job() {
        let raw = r#"{
            "id": 7,
            "title": "ML Engineer",
            "company": "Acme",
            "location": "Berlin",
            "type": "Full-time",
            "workMode": "hybrid",
            "salary": "$120k",
            "description": "Build models",
            "skills": ["Python", "PyTorch"],
            "experience": {"min": 2, "max": 5, "unit": "years"},
            "education": {"degree": "Master's", "field": "Computer Science"},
            "companyInfo": {"size": "50-200 employees"},
            "postedDate": "2024-03-15T00:00:00Z"
        }"#;

        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.work_mode, WorkMode::Hybrid);
        assert_eq!(job.skills, vec!["Python", "PyTorch"]);
        assert_eq!(job.company_info.industry, None);
        assert_eq!(job.experience.to_string(), "2-5 years");
        assert_eq!(job.education.to_string(), "Master's in Computer Science");
    }

    #[test]
    fn test_work_mode_accepts_on_site_alias() {
        let mode: WorkMode = serde_json::from_str("\"on-site\"").unwrap();
        assert_eq!(mode, WorkMode::Onsite);
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path(42), "/job/42");
    }
}
