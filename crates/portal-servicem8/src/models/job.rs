use chrono::Utc;
use portal_core::entities::JobLocation;
use serde::{Deserialize, Serialize};

use super::{lenient, record};

/// A job (`/job.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub active: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_uuid: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_invoice_amount: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::float",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::float",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::int",
        skip_serializing_if = "Option::is_none"
    )]
    pub geo_is_valid: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active != Some(0)
    }

    #[must_use]
    pub fn belongs_to(&self, company_uuid: &str) -> bool {
        self.company_uuid.as_deref() == Some(company_uuid)
    }

    /// Snapshot the job's position for caching.
    ///
    /// ServiceM8 reports `0,0` for addresses it could not geocode, so the
    /// location is only valid when `geo_is_valid` is set and both
    /// coordinates are present.
    #[must_use]
    pub fn location(&self) -> Option<JobLocation> {
        let job_uuid = self.uuid.clone()?;
        let geo_valid = self.geo_is_valid == Some(1) && self.lat.is_some() && self.lng.is_some();
        Some(JobLocation {
            job_uuid,
            company_uuid: self.company_uuid.clone(),
            address: self.job_address.clone().filter(|a| !a.trim().is_empty()),
            lat: self.lat.filter(|_| geo_valid),
            lng: self.lng.filter(|_| geo_valid),
            geo_valid,
            cached_at: Utc::now(),
        })
    }
}

record! {
    JobContact { job_uuid, first, last, email, phone, mobile, r#type }
}

record! {
    /// A scheduled or recorded visit (`/jobactivity.json`).
    JobActivity { job_uuid, staff_uuid, start_date, end_date, activity_was_scheduled }
}

record! {
    JobMaterial { job_uuid, material_uuid, name, quantity, price, cost }
}

record! {
    JobPayment { job_uuid, amount, method, timestamp, note }
}

record! {
    /// A queue jobs can be parked in (`/jobqueue.json`).
    JobQueue { name }
}
