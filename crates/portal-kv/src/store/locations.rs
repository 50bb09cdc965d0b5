//! `job:location:<uuid>`: cached job location, seven-day expiry.

use portal_core::entities::JobLocation;
use portal_core::keys;

use super::PortalStore;
use crate::KvError;

impl PortalStore {
    pub async fn cache_job_location(&self, location: &JobLocation) -> Result<(), KvError> {
        self.put_json_ex(
            &keys::job_location(&location.job_uuid),
            keys::JOB_LOCATION_TTL_SECS,
            location,
        )
        .await
    }

    pub async fn cached_job_location(&self, job_uuid: &str) -> Result<Option<JobLocation>, KvError> {
        self.get_json(&keys::job_location(job_uuid)).await
    }
}
