use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::directory::CandidateDirectory;
use super::domain::{CandidateId, JobApplication};
use super::payload::{ApplicationsDocument, JobAttributes};

const JOB_RESOURCE: &str = "jobs";

/// Attaches a found candidate's job applications. Failures are soft.
pub struct ApplicationJoiner<D> {
    directory: Arc<D>,
}

impl<D> ApplicationJoiner<D>
where
    D: CandidateDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// `None` when the applications could not be fetched; the error is logged, not returned.
    pub async fn load_applications(&self, candidate_id: &CandidateId) -> Option<Vec<JobApplication>> {
        match self.directory.candidate_applications(candidate_id).await {
            Ok(document) => Some(join_applications(&document)),
            Err(error) => {
                warn!(%candidate_id, %error, "could not load job applications");
                None
            }
        }
    }
}

/// Resolve each application's job reference against the included job records.
///
/// Applications whose job is missing from `included` are dropped.
pub fn join_applications(document: &ApplicationsDocument) -> Vec<JobApplication> {
    let jobs: HashMap<&str, &JobAttributes> = document
        .included
        .iter()
        .filter(|resource| resource.kind == JOB_RESOURCE)
        .map(|resource| (resource.id.as_str(), &resource.attributes))
        .collect();

    document
        .data
        .iter()
        .filter_map(|application| {
            let job_id = application.job_id()?;
            let job = jobs.get(job_id)?;
            Some(JobApplication {
                job_id: job_id.to_string(),
                internal_name: job.internal_name.clone().or_else(|| job.title.clone()),
            })
        })
        .collect()
}
