use async_trait::async_trait;

use super::domain::CandidateId;
use super::paginator::PageRequest;
use super::payload::{ApplicationsDocument, CandidatePage};

/// Read-only access to the vendor's candidate data so the locator can be exercised in isolation.
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    async fn list_candidates(&self, request: &PageRequest) -> Result<CandidatePage, FetchError>;

    async fn candidate_applications(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<ApplicationsDocument, FetchError>;
}

/// Failure talking to the vendor API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Teamtailor responded with HTTP {status}")]
    Status { status: u16 },
    #[error("request to Teamtailor failed: {0}")]
    Transport(String),
    #[error("unexpected Teamtailor payload: {0}")]
    Decode(String),
}
