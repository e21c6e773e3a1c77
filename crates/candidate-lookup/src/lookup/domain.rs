use serde::Serialize;

use super::deep_link::DeepLink;
use super::paginator::PaginationStrategy;

/// Teamtailor candidate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of a vendor candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// A job the candidate applied for, resolved from the included job records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobApplication {
    pub job_id: String,
    pub internal_name: Option<String>,
}

/// How much of the candidate listing a search had to walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub strategy: PaginationStrategy,
    pub pages_fetched: u32,
    pub candidates_scanned: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

impl PageMetadata {
    pub(crate) fn new(strategy: PaginationStrategy) -> Self {
        Self {
            strategy,
            pages_fetched: 0,
            candidates_scanned: 0,
            page_count: None,
        }
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub candidate: Candidate,
    pub applied_jobs: Option<Vec<JobApplication>>,
    pub deep_link: DeepLink,
    pub query_metadata: PageMetadata,
}

/// `candidate_info` block of the HTTP response.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateInfoView {
    pub candidate_id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Candidate> for CandidateInfoView {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            email: candidate.email.clone(),
        }
    }
}

/// Response body for a found candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateLookupView {
    pub candidate_info: CandidateInfoView,
    pub applied_jobs: Option<Vec<JobApplication>>,
    pub ttquery: DeepLink,
}

impl SearchResult {
    pub fn view(&self) -> CandidateLookupView {
        CandidateLookupView {
            candidate_info: CandidateInfoView::from(&self.candidate),
            applied_jobs: self.applied_jobs.clone(),
            ttquery: self.deep_link.clone(),
        }
    }
}
