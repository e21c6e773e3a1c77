use std::sync::Arc;

use tracing::info;

use super::applications::ApplicationJoiner;
use super::deep_link::{DeepLink, DeepLinkBuilder};
use super::directory::{CandidateDirectory, FetchError};
use super::domain::{PageMetadata, SearchResult};
use super::locator::CandidateLocator;
use super::phone::{PhoneError, PhoneNormalizer};
use crate::config::{PhoneConfig, TeamtailorConfig};

/// Composes phone normalization, listing traversal, application join, and deep links.
pub struct CandidateLookupService<D> {
    normalizer: PhoneNormalizer,
    locator: CandidateLocator<D>,
    joiner: ApplicationJoiner<D>,
    links: DeepLinkBuilder,
    company_id: String,
}

impl<D> CandidateLookupService<D>
where
    D: CandidateDirectory + 'static,
{
    pub fn new(directory: Arc<D>, teamtailor: &TeamtailorConfig, phone: PhoneConfig) -> Self {
        let normalizer = PhoneNormalizer::new(phone.default_region);
        let locator = CandidateLocator::new(
            directory.clone(),
            normalizer,
            teamtailor.pagination,
            teamtailor.page_size,
        );

        Self {
            normalizer,
            locator,
            joiner: ApplicationJoiner::new(directory),
            links: DeepLinkBuilder::new(teamtailor.app_url.clone()),
            company_id: teamtailor.company_id.clone(),
        }
    }

    /// Find the candidate whose stored phone matches `raw_phone`.
    pub async fn lookup(&self, raw_phone: &str) -> Result<SearchResult, LookupError> {
        let target = self.normalizer.normalize(raw_phone)?;
        let deep_link = self.links.build(raw_phone, &self.company_id);

        let outcome = self.locator.find(&target).await?;
        let metadata = outcome.metadata;

        let Some(candidate) = outcome.candidate else {
            info!(
                %target,
                strategy = ?metadata.strategy,
                pages = metadata.pages_fetched,
                scanned = metadata.candidates_scanned,
                "no candidate matched"
            );
            return Err(LookupError::NotFound {
                deep_link,
                metadata,
            });
        };

        let applied_jobs = self.joiner.load_applications(&candidate.id).await;

        info!(
            %target,
            candidate_id = %candidate.id,
            strategy = ?metadata.strategy,
            pages = metadata.pages_fetched,
            applications = applied_jobs.as_ref().map(Vec::len),
            "candidate matched"
        );

        Ok(SearchResult {
            candidate,
            applied_jobs,
            deep_link,
            query_metadata: metadata,
        })
    }
}

/// Error raised by the lookup service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    InvalidPhone(#[from] PhoneError),
    #[error("no candidate found with that phone number")]
    NotFound {
        deep_link: DeepLink,
        metadata: PageMetadata,
    },
    #[error("Teamtailor responded with HTTP {status}")]
    Upstream { status: u16 },
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FetchError> for LookupError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Status { status } => Self::Upstream { status },
            other => Self::Internal(other.to_string()),
        }
    }
}
