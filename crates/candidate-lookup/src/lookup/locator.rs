use std::sync::Arc;

use tracing::debug;

use super::directory::{CandidateDirectory, FetchError};
use super::domain::{Candidate, PageMetadata};
use super::paginator::PaginationStrategy;
use super::payload::CandidatePage;
use super::phone::{CanonicalNumber, PhoneNormalizer};

/// Result of walking the candidate listing.
#[derive(Debug, Clone)]
pub struct LocatorOutcome {
    pub candidate: Option<Candidate>,
    pub metadata: PageMetadata,
}

/// Pages through the candidate listing until a stored phone matches the target.
pub struct CandidateLocator<D> {
    directory: Arc<D>,
    normalizer: PhoneNormalizer,
    strategy: PaginationStrategy,
    page_size: u32,
}

impl<D> CandidateLocator<D>
where
    D: CandidateDirectory + 'static,
{
    pub fn new(
        directory: Arc<D>,
        normalizer: PhoneNormalizer,
        strategy: PaginationStrategy,
        page_size: u32,
    ) -> Self {
        Self {
            directory,
            normalizer,
            strategy,
            page_size,
        }
    }

    /// Pages are fetched strictly in sequence; any vendor error aborts the walk.
    pub async fn find(&self, target: &CanonicalNumber) -> Result<LocatorOutcome, FetchError> {
        let mut paginator = self.strategy.paginator(self.page_size);
        let mut metadata = PageMetadata::new(paginator.strategy());
        let mut request = Some(paginator.first());

        while let Some(current) = request.take() {
            let page = self.directory.list_candidates(&current).await?;
            metadata.pages_fetched += 1;
            if page.meta.page_count.is_some() {
                metadata.page_count = page.meta.page_count;
            }

            debug!(
                position = ?current.position,
                candidates = page.data.len(),
                total = ?page.meta.record_count,
                "fetched candidate page"
            );

            if let Some(candidate) = self.first_match(&page, target, &mut metadata) {
                return Ok(LocatorOutcome {
                    candidate: Some(candidate),
                    metadata,
                });
            }

            request = paginator.advance(&page.meta);
        }

        Ok(LocatorOutcome {
            candidate: None,
            metadata,
        })
    }

    fn first_match(
        &self,
        page: &CandidatePage,
        target: &CanonicalNumber,
        metadata: &mut PageMetadata,
    ) -> Option<Candidate> {
        for resource in &page.data {
            metadata.candidates_scanned += 1;
            let Some(phone) = resource.phone() else {
                continue;
            };
            if self.normalizer.matches(phone, target) {
                return Some(resource.to_candidate());
            }
        }
        None
    }
}
