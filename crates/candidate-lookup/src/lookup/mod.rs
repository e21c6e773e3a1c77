//! Phone-number candidate lookup against the Teamtailor API.
//!
//! A lookup normalizes the inbound number, walks the candidate listing with the
//! configured [`Paginator`], and on a match joins the candidate's job
//! applications. Vendor access goes through [`CandidateDirectory`] so the
//! traversal can be tested without a network.

pub mod applications;
pub mod client;
pub mod deep_link;
pub mod directory;
pub mod domain;
pub mod locator;
pub mod paginator;
pub mod payload;
pub mod phone;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use applications::{join_applications, ApplicationJoiner};
pub use client::{ClientBuildError, TeamtailorClient};
pub use deep_link::{DeepLink, DeepLinkBuilder};
pub use directory::{CandidateDirectory, FetchError};
pub use domain::{
    Candidate, CandidateId, CandidateInfoView, CandidateLookupView, JobApplication, PageMetadata,
    SearchResult,
};
pub use locator::{CandidateLocator, LocatorOutcome};
pub use paginator::{
    CursorPaginator, PageNumberPaginator, PagePosition, PageRequest, PaginationStrategy, Paginator,
};
pub use payload::{ApplicationsDocument, CandidatePage};
pub use phone::{CanonicalNumber, PhoneError, PhoneNormalizer};
pub use router::{lookup_router, NOT_FOUND_MESSAGE};
pub use service::{CandidateLookupService, LookupError};
