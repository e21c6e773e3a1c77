use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::config::{PhoneConfig, TeamtailorConfig};
use crate::lookup::directory::{CandidateDirectory, FetchError};
use crate::lookup::domain::CandidateId;
use crate::lookup::paginator::{PagePosition, PageRequest, PaginationStrategy};
use crate::lookup::payload::{ApplicationsDocument, CandidatePage};
use crate::lookup::phone::PhoneNormalizer;
use crate::lookup::{lookup_router, CandidateLookupService};

pub(super) const COMPANY_ID: &str = "123";

/// `(candidate id, stored phone)` rows for one listing page.
pub(super) type PageRows = Vec<(&'static str, Option<&'static str>)>;

/// In-memory listing that serves fixed pages and records every request it sees.
#[derive(Default)]
pub(super) struct ScriptedDirectory {
    pages: Vec<PageRows>,
    failures: HashMap<usize, FetchError>,
    applications: Option<Result<Value, FetchError>>,
    requests: Mutex<Vec<PageRequest>>,
    application_requests: Mutex<Vec<CandidateId>>,
}

impl ScriptedDirectory {
    pub(super) fn with_pages(pages: Vec<PageRows>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub(super) fn failing_on(mut self, page_index: usize, error: FetchError) -> Self {
        self.failures.insert(page_index, error);
        self
    }

    pub(super) fn with_applications(mut self, applications: Result<Value, FetchError>) -> Self {
        self.applications = Some(applications);
        self
    }

    pub(super) fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub(super) fn application_requests(&self) -> Vec<CandidateId> {
        self.application_requests
            .lock()
            .expect("request log poisoned")
            .clone()
    }

    fn page_index(request: &PageRequest) -> usize {
        match &request.position {
            PagePosition::Cursor(None) => 0,
            PagePosition::Cursor(Some(cursor)) => cursor
                .trim_start_matches("cursor-")
                .parse()
                .expect("cursor issued by this directory"),
            PagePosition::Number(number) => (*number as usize) - 1,
        }
    }

    fn page(&self, index: usize) -> CandidatePage {
        let data: Vec<Value> = self.pages[index]
            .iter()
            .map(|(id, phone)| {
                json!({
                    "id": id,
                    "type": "candidates",
                    "attributes": {
                        "first-name": format!("First{id}"),
                        "last-name": format!("Last{id}"),
                        "email": format!("candidate{id}@example.test"),
                        "phone": phone,
                    }
                })
            })
            .collect();
        let after = (index + 1 < self.pages.len()).then(|| format!("cursor-{}", index + 1));
        let record_count: usize = self.pages.iter().map(Vec::len).sum();

        serde_json::from_value(json!({
            "data": data,
            "meta": {
                "cursors": { "after": after },
                "page-count": self.pages.len(),
                "record-count": record_count,
            }
        }))
        .expect("scripted page decodes")
    }
}

#[async_trait]
impl CandidateDirectory for ScriptedDirectory {
    async fn list_candidates(&self, request: &PageRequest) -> Result<CandidatePage, FetchError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());

        let index = Self::page_index(request);
        if let Some(error) = self.failures.get(&index) {
            return Err(error.clone());
        }
        if index >= self.pages.len() {
            return Err(FetchError::Status { status: 404 });
        }
        Ok(self.page(index))
    }

    async fn candidate_applications(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<ApplicationsDocument, FetchError> {
        self.application_requests
            .lock()
            .expect("request log poisoned")
            .push(candidate_id.clone());

        match &self.applications {
            Some(Ok(value)) => {
                Ok(serde_json::from_value(value.clone()).expect("scripted applications decode"))
            }
            Some(Err(error)) => Err(error.clone()),
            None => Ok(ApplicationsDocument::default()),
        }
    }
}

pub(super) fn three_pages() -> Vec<PageRows> {
    vec![
        vec![("1", Some("+4790000001")), ("2", None), ("3", Some("n/a"))],
        vec![("4", Some("+46 70 123 45 67")), ("5", Some("960 05 939"))],
        vec![("6", Some("+4796005939")), ("7", Some("+4790000007"))],
    ]
}

pub(super) fn applications_document() -> Value {
    json!({
        "data": [
            { "id": "a1", "type": "job-applications",
              "relationships": { "job": { "data": { "id": "10", "type": "jobs" } } } },
            { "id": "a2", "type": "job-applications",
              "relationships": { "job": { "data": { "id": "11", "type": "jobs" } } } }
        ],
        "included": [
            { "id": "10", "type": "jobs", "attributes": { "internal-name": "Nurse Oslo" } }
        ]
    })
}

pub(super) fn teamtailor_config(strategy: PaginationStrategy) -> TeamtailorConfig {
    let mut config = TeamtailorConfig::new("test-key", COMPANY_ID);
    config.pagination = strategy;
    config.page_size = 3;
    config
}

pub(super) fn normalizer() -> PhoneNormalizer {
    PhoneNormalizer::new(PhoneConfig::default().default_region)
}

pub(super) fn build_service(
    directory: ScriptedDirectory,
    strategy: PaginationStrategy,
) -> (
    Arc<CandidateLookupService<ScriptedDirectory>>,
    Arc<ScriptedDirectory>,
) {
    let directory = Arc::new(directory);
    let service = CandidateLookupService::new(
        directory.clone(),
        &teamtailor_config(strategy),
        PhoneConfig::default(),
    );
    (Arc::new(service), directory)
}

pub(super) fn router_with_directory(
    directory: ScriptedDirectory,
) -> (axum::Router, Arc<ScriptedDirectory>) {
    let (service, directory) = build_service(directory, PaginationStrategy::Cursor);
    (lookup_router(service), directory)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
