//! JSON:API documents returned by the Teamtailor REST API.
//!
//! Only the fields the lookup reads are modelled; everything else is ignored.

use serde::Deserialize;

use super::domain::{Candidate, CandidateId};

/// One page of `GET /v1/candidates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePage {
    #[serde(default)]
    pub data: Vec<CandidateResource>,
    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateResource {
    pub id: String,
    #[serde(default)]
    pub attributes: CandidateAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CandidateAttributes {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CandidateResource {
    pub fn phone(&self) -> Option<&str> {
        self.attributes
            .phone
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
    }

    pub fn to_candidate(&self) -> Candidate {
        let attributes = &self.attributes;
        Candidate {
            id: CandidateId(self.id.clone()),
            first_name: attributes.first_name.clone().unwrap_or_default(),
            last_name: attributes.last_name.clone().unwrap_or_default(),
            email: attributes.email.clone().unwrap_or_default(),
            phone: attributes.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub cursors: Option<Cursors>,
    #[serde(default, rename = "page-count")]
    pub page_count: Option<u32>,
    #[serde(default, rename = "record-count")]
    pub record_count: Option<u32>,
}

impl PageMeta {
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursors
            .as_ref()
            .and_then(|cursors| cursors.after.as_deref())
            .filter(|cursor| !cursor.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,
}

/// `GET /v1/candidates/{id}/job-applications?include=job`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationsDocument {
    #[serde(default)]
    pub data: Vec<ApplicationResource>,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationResource {
    pub id: String,
    #[serde(default)]
    pub relationships: ApplicationRelationships,
}

impl ApplicationResource {
    pub fn job_id(&self) -> Option<&str> {
        self.relationships
            .job
            .as_ref()
            .and_then(|job| job.data.as_ref())
            .map(|identifier| identifier.id.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationRelationships {
    #[serde(default)]
    pub job: Option<Relationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludedResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: JobAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JobAttributes {
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
