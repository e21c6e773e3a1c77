use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::json;

/// Prebuilt segment search for the Teamtailor web UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub base64_query: String,
    pub teamtailor_url: String,
}

/// Builds links into `{app_url}/companies/{company}/candidates/segment/all`.
#[derive(Debug, Clone)]
pub struct DeepLinkBuilder {
    app_url: String,
}

impl DeepLinkBuilder {
    pub fn new(app_url: impl Into<String>) -> Self {
        let app_url = app_url.into();
        Self {
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    /// `raw_phone` is embedded exactly as the caller typed it, not in canonical form.
    pub fn build(&self, raw_phone: &str, company_id: &str) -> DeepLink {
        let query = json!({ "query": raw_phone, "root": [] });
        let base64_query = STANDARD.encode(query.to_string());
        let teamtailor_url = format!(
            "{}/companies/{}/candidates/segment/all?q={}",
            self.app_url, company_id, base64_query
        );

        DeepLink {
            base64_query,
            teamtailor_url,
        }
    }
}
