use chrono::NaiveDate;
use readwise_common::ExportResponse;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info};

use crate::error::FetchError;

/// `updatedAfter` / `updatedBefore` bounds covering one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub updated_after: String,
    pub updated_before: String,
}

impl DayWindow {
    pub fn for_date(date: NaiveDate) -> Self {
        let day = date.format("%Y-%m-%d");
        Self {
            updated_after: format!("{}T00:00:00Z", day),
            updated_before: format!("{}T23:59:59Z", day),
        }
    }
}

pub struct Readwise {
    client: Client,
    token: String,
    export_endpoint: Url,
}

impl Readwise {
    pub fn new(client: Client, token: &str, export_endpoint: Url) -> Self {
        Self {
            client,
            token: token.to_string(),
            export_endpoint,
        }
    }

    /// Fetches every book with highlights updated on `date`, in a single
    /// request.
    pub async fn fetch_day(&self, date: NaiveDate) -> Result<ExportResponse, FetchError> {
        let window = DayWindow::for_date(date);
        info!(
            "Fetching highlights from Readwise updated between {} and {}",
            window.updated_after, window.updated_before
        );

        let mut url = self.export_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("updatedAfter", &window.updated_after)
            .append_pair("updatedBefore", &window.updated_before);

        debug!("Readwise export url: {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            debug!("Export request failed with {}: {}", status, body);
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let export: ExportResponse = serde_json::from_slice(&bytes)?;

        debug!("Received export with {} books", export.results.len());

        Ok(export)
    }
}
