/// External API clients module
use crate::errors::{ApiError, ApiResult};
use crate::utils::uint;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// One page of the upstream schedule listing.
#[derive(Debug)]
pub struct SchedulePage {
    /// Raw channel objects from `data.channelList`, in upstream order.
    pub channels: Vec<Value>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl SchedulePage {
    /// Exhaustion signal from the pagination fields of this page.
    pub fn is_last(&self) -> bool {
        self.offset + self.limit >= self.total
    }
}

/// Client for the upstream channel-schedule API
pub struct ScheduleClient {
    http_client: HttpClient,
    base_url: String,
    page_limit: u64,
}

impl ScheduleClient {
    pub fn new(base_url: String, page_limit: u64) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            page_limit,
        })
    }

    pub fn page_limit(&self) -> u64 {
        self.page_limit
    }

    /// Fetch one schedule page for `date` (DD-MM-YYYY) at `offset`.
    ///
    /// Returns `Ok(None)` when the upstream `data` envelope is absent or an
    /// empty object, which signals that the date has no listings at all.
    pub async fn fetch_page(&self, date: &str, offset: u64) -> ApiResult<Option<SchedulePage>> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.base_url)
            .query(&[
                ("date", date.to_string()),
                ("languageFilters", String::new()),
                ("genreFilters", String::new()),
                ("limit", self.page_limit.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamHttp(status.as_u16()));
        }

        let body: Value = resp.json().await?;
        let data = &body["data"];
        let empty = match data.as_object() {
            Some(obj) => obj.is_empty(),
            None => true,
        };
        if empty {
            return Ok(None);
        }

        let channels = data
            .get("channelList")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(Some(SchedulePage {
            channels,
            offset: uint(&data["offset"]),
            limit: uint(&data["limit"]),
            total: uint(&data["total"]),
        }))
    }
}
