//! Open-Meteo archive client.

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::config::ClimateConfig;
use crate::error::ClimateError;
use crate::types::ClimateSummary;

pub struct ClimateClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<DailySeries>,
}

/// Parallel daily arrays; the provider nulls out individual days it
/// has no observation for.
#[derive(Debug, Deserialize)]
struct DailySeries {
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

impl ClimateClient {
    pub fn new(config: ClimateConfig) -> Result<Self, ClimateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch daily max temperature and precipitation for the previous
    /// calendar year and reduce both series to yearly averages.
    ///
    /// The window moves with the wall clock: Jan 1 through Dec 31 of
    /// the year before the current one, in the location's own timezone
    /// as resolved by the provider.
    #[instrument(skip(self), level = "info")]
    pub async fn yearly_averages(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ClimateSummary, ClimateError> {
        let (start, end) = archive_range(Local::now().date_naive());
        let url = format!(
            "{}/v1/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily=temperature_2m_max,precipitation_sum&timezone=auto",
            self.base_url, latitude, longitude, start, end
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClimateError::Status(status.as_u16()));
        }

        let body: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| ClimateError::MalformedResponse(e.to_string()))?;

        let daily = body
            .daily
            .ok_or_else(|| ClimateError::IncompleteData("missing daily series".to_string()))?;

        let avg_temp_c = mean(&daily.temperature_2m_max)
            .ok_or_else(|| ClimateError::IncompleteData("empty temperature series".to_string()))?;
        let avg_rain_mm = mean(&daily.precipitation_sum)
            .ok_or_else(|| ClimateError::IncompleteData("empty precipitation series".to_string()))?;

        let summary = ClimateSummary {
            avg_temp_c: round1(avg_temp_c),
            avg_rain_mm: round1(avg_rain_mm),
        };

        tracing::info!(
            avg_temp_c = summary.avg_temp_c,
            avg_rain_mm = summary.avg_rain_mm,
            "computed yearly averages"
        );

        Ok(summary)
    }
}

/// Date range covering the full previous calendar year.
pub fn archive_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = today.year() - 1;
    // Jan 1 and Dec 31 exist for every year
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today);
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
    (start, end)
}

/// Unweighted arithmetic mean over the non-null values; `None` when
/// nothing remains, so an empty series can never become NaN.
fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Round to one decimal place, half away from zero (`f64::round`
/// semantics). Displayed and prompted values both go through this.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
