use anyhow::Context;
use infrastructure::HttpClientConfig;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;

use crate::core::time::SampleRange;
use crate::sensor::{Sample, SensorClient};

#[derive(Debug, Clone, Deserialize)]
pub struct SensorApiConfig {
    pub url: String,
    pub sensor_id: String,
    pub token: String,
}

impl SensorApiConfig {
    pub fn new_client(&self) -> anyhow::Result<SensorApiClient> {
        SensorApiClient::new(&self.url, &self.sensor_id, &self.token)
    }
}

#[derive(Debug, Clone)]
pub struct SensorApiClient {
    client: ClientWithMiddleware,
    base_url: String,
    sensor_id: String,
}

impl SensorApiClient {
    pub fn new(url: &str, sensor_id: &str, token: &str) -> anyhow::Result<Self> {
        let client = HttpClientConfig::new(Some(token.to_owned())).new_tracing_client()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_owned(),
            sensor_id: sensor_id.to_owned(),
        })
    }

    fn range_query(&self, range: &SampleRange) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("sensorId", self.sensor_id.clone()),
            ("start", range.start_iso()),
            ("granularity", range.granularity().to_string()),
            ("end", range.end_iso()),
        ];

        if let Some(frequency) = range.frequency() {
            query.push(("frequency", frequency.to_string()));
        }

        query
    }

    async fn get_samples(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Vec<Option<Sample>>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Error requesting {}", url))?
            .error_for_status()
            .with_context(|| format!("Sensor API rejected request to {}", url))?;

        response
            .json::<Vec<Option<Sample>>>()
            .await
            .with_context(|| format!("Error parsing samples from {}", url))
    }
}

impl SensorClient for SensorApiClient {
    #[tracing::instrument(skip_all, fields(range = %range))]
    async fn fetch_samples(&self, range: &SampleRange) -> anyhow::Result<Vec<Option<Sample>>> {
        let samples = self.get_samples("/v1/samples", &self.range_query(range)).await?;
        tracing::debug!("Received {} samples", samples.len());

        Ok(samples)
    }

    #[tracing::instrument(skip(self, range), fields(range = %range))]
    async fn fetch_energy_stats(
        &self,
        range: &SampleRange,
        page_size: u32,
        page_limit: u32,
    ) -> anyhow::Result<Vec<Option<Sample>>> {
        anyhow::ensure!(
            page_size > 0 && page_limit > 0,
            "Invalid stats paging: page_size={} page_limit={}",
            page_size,
            page_limit
        );

        let mut samples = vec![];

        for page in 1..=page_limit {
            let mut query = self.range_query(range);
            query.push(("perPage", page_size.to_string()));
            query.push(("page", page.to_string()));

            let batch = self.get_samples("/v1/samples/stats", &query).await?;
            let batch_len = batch.len();
            tracing::debug!("Received {} energy stats on page {}", batch_len, page);

            samples.extend(batch);

            if batch_len < page_size as usize {
                break;
            }
        }

        Ok(samples)
    }
}
