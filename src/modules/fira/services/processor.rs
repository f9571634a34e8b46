use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::time::{Duration, Instant};

use crate::config::FiraConfig;
use crate::core::{AppError, Result};
use crate::modules::fira::models::{FiraData, FiraProcessingResult, FiraUpload};

/// Turns an uploaded FIRA document into extracted figures
#[async_trait]
pub trait FiraProcessor: Send + Sync {
    /// Process one document. Transport failures are errors; a document the
    /// processor could not read comes back as an unsuccessful result.
    async fn process(&self, upload: &FiraUpload) -> Result<FiraProcessingResult>;

    /// Processor name, for logs and responses
    fn name(&self) -> &str;
}

/// Returns canned figures after a short delay, without reading the document
pub struct MockFiraProcessor {
    delay: Duration,
}

impl MockFiraProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sample certificate: USD 5,000 credited at 85.19 (₹4,25,950) against a
    /// market rate of 86.09. No FX fee is resolved, so the 1.05% margin is
    /// shown but not added to the fee totals.
    pub fn sample_data() -> FiraData {
        FiraData {
            id: Some(1),
            amount: Some(Decimal::from(5000)),
            currency: Some("USD".to_string()),
            inr_amount: Some(Decimal::from(425950)),
            fx_rate_skydo: Some(Decimal::new(8609, 2)),
            calculated_exchange_rate: Some(Decimal::new(8519, 2)),
            transaction_skydo_fee: Decimal::from(150),
            skydo_fira_fee: Decimal::ZERO,
            skydo_wire_fee: Decimal::ZERO,
            skydo_fx_fee: Decimal::ZERO,
            platform_fira_fee: Decimal::from(2500),
            platform_wire_fee: Decimal::from(1500),
            platform_transaction_fee: Decimal::from(850),
            platform_fx_fee: Decimal::ZERO,
            final_inr_amount: Some(Decimal::from(421100)),
            final_inr_amount_skydo: Some(Decimal::from(425800)),
            value_date: Some(Utc::now().date_naive()),
        }
    }
}

#[async_trait]
impl FiraProcessor for MockFiraProcessor {
    async fn process(&self, upload: &FiraUpload) -> Result<FiraProcessingResult> {
        tracing::debug!(
            file_name = %upload.file_name,
            payment_method = %upload.payment_method,
            "Returning sample FIRA figures"
        );

        tokio::time::sleep(self.delay).await;

        Ok(FiraProcessingResult {
            success: true,
            message: "FIRA document processed successfully (test data)".to_string(),
            fira_data: Some(Self::sample_data()),
            processing_time_ms: self.delay.as_millis() as u64,
            errors: Vec::new(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Forwards the document to an external extraction API
pub struct HttpFiraProcessor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFiraProcessor {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FiraProcessor for HttpFiraProcessor {
    async fn process(&self, upload: &FiraUpload) -> Result<FiraProcessingResult> {
        let started = Instant::now();
        let url = format!("{}/fira/process", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("fileName", upload.file_name.clone()),
            ("paymentMethod", upload.payment_method.clone()),
        ];
        if let Some(importer_id) = upload.importer_id {
            query.push(("importerId", importer_id.to_string()));
        }

        let content_type = upload
            .accepted_content_type()
            .unwrap_or("application/octet-stream");

        let response = self
            .client
            .post(&url)
            .query(&query)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(upload.bytes.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                url = %url,
                status = %status,
                body = %body,
                "FIRA processing API returned an error"
            );
            return Err(AppError::processing(format!(
                "FIRA processing API returned {}",
                status
            )));
        }

        let result: FiraProcessingResult = response.json().await?;

        tracing::info!(
            url = %url,
            success = result.success,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "FIRA document processed"
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Pick the HTTP processor when an API URL is configured, the mock otherwise
pub fn processor_from_config(config: &FiraConfig) -> Result<Box<dyn FiraProcessor>> {
    match &config.api_url {
        Some(url) => Ok(Box::new(HttpFiraProcessor::new(url.clone(), config.api_timeout)?)),
        None => Ok(Box::new(MockFiraProcessor::new(config.mock_delay))),
    }
}
