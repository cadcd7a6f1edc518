use crate::error::{AppError, Result};
use crate::models::{
    Employee, PayrollPeriod, Payslip, SalaryComponent, SalaryStructure,
};
use crate::providers::RecordSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use validator::Validate;

/// Record source backed by a PostgREST-style HTTP API.
///
/// Each collection is read with `GET {base_url}/rest/v1/{table}?select=*`.
/// When an API key is configured it is sent both as the `apikey` header and
/// as a bearer token.
#[derive(Clone)]
pub struct RestSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestSource {
    /// Create a new REST source
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn fetch_table<T>(&self, table: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Validate,
    {
        let mut request = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .header("Accept", "application/json");

        if let Some(ref key) = self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(table = table, status = status.as_u16(), "Record fetch failed");
            return Err(AppError::Source {
                source_name: self.name().to_string(),
                message: format!("GET {} returned {}: {}", table, status, body),
            });
        }

        let rows: Vec<T> = response.json().await?;
        for row in &rows {
            row.validate().map_err(|e| {
                AppError::Validation(format!("{} row is invalid: {}", table, e))
            })?;
        }

        tracing::debug!(table = table, rows = rows.len(), "Fetched records");
        Ok(rows)
    }
}

#[async_trait]
impl RecordSource for RestSource {
    fn name(&self) -> &str {
        "rest"
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        self.fetch_table("employees").await
    }

    async fn salary_structures(&self) -> Result<Vec<SalaryStructure>> {
        self.fetch_table("salary_structures").await
    }

    async fn salary_components(&self) -> Result<Vec<SalaryComponent>> {
        self.fetch_table("salary_components").await
    }

    async fn payroll_periods(&self) -> Result<Vec<PayrollPeriod>> {
        self.fetch_table("payroll_periods").await
    }

    async fn payslips(&self) -> Result<Vec<Payslip>> {
        self.fetch_table("payslips").await
    }
}
