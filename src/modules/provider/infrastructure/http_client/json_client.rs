//! HTTP client for JSON endpoints with a bounded timeout.
//!
//! Exactly one attempt per call: any timeout, connection failure or non-2xx
//! status is returned to the caller as a `TransportError`.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

const BODY_PREVIEW_CHARS: usize = 200;

pub struct JsonHttpClient {
    client: Client,
    user_agent: String,
    provider_name: String,
    timeout: Duration,
}

impl JsonHttpClient {
    pub fn new(provider_name: &str, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ConfigError(format!(
                    "Failed to build {} HTTP client: {}",
                    provider_name, e
                ))
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            provider_name: provider_name.to_string(),
            timeout,
        })
    }

    /// Single GET returning the response body as loosely typed JSON
    pub async fn get_json(&self, url: &str) -> AppResult<Value> {
        let timer = TimedOperation::new(&format!("{} GET", self.provider_name));
        LogContext::api_call(&self.provider_name, url, "pending", None);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            LogContext::api_call(
                &self.provider_name,
                url,
                status.as_str(),
                Some(timer.elapsed_ms()),
            );
            return Err(AppError::TransportError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )));
        }

        let body = self.parse_response(response).await;
        LogContext::api_call(
            &self.provider_name,
            url,
            status.as_str(),
            Some(timer.finish()),
        );
        body
    }

    fn transport_error(&self, err: reqwest::Error) -> AppError {
        log::warn!("{} API request failed: {}", self.provider_name, err);
        if err.is_timeout() {
            AppError::TransportError(format!(
                "{} API did not answer within {}s",
                self.provider_name,
                self.timeout.as_secs()
            ))
        } else {
            AppError::from(err)
        }
    }

    async fn parse_response(&self, response: Response) -> AppResult<Value> {
        let response_text = response.text().await.map_err(|e| {
            AppError::TransportError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                preview(&response_text)
            ))
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > BODY_PREVIEW_CHARS {
        format!(
            "{}...",
            text.chars().take(BODY_PREVIEW_CHARS).collect::<String>()
        )
    } else {
        text.to_string()
    }
}
