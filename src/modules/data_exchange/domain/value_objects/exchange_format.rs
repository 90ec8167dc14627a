use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeFormat {
    Json,
    Csv,
}

impl ExchangeFormat {
    /// Pick a parser from the declared MIME type, falling back to the file
    /// extension when the MIME type is missing or unknown.
    pub fn detect(file_name: &str, mime: Option<&str>) -> AppResult<Self> {
        if let Some(format) = mime.and_then(Self::from_mime) {
            return Ok(format);
        }

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(ExchangeFormat::Json),
            Some("csv") => Ok(ExchangeFormat::Csv),
            _ => Err(AppError::UnsupportedFormat(format!(
                "Cannot import '{}' ({}): only JSON and CSV files are supported",
                file_name,
                mime.unwrap_or("unknown type")
            ))),
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        // ignore parameters such as "; charset=utf-8"
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/json" => Some(ExchangeFormat::Json),
            "text/csv" => Some(ExchangeFormat::Csv),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExchangeFormat::Json => "json",
            ExchangeFormat::Csv => "csv",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExchangeFormat::Json => "application/json",
            ExchangeFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExchangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExchangeFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExchangeFormat::Json),
            "csv" => Ok(ExchangeFormat::Csv),
            other => Err(AppError::UnsupportedFormat(format!(
                "Unknown export format '{}'",
                other
            ))),
        }
    }
}
