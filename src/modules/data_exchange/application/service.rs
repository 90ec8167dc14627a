use chrono::Local;
use std::path::{Path, PathBuf};

use crate::{
    modules::{
        data_exchange::domain::{
            services::{codec, export_filename, EXPORT_PREFIX, TEMPLATE_FILE_NAME},
            ExchangeFormat,
        },
        movie::MovieRecord,
    },
    shared::{
        errors::{AppError, AppResult},
        utils::logger::{LogContext, TimedOperation},
    },
};

/// Reads imports from and writes exports to the local filesystem.
///
/// Imports are all-or-nothing: the whole document is parsed before anything is
/// returned, so a bad row never yields a partial result.
pub struct DataExchangeService {
    export_dir: PathBuf,
}

impl DataExchangeService {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Parse already-loaded file content
    pub fn parse(
        &self,
        file_name: &str,
        mime: Option<&str>,
        content: &str,
    ) -> AppResult<Vec<MovieRecord>> {
        let format = ExchangeFormat::detect(file_name, mime)?;
        let records = match format {
            ExchangeFormat::Json => codec::from_json(content)?,
            ExchangeFormat::Csv => codec::import_csv(content)?,
        };
        LogContext::import_summary(file_name, format.extension(), records.len());
        Ok(records)
    }

    pub async fn import_file(
        &self,
        path: &Path,
        mime: Option<&str>,
    ) -> AppResult<Vec<MovieRecord>> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("Not a file path: {}", path.display()))
            })?;

        // Reject unsupported types before touching the file
        ExchangeFormat::detect(file_name, mime)?;

        let timer = TimedOperation::new(&format!("import {}", file_name));
        let content = tokio::fs::read_to_string(path).await?;
        let records = self.parse(file_name, mime, &content)?;
        timer.finish_with_info(&format!("{} records", records.len()));
        Ok(records)
    }

    pub fn render(&self, records: &[MovieRecord], format: ExchangeFormat) -> AppResult<String> {
        match format {
            ExchangeFormat::Json => codec::to_json(records),
            ExchangeFormat::Csv => codec::to_csv(records),
        }
    }

    /// Write `records` as `film_<query>_<timestamp>.<ext>` into the export directory
    pub async fn export(
        &self,
        records: &[MovieRecord],
        format: ExchangeFormat,
        query: &str,
    ) -> AppResult<PathBuf> {
        let content = self.render(records, format)?;
        let file_name = export_filename(EXPORT_PREFIX, query, Local::now().naive_local(), format);
        let path = self.write(&file_name, &content).await?;
        LogContext::export_summary(&file_name, records.len());
        Ok(path)
    }

    pub async fn write_template(&self) -> AppResult<PathBuf> {
        self.write(TEMPLATE_FILE_NAME, codec::CSV_TEMPLATE).await
    }

    async fn write(&self, file_name: &str, content: &str) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir).await?;
        let path = self.export_dir.join(file_name);
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }
}
