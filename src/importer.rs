use crate::assembler::{assemble, AssemblyOptions};
use crate::config::ImporterConfig;
use crate::error::ImportError;
use crate::model::{PairingGroup, PairingInput};
use crate::uploader::Uploader;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Options controlling a batch run
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Pause between two consecutive items
    pub delay: Duration,
    /// Where the summary is written once the run ends; nothing is written when unset
    pub summary_path: Option<PathBuf>,
    /// Directory receiving a `backup_{slug}.json` copy of each assembled group
    pub backup_dir: Option<PathBuf>,
    pub assembly: AssemblyOptions,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            summary_path: None,
            backup_dir: None,
            assembly: AssemblyOptions::default(),
        }
    }
}

impl ImportOptions {
    pub fn from_config(config: &ImporterConfig) -> Self {
        Self {
            delay: config.batch.delay(),
            summary_path: Some(config.batch.summary_path.clone()),
            backup_dir: config.batch.backup_dir.clone(),
            assembly: AssemblyOptions {
                recipe_policy: config.batch.recipe_policy,
                site_name: config.site_name.clone(),
            },
        }
    }
}

/// One item that did not make it to the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub dish: String,
    pub error: String,
}

/// Summary of one batch invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRun {
    timestamp: DateTime<Utc>,
    total_processed: usize,
    successful: usize,
    failed: usize,
    processed_dishes: Vec<String>,
    failures: Vec<ImportFailure>,
}

impl ImportRun {
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn total_processed(&self) -> usize {
        self.total_processed
    }

    pub fn successful(&self) -> usize {
        self.successful
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Main dish names imported successfully, in processing order
    pub fn processed_dishes(&self) -> &[String] {
        &self.processed_dishes
    }

    pub fn failures(&self) -> &[ImportFailure] {
        &self.failures
    }

    /// Write the summary as pretty-printed JSON
    pub async fn persist(&self, path: &Path) -> Result<(), ImportError> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| ImportError::SummaryError {
                path: path.display().to_string(),
                source,
            })
    }
}

/// Accumulates per-item outcomes; only the running importer holds one
struct RunRecorder {
    started: DateTime<Utc>,
    total: usize,
    processed_dishes: Vec<String>,
    failures: Vec<ImportFailure>,
}

impl RunRecorder {
    fn new() -> Self {
        Self {
            started: Utc::now(),
            total: 0,
            processed_dishes: Vec::new(),
            failures: Vec::new(),
        }
    }

    fn success(&mut self, dish: &str) {
        self.total += 1;
        self.processed_dishes.push(dish.to_string());
    }

    fn failure(&mut self, dish: impl Into<String>, error: impl ToString) {
        self.total += 1;
        self.failures.push(ImportFailure {
            dish: dish.into(),
            error: error.to_string(),
        });
    }

    fn finish(self) -> ImportRun {
        ImportRun {
            timestamp: self.started,
            total_processed: self.total,
            successful: self.processed_dishes.len(),
            failed: self.failures.len(),
            processed_dishes: self.processed_dishes,
            failures: self.failures,
        }
    }
}

/// Drives assembly and upload over a sequence of inputs, one item at a time
pub struct BatchImporter<U: Uploader> {
    uploader: U,
    options: ImportOptions,
    cancel: Option<Arc<AtomicBool>>,
}

impl<U: Uploader> BatchImporter<U> {
    pub fn new(uploader: U, options: ImportOptions) -> Self {
        Self {
            uploader,
            options,
            cancel: None,
        }
    }

    /// Stop submitting further items once `flag` is set
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Process every row, record each outcome and persist the summary.
    ///
    /// Per-item problems end up in the returned run; only a summary that cannot be
    /// written is reported as an error.
    pub async fn run<I>(&self, rows: I) -> Result<ImportRun, ImportError>
    where
        I: IntoIterator<Item = Result<PairingInput, ImportError>>,
    {
        let mut recorder = RunRecorder::new();
        info!("Starting import via {} uploader", self.uploader.name());

        for (index, row) in rows.into_iter().enumerate() {
            if self.cancelled() {
                warn!("Import cancelled after {} items", index);
                break;
            }
            if index > 0 && !self.options.delay.is_zero() {
                sleep(self.options.delay).await;
                if self.cancelled() {
                    warn!("Import cancelled after {} items", index);
                    break;
                }
            }

            let row_label = format!("Row {}", index + 1);
            let input = match row {
                Ok(input) => input,
                Err(e) => {
                    warn!("[{}] skipped: {}", row_label, e);
                    recorder.failure(row_label, e);
                    continue;
                }
            };

            let Some(group) = assemble(&input, &self.options.assembly) else {
                let dish = input.label().unwrap_or(row_label.as_str()).to_string();
                warn!("[{}] {}: {}", row_label, dish, ImportError::MissingDish);
                recorder.failure(dish, ImportError::MissingDish);
                continue;
            };

            let dish = group.main_dish.name.clone();
            info!(
                "[{}] Processing {} with {} side dishes",
                row_label,
                dish,
                group.side_dishes.len()
            );

            if let Some(dir) = &self.options.backup_dir {
                if let Err(e) = write_backup(dir, &group).await {
                    warn!("Failed to write backup for {}: {}", dish, e);
                }
            }

            match self.uploader.upload(&group).await {
                Ok(()) => {
                    info!("Successfully imported {}", dish);
                    recorder.success(&dish);
                }
                Err(e) => {
                    warn!("Failed to import {}: {}", dish, e);
                    recorder.failure(dish, e);
                }
            }
        }

        let run = recorder.finish();
        info!(
            "Import finished: {} processed, {} succeeded, {} failed",
            run.total_processed, run.successful, run.failed
        );
        for failure in &run.failures {
            debug!("  - {}: {}", failure.dish, failure.error);
        }

        if let Some(path) = &self.options.summary_path {
            run.persist(path).await?;
            info!("Import summary saved to {}", path.display());
        }

        Ok(run)
    }
}

/// Write `backup_{slug}.json` for a group into `dir`
pub async fn write_backup(dir: &Path, group: &PairingGroup) -> Result<PathBuf, ImportError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("backup_{}.json", group.main_dish.slug));
    let json = serde_json::to_string_pretty(group)?;
    tokio::fs::write(&path, json).await?;
    Ok(path)
}
