use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::enrichment::RecipePolicy;
use crate::importer::{BatchImporter, ImportOptions, ImportRun};
use crate::sources::{self, DEFAULT_MIN_SIDES};
use crate::uploader::{DryRunUploader, HttpUploader, Uploader};
use crate::{ImportError, ImporterConfig, PairingInput};

/// Where the pairings of a run come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// CSV master list with `keyword` and `side_dish_N` columns
    Csv(PathBuf),
    /// The built-in pairing table
    Catalog,
    /// JSON array of scrape results
    Scraped(PathBuf),
    /// Saved HTML pages, optionally all describing one main dish
    Html {
        paths: Vec<PathBuf>,
        dish: Option<String>,
    },
    /// Inputs already in memory
    Inputs(Vec<PairingInput>),
}

/// Builder for configuring and executing a batch import
#[derive(Debug, Default)]
pub struct PairingImporterBuilder {
    source: Option<InputSource>,
    config: Option<ImporterConfig>,
    dry_run: bool,
    endpoint: Option<String>,
    api_key: Option<String>,
    delay: Option<Duration>,
    summary_path: Option<PathBuf>,
    no_summary: bool,
    backup_dir: Option<PathBuf>,
    recipe_policy: Option<RecipePolicy>,
    cancel: Option<Arc<AtomicBool>>,
}

impl PairingImporterBuilder {
    /// Import a CSV master list
    ///
    /// # Example
    /// ```
    /// use pairdish_import::PairingImporter;
    ///
    /// let builder = PairingImporter::builder()
    ///     .csv("dishes.csv");
    /// ```
    pub fn csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::Csv(path.into()));
        self
    }

    /// Import the built-in pairing table
    pub fn catalog(mut self) -> Self {
        self.source = Some(InputSource::Catalog);
        self
    }

    /// Import a JSON file of scrape results
    pub fn scraped(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::Scraped(path.into()));
        self
    }

    /// Import side dishes listed on saved HTML pages
    ///
    /// With `dish` set, all pages feed one pairing for that main dish. Otherwise each
    /// page's `h1` is used as its search phrase.
    pub fn html<I, P>(mut self, paths: I, dish: Option<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source = Some(InputSource::Html {
            paths: paths.into_iter().map(Into::into).collect(),
            dish,
        });
        self
    }

    /// Import inputs built by the caller
    ///
    /// # Example
    /// ```
    /// use pairdish_import::{PairingImporter, PairingInput};
    ///
    /// let builder = PairingImporter::builder().inputs(vec![PairingInput::for_dish(
    ///     "Steak",
    ///     ["Baked Potato", "Creamed Spinach"],
    /// )]);
    /// ```
    pub fn inputs(mut self, inputs: Vec<PairingInput>) -> Self {
        self.source = Some(InputSource::Inputs(inputs));
        self
    }

    /// Use an explicit configuration instead of loading `pairdish.toml` and the environment
    pub fn config(mut self, config: ImporterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Assemble and log every group without sending anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Override the import endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the access key sent with each request
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the pause between two submissions
    ///
    /// # Example
    /// ```
    /// use pairdish_import::PairingImporter;
    /// use std::time::Duration;
    ///
    /// let builder = PairingImporter::builder()
    ///     .catalog()
    ///     .delay(Duration::from_secs(2));
    /// ```
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Write the run summary to `path`
    pub fn summary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_path = Some(path.into());
        self.no_summary = false;
        self
    }

    /// Do not write a run summary
    pub fn no_summary(mut self) -> Self {
        self.summary_path = None;
        self.no_summary = true;
        self
    }

    /// Write a JSON backup of each assembled group into `dir`
    pub fn backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = Some(dir.into());
        self
    }

    pub fn recipe_policy(mut self, policy: RecipePolicy) -> Self {
        self.recipe_policy = Some(policy);
        self
    }

    /// Stop submitting further items once `flag` is set
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - The source file cannot be read or its header/document is unusable
    /// - The configuration cannot be loaded or the HTTP client cannot be built
    /// - The run summary cannot be written
    ///
    /// Problems with individual rows or uploads are recorded in the returned [`ImportRun`].
    ///
    /// # Example
    /// ```no_run
    /// # use pairdish_import::PairingImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let run = PairingImporter::builder()
    ///     .csv("dishes.csv")
    ///     .build()
    ///     .await?;
    /// println!("{} imported", run.successful());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportRun, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .csv(), .catalog(), .scraped(), .html() or .inputs()"
                    .to_string(),
            )
        })?;

        let mut config = match self.config {
            Some(config) => config,
            None => ImporterConfig::load()?,
        };
        if let Some(endpoint) = self.endpoint {
            config.upload.endpoint = Some(endpoint);
        }
        if let Some(key) = self.api_key {
            config.upload.api_key = Some(key);
        }
        if let Some(policy) = self.recipe_policy {
            config.batch.recipe_policy = policy;
        }

        let mut options = ImportOptions::from_config(&config);
        if let Some(delay) = self.delay {
            options.delay = delay;
        }
        if let Some(path) = self.summary_path {
            options.summary_path = Some(path);
        }
        if self.no_summary {
            options.summary_path = None;
        }
        if let Some(dir) = self.backup_dir {
            options.backup_dir = Some(dir);
        }

        let rows = load_source(source).await?;
        info!("Loaded {} pairing rows", rows.len());

        let uploader: Box<dyn Uploader> = if self.dry_run {
            Box::new(DryRunUploader)
        } else {
            Box::new(HttpUploader::new(&config.upload)?)
        };

        let mut importer = BatchImporter::new(uploader, options);
        if let Some(flag) = self.cancel {
            importer = importer.with_cancel(flag);
        }
        importer.run(rows).await
    }
}

async fn load_source(
    source: InputSource,
) -> Result<Vec<Result<PairingInput, ImportError>>, ImportError> {
    match source {
        InputSource::Csv(path) => {
            let data = tokio::fs::read(&path).await?;
            sources::read_csv(data.as_slice())
        }
        InputSource::Catalog => Ok(sources::catalog_inputs().into_iter().map(Ok).collect()),
        InputSource::Scraped(path) => {
            let text = tokio::fs::read_to_string(&path).await?;
            sources::parse_scraped(&text, DEFAULT_MIN_SIDES)
        }
        InputSource::Html { paths, dish } => {
            if paths.is_empty() {
                return Err(ImportError::BuilderError(
                    "No HTML pages specified".to_string(),
                ));
            }
            let mut pages = Vec::with_capacity(paths.len());
            for path in &paths {
                let html = tokio::fs::read_to_string(path).await?;
                pages.push(sources::extract_side_dishes(&html));
            }
            Ok(sources::html::pages_to_inputs(pages, dish.as_deref())
                .into_iter()
                .map(Ok)
                .collect())
        }
        InputSource::Inputs(inputs) => Ok(inputs.into_iter().map(Ok).collect()),
    }
}

/// Main entry point for the builder API
pub struct PairingImporter;

impl PairingImporter {
    /// Creates a new builder for a batch import
    ///
    /// # Example
    /// ```
    /// use pairdish_import::PairingImporter;
    ///
    /// let builder = PairingImporter::builder();
    /// ```
    pub fn builder() -> PairingImporterBuilder {
        PairingImporterBuilder::default()
    }
}
