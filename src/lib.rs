pub mod assembler;
pub mod builder;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod importer;
pub mod model;
pub mod sources;
pub mod uploader;

pub use assembler::{assemble, AssemblyOptions};
pub use builder::{InputSource, PairingImporter, PairingImporterBuilder};
pub use config::{load_config, ImporterConfig};
pub use enrichment::RecipePolicy;
pub use error::{ImportError, UploadError};
pub use importer::{BatchImporter, ImportFailure, ImportOptions, ImportRun};
pub use model::{
    DietaryTag, DietaryTags, DishRecord, DishType, PairingGroup, PairingInput, Recipe,
    SideCandidate,
};
pub use uploader::{DryRunUploader, HttpUploader, Uploader};

/// Assemble the pairing group for a search phrase with default options
///
/// # Example
/// ```
/// use pairdish_import::assemble_keyword;
///
/// let group = assemble_keyword(
///     "what to serve with beef wellington",
///     ["Roasted Potatoes", "Yorkshire Pudding"],
/// )
/// .unwrap();
/// assert_eq!(group.main_dish.slug, "beef-wellington");
/// ```
pub fn assemble_keyword<I, S>(keyword: &str, sides: I) -> Option<PairingGroup>
where
    I: IntoIterator<Item = S>,
    S: Into<SideCandidate>,
{
    assemble(
        &PairingInput::from_keyword(keyword, sides),
        &AssemblyOptions::default(),
    )
}

/// Run a batch over in-memory inputs with the given uploader and options
pub async fn import_pairings<U: Uploader>(
    uploader: U,
    inputs: Vec<PairingInput>,
    options: ImportOptions,
) -> Result<ImportRun, ImportError> {
    BatchImporter::new(uploader, options)
        .run(inputs.into_iter().map(Ok))
        .await
}
