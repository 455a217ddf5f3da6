use clap::{Args, Parser, Subcommand};
use log::debug;
use pairdish_import::{
    assemble, AssemblyOptions, ImportRun, ImporterConfig, PairingImporter, PairingInput,
    RecipePolicy, SideCandidate,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pairdish-import")]
#[command(about = "Enrich main dish / side dish pairings and bulk-import them", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Import endpoint URL (overrides config and WORKER_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Pause between submissions in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Where to write the run summary
    #[arg(long, global = true)]
    summary: Option<PathBuf>,

    /// Directory for per-pairing JSON backups
    #[arg(long, global = true)]
    backup_dir: Option<PathBuf>,

    /// Assemble and log pairings without uploading them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Only attach recipes to sides whose name suggests a preparation
    #[arg(long, global = true)]
    when_prepared: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV master list (keyword, side_dish_1 .. side_dish_15)
    Csv {
        path: PathBuf,
    },
    /// Import the built-in pairing table
    Catalog,
    /// Import a JSON array of scrape results
    Scraped {
        path: PathBuf,
    },
    /// Import side dishes listed on saved HTML pages
    Html {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Main dish all pages refer to (defaults to each page's title)
        #[arg(long)]
        dish: Option<String>,
    },
    /// Print the assembled pairing for a search phrase without uploading
    Preview {
        keyword: String,
        /// Side dish candidate (repeatable)
        #[arg(long = "side")]
        sides: Vec<String>,
    },
}

fn print_summary(run: &ImportRun) {
    println!("{}", "=".repeat(60));
    println!("IMPORT SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Total rows processed: {}", run.total_processed());
    println!("Successfully imported: {}", run.successful());
    println!("Failed: {}", run.failed());

    if !run.failures().is_empty() {
        println!("\nFailed imports:");
        for failure in run.failures() {
            println!("  - {}: {}", failure.dish, failure.error);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ImporterConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let policy = if cli.global.when_prepared {
        RecipePolicy::WhenPrepared
    } else {
        config.batch.recipe_policy
    };

    let builder = match cli.command {
        Commands::Preview { keyword, sides } => {
            let options = AssemblyOptions {
                recipe_policy: policy,
                site_name: config.site_name.clone(),
            };
            let input =
                PairingInput::from_keyword(keyword, sides.into_iter().map(SideCandidate::named));
            let group = assemble(&input, &options).ok_or("missing dish identifier")?;
            println!("{}", serde_json::to_string_pretty(&group)?);
            return Ok(());
        }
        Commands::Csv { path } => PairingImporter::builder().csv(path),
        Commands::Catalog => PairingImporter::builder().catalog(),
        Commands::Scraped { path } => PairingImporter::builder().scraped(path),
        Commands::Html { paths, dish } => PairingImporter::builder().html(paths, dish),
    };

    let mut builder = builder
        .config(config)
        .recipe_policy(policy)
        .dry_run(cli.global.dry_run);
    if let Some(endpoint) = cli.global.endpoint {
        builder = builder.endpoint(endpoint);
    }
    if let Some(ms) = cli.global.delay_ms {
        builder = builder.delay(Duration::from_millis(ms));
    }
    if let Some(path) = cli.global.summary {
        builder = builder.summary_path(path);
    }
    if let Some(dir) = cli.global.backup_dir {
        builder = builder.backup_dir(dir);
    }

    let run = builder.build().await?;
    print_summary(&run);

    Ok(())
}
