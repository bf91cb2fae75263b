use anyhow::Result;
use clap::Parser;
use sonsin_exporter::export::{DeleteListOutcome, LogProgress};
use sonsin_exporter::validation::{check_after_export, validate_export};
use sonsin_exporter::{ExportConfig, ExportPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sonsin-exporter")]
#[command(about = "Generate jukebox SON/SIN files from a song catalog workbook", long_about = None)]
struct Args {
    /// Catalog workbook with Song, Sing and optional Delete Song sheets
    input: String,

    /// Reference workbook
    #[arg(short = 'r', long, default_value = "Reference/Reference.xlsx")]
    reference: String,

    /// Output directory (defaults to the catalog workbook's directory)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Export only the first N song rows
    #[arg(long)]
    limit: Option<usize>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only validate existing output (don't run a new export)
    #[arg(long)]
    validate: bool,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = ExportConfig::new(expand(&args.input)).with_reference(expand(&args.reference));
    if let Some(output) = &args.output {
        config = config.with_output_dir(expand(output));
    }
    if let Some(limit) = args.limit {
        config = config.with_row_limit(limit);
    }

    // If validate-only mode, just validate and exit
    if args.validate {
        log::info!("Validation mode - checking existing output...");
        validate_export(&config.output_dir)?;
        log::info!("✅ Validation completed!");
        return Ok(());
    }

    let summary = ExportPipeline::new(config, LogProgress).export()?;

    log::info!(
        "Exported {} songs and {} singers to {:?}",
        summary.songs,
        summary.singers,
        summary.output_dir
    );
    match &summary.delete_list {
        DeleteListOutcome::Written { enabled, disabled } => {
            log::info!("Delete list: {} enabled, {} disabled", enabled, disabled)
        }
        DeleteListOutcome::Skipped(reason) => log::warn!("Delete list skipped: {}", reason),
    }

    // Auto-validate after export; the files are written either way
    log::info!("Running post-export validation...");
    if check_after_export(&summary.output_dir).is_some() {
        log::info!("✅ Validation passed!");
    }

    Ok(())
}
