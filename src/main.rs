use std::io;
use std::process::ExitCode;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use fontmod::cli::{print_families, prompt_family, Args};
use fontmod::models::{Config, FamilyChoice, FamilySet};
use fontmod::module::{package, DirectoryArchiver, Workspace};
use fontmod::organizer::{classify_fonts, select_weights, SelectionMode};
use fontmod::utils::init_logging;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.into_config().context("Invalid arguments")?;
    debug!("Running with {:?}", config);

    // Dropped when run returns, removing the staging tree on every path
    let workspace = Workspace::new().context("Could not create a staging workspace")?;

    println!("Reading fonts from {} ...", config.source.display());
    let families = classify_fonts(&config.source)
        .with_context(|| format!("Could not classify fonts in {}", config.source.display()))?;

    if config.list_only {
        print_families(&families, &mut io::stdout())?;
        return Ok(());
    }

    let mode = selection_mode(&config, &families)?;
    let outcome = select_weights(&families, &mode)
        .with_context(|| format!("Could not select weights for {}", mode))?;

    let archiver = DirectoryArchiver::new(&config.output_dir);
    let report = package(&config, &outcome, &workspace, &archiver).context("Packaging failed")?;

    println!("Font module summary:");
    println!("  - {}", report.descriptor.description);
    for (slot, path) in &report.fonts {
        println!("  - fontw{}.ttf <- {}", slot, path.display());
    }
    println!("  - module: {}", report.location.display());
    if let Some(update_json) = &report.update_json {
        println!("  - update descriptor: {}", update_json.display());
    }

    Ok(())
}

fn selection_mode(config: &Config, families: &FamilySet) -> anyhow::Result<SelectionMode> {
    let mode = match &config.family_choice {
        FamilyChoice::All => SelectionMode::AllFamilies,
        FamilyChoice::Named(name) => SelectionMode::SingleFamily(name.clone()),
        FamilyChoice::Prompt => {
            let stdin = io::stdin();
            let name = prompt_family(families, &mut stdin.lock(), &mut io::stdout())?;
            SelectionMode::SingleFamily(name)
        }
    };
    Ok(mode)
}
