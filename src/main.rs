use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reqscan::config::{ScanConfig, DEFAULT_SKIP_DIRS};
use reqscan::inventory::{InventoryProvider, PipFreeze};
use reqscan::manifest::{
    confirm_overwrite, manifest_path, write_manifest, OverwriteChoice, MANIFEST_FILE_NAME,
};
use reqscan::parser::collect_package_names;
use reqscan::report::text::write_package_table;
use reqscan::report::{self, ReportFormat, ScanReport};
use reqscan::resolve::resolve_used;
use reqscan::scan::{extract_imports, walk_files};

#[derive(Parser)]
#[command(name = "reqscan")]
#[command(version = "0.1.0")]
#[command(about = "Pinned requirements.txt generator driven by import analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a project tree and generate a pinned requirements.txt
    Generate {
        /// Project root to scan (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Directory name to prune from the walk; repeatable.
        /// Replaces the default list (env, venv, conda) when given.
        #[arg(short, long = "skip", value_name = "NAME")]
        skip: Vec<String>,

        /// Python interpreter used to list installed packages
        #[arg(long, default_value = "python")]
        python: String,

        /// Print a scan report in the given format (text, json)
        #[arg(long, value_name = "FORMAT")]
        report: Option<ReportFormat>,

        /// Overwrite an existing requirements.txt without prompting
        #[arg(short = 'y', long)]
        yes: bool,

        /// Log additional per-stage detail
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            path,
            skip,
            python,
            report,
            yes,
            verbose,
        }) => {
            let skip_dirs = if skip.is_empty() {
                DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect()
            } else {
                skip
            };
            let config = ScanConfig::new(path)
                .with_skip_dirs(skip_dirs)
                .with_verbose(verbose);
            generate(&config, &python, report, yes)
        }
        Some(Commands::Version) => {
            println!("reqscan v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("reqscan - pinned requirements generator");
            println!("Run 'reqscan generate' to scan a project and write requirements.txt");
            println!("Run 'reqscan --help' for more information");
            Ok(())
        }
    }
}

fn generate(
    config: &ScanConfig,
    python: &str,
    report_format: Option<ReportFormat>,
    assume_yes: bool,
) -> anyhow::Result<()> {
    println!("Walking through \"{}\"...", config.root.display());
    let walk = walk_files(&config.root, &config.skip_dirs);
    for warning in &walk.warnings {
        eprintln!("warning: {}", warning);
    }
    println!(
        "Found {} files in {} directories and subdirectories.",
        walk.stats.files_found, walk.stats.dirs_visited
    );
    if config.verbose {
        for file in &walk.files {
            println!("\t{}", file.display());
        }
    }

    println!("Analyzing imported packages in \"*.py\" files...");
    let extraction = extract_imports(&walk.files);
    for warning in &extraction.warnings {
        eprintln!("warning: {}", warning);
    }
    println!(
        "Found {} import statements in {} python files.",
        extraction.imports.len(),
        extraction.files_scanned
    );

    let imported = collect_package_names(extraction.imports.iter().map(|i| i.text.as_str()));
    println!(
        "Found {} different imported packages in total.",
        imported.len()
    );
    if config.verbose {
        for name in &imported {
            println!("\t{}", name);
        }
    }

    println!("\nLooking for installed package versions...");
    let inventory = PipFreeze::with_interpreter(python)
        .installed()
        .context("failed to list installed packages")?;
    println!(
        "Found {} installed packages in total.",
        inventory.packages.len()
    );
    if inventory.skipped > 0 {
        println!(
            "Skipped {} inventory entries without a '==' version pin.",
            inventory.skipped
        );
    }
    if config.verbose {
        let entries: Vec<(String, String)> = inventory
            .packages
            .iter()
            .map(|p| (p.name.clone(), p.version.clone()))
            .collect();
        write_package_table(&mut io::stdout(), &entries, true)?;
    }

    let used = resolve_used(&imported, &inventory.packages);
    println!(
        "\nFound {} used (non standard library) packages in total.",
        used.len()
    );
    if config.verbose {
        let entries: Vec<(String, String)> = used
            .iter()
            .map(|u| (u.name.clone(), u.version.clone()))
            .collect();
        write_package_table(&mut io::stdout(), &entries, false)?;
    }

    if let Some(format) = report_format {
        let scan_report = ScanReport {
            root: config.root.display().to_string(),
            dirs_visited: walk.stats.dirs_visited,
            dirs_skipped: walk.stats.dirs_skipped,
            files_found: walk.stats.files_found,
            files_scanned: extraction.files_scanned,
            import_statements: extraction.imports.len(),
            imported_packages: imported.clone(),
            installed_packages: inventory.packages.len(),
            skipped_inventory_entries: inventory.skipped,
            used_packages: used.clone(),
        };
        println!();
        report::export(format, &scan_report, &mut io::stdout())
            .context("failed to render the scan report")?;
    }

    let path = manifest_path(&config.root);
    println!("\nGenerating \"{}\"...", path.display());
    let overwrite = if path.exists() && !assume_yes {
        let stdin = io::stdin();
        confirm_overwrite(&path, stdin.lock(), &mut io::stdout())? == OverwriteChoice::Overwrite
    } else {
        true
    };

    if overwrite {
        write_manifest(&path, &used)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\"{}\" generated successfully.", MANIFEST_FILE_NAME);
    } else {
        println!("\"{}\" has not been overwritten.", MANIFEST_FILE_NAME);
    }

    Ok(())
}
