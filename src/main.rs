// Command-line entry point for depscan.

use anyhow::{bail, Context, Result};
use clap::Parser;
use depscan::application::AnalyzeUsecase;
use depscan::infrastructure::{ProjectLoader, ScanParser, TextualDependencyExtractor};
use depscan::ports::dot_exporter::DotExporter;
use depscan::ports::json_exporter::{self, JsonExporter};
use depscan::ports::GraphExporter;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input source file path (can specify multiple)
    #[arg(short, long)]
    input: Vec<String>,

    /// Input source folder(s), scanned recursively for .rs files
    #[arg(short = 'd', long)]
    folder: Vec<String>,

    /// Workspace Cargo.toml whose member crates should be scanned
    #[arg(long)]
    workspace: Option<String>,

    /// Output directory for dependancies.json / dependancies.dot
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Also write the raw function records as analysis.json
    #[arg(long)]
    dump_records: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut sources: Vec<(String, String)> = Vec::new();

    for input_file in &cli.input {
        match fs::read_to_string(input_file) {
            Ok(code) => sources.push((input_file.clone(), code)),
            Err(e) => eprintln!("[WARN] cannot read input file {}: {}", input_file, e),
        }
    }

    for folder in &cli.folder {
        sources.extend(ProjectLoader::collect_dir(Path::new(folder))?);
    }

    if let Some(manifest) = &cli.workspace {
        sources.extend(ProjectLoader::load_workspace(manifest)?);
    }

    if sources.is_empty() {
        bail!("provide at least one --input <file>, --folder <dir> or --workspace <Cargo.toml>");
    }

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory {}", cli.output.display()))?;

    let parser = ScanParser;
    let extractor = TextualDependencyExtractor::default();
    let exporters: [(&dyn GraphExporter, PathBuf); 2] = [
        (&JsonExporter, cli.output.join("dependancies.json")),
        (&DotExporter, cli.output.join("dependancies.dot")),
    ];

    let usecase = AnalyzeUsecase {
        parser: &parser,
        extractor: &extractor,
        exporters: &exporters,
    };

    let output = usecase.run(&sources)?;

    if cli.dump_records {
        json_exporter::dump_records(&output.records, &cli.output.join("analysis.json"))?;
    }

    println!(
        "Analysis completed: {} functions from {} files, {} graph nodes. Output written to {}",
        output.records.len(),
        sources.len(),
        output.graph.nodes.len(),
        cli.output.display()
    );

    Ok(())
}
