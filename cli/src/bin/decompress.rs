use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use modelzip_core::error::{Error, Result};
use modelzip_cli::args::Config;
use modelzip_cli::batch::{self, Instance};
use modelzip_cli::{logging, parser};

fn decompress_one(
    formula_path: &std::path::Path,
    compressed_path: &std::path::Path,
    output_path: &std::path::Path,
    heuristic: modelzip_core::HeuristicKind,
    flip_threshold: usize,
    codec_kind: modelzip_core::CodecKind,
) -> Result<()> {
    let formula_text = fs::read_to_string(formula_path).map_err(|e| Error::ArgumentError(e.to_string()))?;
    let mut formula = parser::dimacs::parse(&formula_text)?;
    let n = formula.num_variables();

    let bytes = fs::read(compressed_path).map_err(|e| Error::ArgumentError(e.to_string()))?;
    let assignment = modelzip_core::decompress(&mut formula, &bytes, heuristic, flip_threshold, codec_kind)?;

    let rendered = parser::model::render(&assignment, n);
    fs::write(output_path, rendered).map_err(|e| Error::ArgumentError(e.to_string()))?;

    Ok(())
}

fn run() -> Result<()> {
    let config = Config::parse();
    config.validate_paths()?;

    let heuristic = config.heuristic_kind();
    let codec_kind = config.codec_kind();

    if config.is_batch() {
        let instances = batch::discover(&config.formula, &config.model, &config.output)?;
        info!("processing {} instances", instances.len());

        batch::run_batch(instances, |inst: &Instance| -> Result<()> {
            decompress_one(&inst.formula, &inst.input, &inst.output, heuristic, config.flip_threshold, codec_kind)
        })?;
    } else {
        decompress_one(&config.formula, &config.model, &config.output, heuristic, config.flip_threshold, codec_kind)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
