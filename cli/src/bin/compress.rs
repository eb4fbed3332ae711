use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use modelzip_core::cnf::Formula;
use modelzip_core::codec::bitvector::diff_encode;
use modelzip_core::codec::{self, CodecKind};
use modelzip_core::error::{Error, Result};
use modelzip_core::heuristics::HeuristicKind;
use modelzip_core::stats::{CompressionInfo, StatsOutput};
use modelzip_cli::args::Config;
use modelzip_cli::batch::{self, Instance};
use modelzip_cli::{logging, parser};

fn compress_one(
    formula_path: &std::path::Path,
    model_path: &std::path::Path,
    output_path: &std::path::Path,
    heuristic: HeuristicKind,
    flip_threshold: usize,
    codec_kind: CodecKind,
) -> Result<CompressionInfo> {
    let overall_start = Instant::now();

    let parse_start = Instant::now();
    let formula_text = fs::read_to_string(formula_path).map_err(|e| Error::ArgumentError(e.to_string()))?;
    let mut formula = parser::dimacs::parse(&formula_text)?;
    let model_text = fs::read_to_string(model_path).map_err(|e| Error::ArgumentError(e.to_string()))?;
    let model = parser::model::parse(&model_text)?;
    let parsing_time = parse_start.elapsed();

    let (bits, dont_care) = modelzip_core::compress_bits(&mut formula, &model, heuristic, flip_threshold)?;
    let diffs = diff_encode(&bits);
    let bytes = codec::backend::encode(&diffs, codec_kind)?;

    fs::write(output_path, &bytes).map_err(|e| Error::ArgumentError(e.to_string()))?;

    let model_file_size = fs::metadata(model_path).map(|m| m.len()).unwrap_or(0);

    let mut hits = 0usize;
    for &b in &bits {
        if !b {
            hits += 1;
        }
    }
    let hit_rate = if bits.is_empty() { 0.0 } else { hits as f64 / bits.len() as f64 };

    Ok(CompressionInfo::new(
        formula_path.display().to_string(),
        model_path.display().to_string(),
        formula.clauses.len(),
        model.len(),
        formula.num_variables(),
        model_file_size,
        bytes.len() as u64,
        bits.len(),
        diffs.len(),
        dont_care,
        hit_rate,
        parsing_time,
        overall_start.elapsed(),
    ))
}

fn run() -> Result<()> {
    let config = Config::parse();
    config.validate_paths()?;

    let heuristic = config.heuristic_kind();
    let codec_kind = config.codec_kind();

    if config.is_batch() {
        let instances = batch::discover(&config.formula, &config.model, &config.output)?;
        info!("processing {} instances", instances.len());

        let report: Vec<CompressionInfo> = batch::run_batch(instances, |inst: &Instance| {
            compress_one(&inst.formula, &inst.input, &inst.output, heuristic, config.flip_threshold, codec_kind)
        })?;

        let stats = StatsOutput::new(report);
        println!("{}", stats.render_table());
        if let Some(csv_path) = &config.stats_csv {
            let file = fs::File::create(csv_path).map_err(|e| Error::ArgumentError(e.to_string()))?;
            stats.write_csv(file).map_err(|e| Error::ArgumentError(e.to_string()))?;
        }
    } else {
        compress_one(&config.formula, &config.model, &config.output, heuristic, config.flip_threshold, codec_kind)?;
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
