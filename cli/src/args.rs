use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use modelzip_core::error::{Error, Result};
use modelzip_core::{CodecKind, HeuristicKind};

/// `-h` flag values; mirrors the original drafts' `jewa`/`moms`/`hybr`
/// naming rather than spelling out the full heuristic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    #[value(name = "none")]
    None,
    #[value(name = "jewa")]
    Jewa,
    #[value(name = "jewa_dyn")]
    JewaDyn,
    #[value(name = "moms")]
    Moms,
    #[value(name = "moms_dyn")]
    MomsDyn,
    #[value(name = "hybr")]
    Hybr,
    #[value(name = "hybr_dyn")]
    HybrDyn,
}

/// `-c` flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodecArg {
    #[value(name = "golrice")]
    Golrice,
    #[value(name = "zip")]
    Zip,
    #[value(name = "lz4")]
    Lz4,
}

/// Shared flag surface for both binaries (§6); the three positional paths
/// are `formula`, `model`/`compressed`, and `output`, in that order.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// DIMACS CNF file, or a directory of them in batch mode.
    pub formula: PathBuf,

    /// Model file (compress) or compressed artifact (decompress), or a
    /// directory of either in batch mode.
    pub model: PathBuf,

    /// Destination file, or destination directory in batch mode.
    pub output: PathBuf,

    #[arg(short = 'h', long = "heuristic", value_enum, default_value_t = HeuristicArg::JewaDyn)]
    pub heuristic: HeuristicArg,

    #[arg(short = 'c', long = "codec", value_enum, default_value_t = CodecArg::Golrice)]
    pub codec: CodecArg,

    #[arg(long = "mp", default_value_t = 10.0)]
    pub moms_parameter: f64,

    #[arg(long = "grp", default_value_t = 2)]
    pub golomb_parameter: u32,

    #[arg(short = 'p', long = "flip-threshold", default_value_t = 5)]
    pub flip_threshold: usize,

    #[arg(long = "hp", default_value_t = 50)]
    pub hybrid_parameter: i64,

    /// Optional CSV report, only meaningful in batch mode.
    #[arg(long = "stats-csv")]
    pub stats_csv: Option<PathBuf>,
}

impl Config {
    pub fn heuristic_kind(&self) -> HeuristicKind {
        match self.heuristic {
            HeuristicArg::None => HeuristicKind::None,
            HeuristicArg::Jewa => HeuristicKind::JeroslowWang { dynamic: false },
            HeuristicArg::JewaDyn => HeuristicKind::JeroslowWang { dynamic: true },
            HeuristicArg::Moms => HeuristicKind::MomsFreeman { dynamic: false, k: self.moms_parameter },
            HeuristicArg::MomsDyn => HeuristicKind::MomsFreeman { dynamic: true, k: self.moms_parameter },
            HeuristicArg::Hybr => HeuristicKind::Hybrid { dynamic: false, weight_percent: self.hybrid_parameter },
            HeuristicArg::HybrDyn => HeuristicKind::Hybrid { dynamic: true, weight_percent: self.hybrid_parameter },
        }
    }

    pub fn codec_kind(&self) -> CodecKind {
        match self.codec {
            CodecArg::Golrice => CodecKind::GolombRice { k: self.golomb_parameter },
            CodecArg::Zip => CodecKind::Zip,
            CodecArg::Lz4 => CodecKind::Lz4,
        }
    }

    /// Validates the three positional paths are either a single-triple
    /// (`formula` and `model` are existing regular files, `output` not yet
    /// a directory) or a batch run (`formula` and `model` are existing
    /// directories, `output` not yet a regular file) (§6/§11).
    pub fn validate_paths(&self) -> Result<()> {
        let single_triple = self.formula.is_file() && self.model.is_file() && !self.output.is_dir();
        let batch = self.formula.is_dir() && self.model.is_dir() && !self.output.is_file();

        if single_triple || batch {
            Ok(())
        } else {
            Err(Error::ArgumentError(
                "formula, model, and output must either all be existing files or all be directories".to_string(),
            ))
        }
    }

    pub fn is_batch(&self) -> bool {
        self.model.is_dir()
    }
}
