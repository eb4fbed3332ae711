//! Core engine: CNF/model data model, unit propagation, branching
//! heuristics, and the prediction-coder compression pipeline.

pub mod assignment;
pub mod cnf;
pub mod codec;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod heuristics;
pub mod propagation;
pub mod stats;

pub use assignment::{Assignment, Cell};
pub use cnf::{Clause, Formula, Literal, VarId, Variable};
pub use codec::CodecKind;
pub use compress::{compress, compress_bits};
pub use decompress::{decompress, decompress_bits};
pub use error::{Error, Result};
pub use heuristics::{Heuristic, HeuristicKind};
pub use propagation::propagate;
