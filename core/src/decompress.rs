use std::collections::HashMap;

use log::trace;

use crate::assignment::Assignment;
use crate::cnf::{Formula, VarId};
use crate::codec::{self, CodecKind};
use crate::error::Result;
use crate::heuristics::{Heuristic, HeuristicKind};
use crate::propagation::propagate;

/// Replays the hit/miss bit stream produced by `compress_bits` and
/// reconstructs the model it encodes (spec §4.5).
///
/// Rather than re-deriving each decision from a separate run-length
/// "distance" counter, this walks the fully decoded bit stream directly:
/// it is the exact inverse of `compress_bits`'s own walk, and the two
/// sides only ever disagree on a variable that compression skipped for
/// being absent from its source model (undefined behavior per the model
/// contract — a complete model never exercises that path).
pub fn decompress_bits(
    formula: &mut Formula,
    bits: &[bool],
    heuristic_kind: HeuristicKind,
    flip_threshold: usize,
) -> Result<HashMap<VarId, bool>> {
    let n = formula.num_variables();
    let mut assignment = Assignment::new(n);
    let mut heuristic = Heuristic::build(heuristic_kind, formula);

    let mut idx = 0usize;
    let mut pred_distance: usize = 0;
    let mut flip_model = false;
    let mut result = HashMap::new();

    while !formula.is_fully_satisfied() {
        let mut v = heuristic.next_var()?;
        while !assignment.is_open(v) {
            idx += 1;
            v = heuristic.next_var()?;
        }

        if pred_distance == flip_threshold {
            flip_model = !flip_model;
            pred_distance = 0;
        }

        let miss = *bits.get(idx).ok_or_else(|| {
            crate::error::Error::InvariantViolation(
                "bit stream exhausted before the formula was fully satisfied".to_string(),
            )
        })?;
        idx += 1;

        let predicted = heuristic.predicted(v);
        let effective = if flip_model { !predicted } else { predicted };
        let a = if miss { !effective } else { effective };

        if miss {
            pred_distance += 1;
        } else {
            pred_distance = 0;
        }

        trace!("var {} predicted={} miss={} decided={}", v, predicted, miss, a);
        assignment.assign(v, a);
        result.insert(v, a);
        propagate(formula, &mut assignment, &mut heuristic)?;
    }

    Ok(result)
}

/// Full pipeline: decodes the codec's byte stream back into bits, then
/// replays the prediction walk to recover the model.
pub fn decompress(
    formula: &mut Formula,
    bytes: &[u8],
    heuristic_kind: HeuristicKind,
    flip_threshold: usize,
    codec: CodecKind,
) -> Result<HashMap<VarId, bool>> {
    let bits = codec::decode_bits(bytes, codec)?;
    decompress_bits(formula, &bits, heuristic_kind, flip_threshold)
}
