use std::collections::HashMap;

use log::trace;

use crate::assignment::Assignment;
use crate::cnf::{Formula, VarId};
use crate::codec::{self, CodecKind};
use crate::error::Result;
use crate::heuristics::{Heuristic, HeuristicKind};
use crate::propagation::propagate;

/// Runs the prediction-coder walk (spec §4.4) and returns the raw hit/miss
/// bit stream, before the bitvector/Golomb-Rice pipeline is applied.
///
/// The heuristic's variable universe is exactly `formula.num_variables()`;
/// a model entry whose id falls outside that range is never visited by
/// this loop (the formula, not the model, determines which ids the
/// decompressor can ever reconstruct without a model of its own), so such
/// entries are silently ignored rather than growing the loop's state.
pub fn compress_bits(
    formula: &mut Formula,
    model: &HashMap<VarId, bool>,
    heuristic_kind: HeuristicKind,
    flip_threshold: usize,
) -> Result<(Vec<bool>, usize)> {
    let n = formula.num_variables();
    let mut assignment = Assignment::new(n);
    let mut heuristic = Heuristic::build(heuristic_kind, formula);

    let mut bits = Vec::new();
    let mut pred_distance: usize = 0;
    let mut flip_model = false;

    while !formula.is_fully_satisfied() {
        let mut v = heuristic.next_var()?;
        while !assignment.is_open(v) || !model.contains_key(&v) {
            bits.push(true);
            v = heuristic.next_var()?;
        }

        if pred_distance == flip_threshold {
            flip_model = !flip_model;
            pred_distance = 0;
        }

        let a = model[&v];
        let predicted = heuristic.predicted(v);
        let hit = if flip_model { a == !predicted } else { a == predicted };

        if hit {
            bits.push(false);
            pred_distance = 0;
        } else {
            bits.push(true);
            pred_distance += 1;
        }
        trace!("var {} predicted={} actual={} hit={}", v, predicted, a, hit);

        assignment.assign(v, a);
        propagate(formula, &mut assignment, &mut heuristic)?;
    }

    let dont_care_vars = (1..=n).filter(|&v| assignment.is_open(v)).count();
    Ok((bits, dont_care_vars))
}

/// Full pipeline: runs the compression loop, then encodes the resulting
/// bit stream via the chosen codec back-end.
pub fn compress(
    formula: &mut Formula,
    model: &HashMap<VarId, bool>,
    heuristic_kind: HeuristicKind,
    flip_threshold: usize,
    codec: CodecKind,
) -> Result<Vec<u8>> {
    let (bits, _) = compress_bits(formula, model, heuristic_kind, flip_threshold)?;
    codec::encode_bits(&bits, codec)
}
