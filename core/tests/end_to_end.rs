use std::collections::HashMap;

use modelzip_core::cnf::{Formula, Literal, VarId};
use modelzip_core::{compress, compress_bits, decompress, decompress_bits, CodecKind, HeuristicKind};

fn lit(signed: i64) -> Literal {
    if signed < 0 {
        Literal::negative((-signed) as VarId)
    } else {
        Literal::positive(signed as VarId)
    }
}

fn clause(signed: &[i64]) -> Vec<Literal> {
    signed.iter().copied().map(lit).collect()
}

fn model(pairs: &[(VarId, bool)]) -> HashMap<VarId, bool> {
    pairs.iter().copied().collect()
}

/// Scenario 1 from the end-to-end table: a single unit clause, the static
/// parsing-order heuristic, and the default Golomb-Rice codec.
#[test]
fn scenario_unit_clause_round_trips() {
    let mut formula = Formula::new(vec![clause(&[1])], 1);
    let m = model(&[(1, true)]);

    let bytes = compress(&mut formula, &m, HeuristicKind::None, 5, CodecKind::GolombRice { k: 2 }).unwrap();

    let mut formula2 = Formula::new(vec![clause(&[1])], 1);
    let recovered = decompress(&mut formula2, &bytes, HeuristicKind::None, 5, CodecKind::GolombRice { k: 2 }).unwrap();

    assert_eq!(recovered.get(&1), Some(&true));
}

/// Scenario 2: one of the two variables in a satisfied binary clause is
/// left OPEN (don't-care) because the loop stops as soon as every clause
/// is dead.
#[test]
fn scenario_binary_clause_leaves_one_variable_open() {
    let mut formula = Formula::new(vec![clause(&[1, 2])], 2);
    let m = model(&[(1, true), (2, true)]);

    let (bits, _) = compress_bits(&mut formula, &m, HeuristicKind::JeroslowWang { dynamic: true }, 5).unwrap();

    let mut formula2 = Formula::new(vec![clause(&[1, 2])], 2);
    let recovered = decompress_bits(&mut formula2, &bits, HeuristicKind::JeroslowWang { dynamic: true }, 5).unwrap();

    assert_eq!(recovered.len(), 1);
    let (&id, &value) = recovered.iter().next().unwrap();
    assert!(id == 1 || id == 2);
    assert_eq!(value, m[&id]);
}

/// Scenario 3: two clauses sharing variables, decoded assignment must
/// satisfy both and agree with the model everywhere it was visited.
#[test]
fn scenario_two_clauses_match_model() {
    let raw = vec![clause(&[1, 2]), clause(&[-1, 3])];
    let m = model(&[(1, true), (2, false), (3, true)]);

    let mut formula = Formula::new(raw.clone(), 3);
    let (bits, _) = compress_bits(&mut formula, &m, HeuristicKind::JeroslowWang { dynamic: true }, 5).unwrap();

    let mut formula2 = Formula::new(raw, 3);
    let recovered = decompress_bits(&mut formula2, &bits, HeuristicKind::JeroslowWang { dynamic: true }, 5).unwrap();

    for (&id, &value) in &recovered {
        assert_eq!(value, m[&id]);
    }
    let assignment = |id: VarId| recovered.get(&id).copied().unwrap_or(m[&id]);
    assert!(assignment(1) || assignment(2));
    assert!(!assignment(1) || assignment(3));
}

/// Scenario 4: MOMS-Freeman heuristic through the `zip` codec back-end.
#[test]
fn scenario_moms_through_zip_codec() {
    let raw = vec![clause(&[1, -2]), clause(&[-1, 2])];
    let m = model(&[(1, true), (2, true), (3, false), (4, false)]);

    let mut formula = Formula::new(raw.clone(), 4);
    let heuristic = HeuristicKind::MomsFreeman { dynamic: true, k: 10.0 };
    let bytes = compress(&mut formula, &m, heuristic, 3, CodecKind::Zip).unwrap();

    let mut formula2 = Formula::new(raw, 4);
    let recovered = decompress(&mut formula2, &bytes, heuristic, 3, CodecKind::Zip).unwrap();

    for (&id, &value) in &recovered {
        assert_eq!(value, m[&id]);
    }
}

/// Scenario 5: a wide clause through the `lz4` codec back-end with an
/// aggressive flip threshold.
#[test]
fn scenario_wide_clause_through_lz4_codec() {
    let raw = vec![clause(&[1, 2, 3, 4, 5])];
    let m = model(&[(1, false), (2, false), (3, false), (4, false), (5, true)]);

    let mut formula = Formula::new(raw.clone(), 5);
    let heuristic = HeuristicKind::JeroslowWang { dynamic: true };
    let bytes = compress(&mut formula, &m, heuristic, 2, CodecKind::Lz4).unwrap();

    let mut formula2 = Formula::new(raw, 5);
    let recovered = decompress(&mut formula2, &bytes, heuristic, 2, CodecKind::Lz4).unwrap();

    for (&id, &value) in &recovered {
        assert_eq!(value, m[&id]);
    }
}

/// Boundary: an empty formula never calls into the heuristic at all.
#[test]
fn boundary_empty_formula_round_trips() {
    let mut formula = Formula::new(vec![], 0);
    let m: HashMap<VarId, bool> = HashMap::new();

    let (bits, dont_care) = compress_bits(&mut formula, &m, HeuristicKind::None, 5).unwrap();
    assert!(bits.is_empty());
    assert_eq!(dont_care, 0);

    let mut formula2 = Formula::new(vec![], 0);
    let recovered = decompress_bits(&mut formula2, &bits, HeuristicKind::None, 5).unwrap();
    assert!(recovered.is_empty());
}

/// Boundary: a model id outside the formula's declared variable count is
/// never visited by the compression loop, so it is silently dropped
/// rather than desynchronizing the bit stream.
#[test]
fn boundary_model_larger_than_declared_n_is_ignored() {
    let mut formula = Formula::new(vec![clause(&[1])], 1);
    let m = model(&[(1, true), (2, true)]);

    let (bits, _) = compress_bits(&mut formula, &m, HeuristicKind::None, 5).unwrap();

    let mut formula2 = Formula::new(vec![clause(&[1])], 1);
    let recovered = decompress_bits(&mut formula2, &bits, HeuristicKind::None, 5).unwrap();

    assert_eq!(recovered.len(), 1);
    assert_eq!(recovered.get(&1), Some(&true));
}

/// Boundary: with a flip threshold of one, a single miss immediately
/// toggles `flip_model`; the round trip must still hold.
#[test]
fn boundary_flip_threshold_one_round_trips() {
    let mut formula = Formula::new(vec![clause(&[-1])], 1);
    let m = model(&[(1, true)]);

    let (bits, _) = compress_bits(&mut formula, &m, HeuristicKind::None, 1).unwrap();

    let mut formula2 = Formula::new(vec![clause(&[-1])], 1);
    let recovered = decompress_bits(&mut formula2, &bits, HeuristicKind::None, 1).unwrap();

    assert_eq!(recovered.get(&1), Some(&true));
}

/// Boundary: an all-negative model over an unconstrained set of unit
/// clauses must round-trip just like an all-positive one.
#[test]
fn boundary_all_negative_model_round_trips() {
    let raw = vec![clause(&[-1]), clause(&[-2]), clause(&[-3])];
    let m = model(&[(1, false), (2, false), (3, false)]);

    let mut formula = Formula::new(raw.clone(), 3);
    let (bits, _) = compress_bits(&mut formula, &m, HeuristicKind::Hybrid { dynamic: false, weight_percent: 50 }, 5).unwrap();

    let mut formula2 = Formula::new(raw, 3);
    let recovered =
        decompress_bits(&mut formula2, &bits, HeuristicKind::Hybrid { dynamic: false, weight_percent: 50 }, 5).unwrap();

    for (&id, &value) in &recovered {
        assert_eq!(value, m[&id]);
    }
}
