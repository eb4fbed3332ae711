mod hybrid;
mod jeroslow_wang;
mod moms_freeman;
mod parsing_order;
pub mod pqueue;

use crate::cnf::{Formula, VarId};
use crate::error::{Error, Result};
use hybrid::HybridHeuristic;
use jeroslow_wang::JeroslowWangHeuristic;
use moms_freeman::MomsFreemanHeuristic;
use parsing_order::ParsingOrderHeuristic;

/// Selects which heuristic variant to build, and its tunable parameters.
/// Mirrors the `-h`, `-mp`, `-hp` CLI flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeuristicKind {
    None,
    JeroslowWang { dynamic: bool },
    MomsFreeman { dynamic: bool, k: f64 },
    Hybrid { dynamic: bool, weight_percent: i64 },
}

/// Tagged-enum polymorphism over the four heuristic variants: a shared
/// priority-queue adapter backs each one, but the variants share no
/// mutable state, so an inheritance hierarchy would buy nothing.
pub enum Heuristic {
    ParsingOrder(ParsingOrderHeuristic),
    JeroslowWang(JeroslowWangHeuristic),
    MomsFreeman(MomsFreemanHeuristic),
    Hybrid(HybridHeuristic),
}

impl Heuristic {
    pub fn build(kind: HeuristicKind, formula: &Formula) -> Heuristic {
        match kind {
            HeuristicKind::None => Heuristic::ParsingOrder(ParsingOrderHeuristic::new(formula)),
            HeuristicKind::JeroslowWang { dynamic } => {
                Heuristic::JeroslowWang(JeroslowWangHeuristic::new(formula, dynamic))
            }
            HeuristicKind::MomsFreeman { dynamic, k } => {
                Heuristic::MomsFreeman(MomsFreemanHeuristic::new(formula, dynamic, k))
            }
            HeuristicKind::Hybrid { dynamic, weight_percent } => {
                Heuristic::Hybrid(HybridHeuristic::new(formula, dynamic, weight_percent))
            }
        }
    }

    /// Extracts the highest-priority OPEN variable id, tie-broken by
    /// ascending id. Fails if the heap is empty before every clause is
    /// dead, which signals the input model is not actually satisfying.
    pub fn next_var(&mut self) -> Result<VarId> {
        let next = match self {
            Heuristic::ParsingOrder(h) => h.next_var(),
            Heuristic::JeroslowWang(h) => h.next_var(),
            Heuristic::MomsFreeman(h) => h.next_var(),
            Heuristic::Hybrid(h) => h.next_var(),
        };
        next.ok_or_else(|| {
            Error::UnsatisfiableInput(
                "heuristic queue emptied before every clause was satisfied".to_string(),
            )
        })
    }

    pub fn predicted(&self, v: VarId) -> bool {
        match self {
            Heuristic::ParsingOrder(h) => h.predicted(v),
            Heuristic::JeroslowWang(h) => h.predicted(v),
            Heuristic::MomsFreeman(h) => h.predicted(v),
            Heuristic::Hybrid(h) => h.predicted(v),
        }
    }

    pub fn on_clause_satisfied(&mut self, clause: usize, formula: &Formula) {
        match self {
            Heuristic::ParsingOrder(h) => h.on_clause_satisfied(clause, formula),
            Heuristic::JeroslowWang(h) => h.on_clause_satisfied(clause, formula),
            Heuristic::MomsFreeman(h) => h.on_clause_satisfied(clause, formula),
            Heuristic::Hybrid(h) => h.on_clause_satisfied(clause, formula),
        }
    }
}
