use log::trace;

use crate::assignment::Assignment;
use crate::cnf::Formula;
use crate::error::{Error, Result};
use crate::heuristics::Heuristic;

/// Drains the trail from `head` to its current end, walking occurrence
/// lists and detecting unit clauses as it goes. Satisfied clauses notify
/// the heuristic *before* their storage is cleared, so a heuristic may
/// still inspect their literals and size while reacting to the event.
pub fn propagate(formula: &mut Formula, assignment: &mut Assignment, heuristic: &mut Heuristic) -> Result<()> {
    while assignment.has_pending() {
        let v = assignment.advance_head();
        let value = assignment
            .get(v)
            .as_bool()
            .ok_or_else(|| Error::InvariantViolation(format!("propagated variable {} is still OPEN", v)))?;

        let (sat_list, shrink_list) = {
            let var = formula.variable(v);
            if value {
                (var.pos_occ.clone(), var.neg_occ.clone())
            } else {
                (var.neg_occ.clone(), var.pos_occ.clone())
            }
        };

        for c in sat_list {
            if !formula.clauses[c].is_alive() {
                continue;
            }
            heuristic.on_clause_satisfied(c, formula);
            let literals = formula.clauses[c].kill();
            for lit in literals {
                let var = formula.variable_mut(lit.id);
                if lit.is_positive() {
                    var.nr_pos_occ -= 1;
                } else {
                    var.nr_neg_occ -= 1;
                }
            }
        }

        for c in shrink_list {
            if !formula.clauses[c].is_alive() {
                continue;
            }
            formula.clauses[c].remaining -= 1;
            if formula.clauses[c].remaining == 1 {
                let forced = formula.clauses[c]
                    .literals
                    .iter()
                    .find(|lit| assignment.is_open(lit.id))
                    .copied()
                    .ok_or_else(|| {
                        Error::InvariantViolation(format!("unit clause {} has no OPEN literal", c))
                    })?;
                trace!("unit clause {} forces var {} to {}", c, forced.id, forced.is_positive());
                assignment.assign(forced.id, forced.is_positive());
            }
        }
    }
    Ok(())
}
