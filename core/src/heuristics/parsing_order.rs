use super::pqueue::{self, PriorityQueue};
use crate::cnf::{Formula, VarId};

/// Score(v) = -id(v): smallest id has highest priority. Predicted polarity
/// follows which occurrence count dominates at parse time. Never updated
/// on propagation.
pub struct ParsingOrderHeuristic {
    queue: PriorityQueue,
    predicted: Vec<bool>,
}

impl ParsingOrderHeuristic {
    pub fn new(formula: &Formula) -> ParsingOrderHeuristic {
        let n = formula.num_variables();
        let queue = pqueue::build((1..=n).map(|id| (id, -(id as f64))));
        let predicted = (1..=n)
            .map(|id| {
                let var = formula.variable(id);
                var.nr_pos_occ >= var.nr_neg_occ
            })
            .collect();
        ParsingOrderHeuristic { queue, predicted }
    }

    pub fn next_var(&mut self) -> Option<VarId> {
        self.queue.pop().map(|(id, _)| id)
    }

    pub fn predicted(&self, v: VarId) -> bool {
        self.predicted[v - 1]
    }

    pub fn on_clause_satisfied(&mut self, _clause: usize, _formula: &Formula) {
        // Static heuristic: no ranking updates on propagation.
    }
}
