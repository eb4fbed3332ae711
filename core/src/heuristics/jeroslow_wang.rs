use super::pqueue::{self, PriorityQueue, Priority};
use crate::cnf::{Formula, VarId};

/// J+(v)/J-(v) weighted by 2^-|c| over alive clauses; score is their sum,
/// predicted polarity favors whichever side is larger. The dynamic variant
/// re-keys affected variables whenever a clause they occur in is satisfied.
pub struct JeroslowWangHeuristic {
    dynamic: bool,
    j_pos: Vec<f64>,
    j_neg: Vec<f64>,
    queue: PriorityQueue,
}

pub(crate) fn clause_weight(size: usize) -> f64 {
    2f64.powi(-(size as i32))
}

impl JeroslowWangHeuristic {
    pub fn new(formula: &Formula, dynamic: bool) -> JeroslowWangHeuristic {
        let n = formula.num_variables();
        let mut j_pos = vec![0.0; n];
        let mut j_neg = vec![0.0; n];

        for id in 1..=n {
            let var = formula.variable(id);
            j_pos[id - 1] = var
                .pos_occ
                .iter()
                .map(|&c| clause_weight(formula.clause_len(c)))
                .sum();
            j_neg[id - 1] = var
                .neg_occ
                .iter()
                .map(|&c| clause_weight(formula.clause_len(c)))
                .sum();
        }

        let queue = pqueue::build((1..=n).map(|id| (id, j_pos[id - 1] + j_neg[id - 1])));

        JeroslowWangHeuristic { dynamic, j_pos, j_neg, queue }
    }

    pub fn next_var(&mut self) -> Option<VarId> {
        self.queue.pop().map(|(id, _)| id)
    }

    pub fn predicted(&self, v: VarId) -> bool {
        self.j_pos[v - 1] >= self.j_neg[v - 1]
    }

    pub fn on_clause_satisfied(&mut self, clause: usize, formula: &Formula) {
        if !self.dynamic {
            return;
        }
        let weight = clause_weight(formula.clause_len(clause));
        for lit in formula.clauses[clause].literals.clone() {
            let v = lit.id;
            if self.queue.get(&v).is_none() {
                continue;
            }
            if lit.negative {
                self.j_neg[v - 1] -= weight;
            } else {
                self.j_pos[v - 1] -= weight;
            }
            let score = self.j_pos[v - 1] + self.j_neg[v - 1];
            self.queue.change_priority(&v, Priority { score, id: v });
        }
    }
}
