use super::jeroslow_wang::clause_weight;
use super::moms_freeman::{counts_at, min_clause_length, moms_score};
use super::pqueue::{self, PriorityQueue, Priority};
use crate::cnf::{Formula, VarId};

const DEFAULT_MOMS_EXPONENT: f64 = 10.0;

/// Resolves the spec's open "hybrid" extension point: a convex combination
/// of Jeroslow-Wang and MOMS-Freeman, weighted by `weight` (the `-hp`
/// percentage divided by 100). `weight == 1.0` behaves like pure JW,
/// `weight == 0.0` like pure MOMS.
pub struct HybridHeuristic {
    dynamic: bool,
    weight: f64,
    moms_parameter: f64,
    j_pos: Vec<f64>,
    j_neg: Vec<f64>,
    pos_counts: Vec<usize>,
    neg_counts: Vec<usize>,
    min_clause_length: usize,
    nr_min_clauses: usize,
    queue: PriorityQueue,
}

fn combined_score(weight: f64, j: f64, moms: f64) -> f64 {
    weight * j + (1.0 - weight) * moms
}

impl HybridHeuristic {
    pub fn new(formula: &Formula, dynamic: bool, weight_percent: i64) -> HybridHeuristic {
        let n = formula.num_variables();
        let weight = (weight_percent as f64 / 100.0).clamp(0.0, 1.0);
        let moms_parameter = 2f64.powf(DEFAULT_MOMS_EXPONENT);

        let mut j_pos = vec![0.0; n];
        let mut j_neg = vec![0.0; n];
        for id in 1..=n {
            let var = formula.variable(id);
            j_pos[id - 1] = var.pos_occ.iter().map(|&c| clause_weight(formula.clause_len(c))).sum();
            j_neg[id - 1] = var.neg_occ.iter().map(|&c| clause_weight(formula.clause_len(c))).sum();
        }

        let (min_len, nr_min) = min_clause_length(formula, None);
        let mut pos_counts = vec![0; n];
        let mut neg_counts = vec![0; n];
        let mut scored = Vec::with_capacity(n);
        for id in 1..=n {
            let (p, nn) = counts_at(formula, id, min_len, None);
            pos_counts[id - 1] = p;
            neg_counts[id - 1] = nn;
            let jw = j_pos[id - 1] + j_neg[id - 1];
            let moms = moms_score(moms_parameter, p, nn);
            scored.push((id, combined_score(weight, jw, moms)));
        }

        HybridHeuristic {
            dynamic,
            weight,
            moms_parameter,
            j_pos,
            j_neg,
            pos_counts,
            neg_counts,
            min_clause_length: min_len,
            nr_min_clauses: nr_min,
            queue: pqueue::build(scored),
        }
    }

    pub fn next_var(&mut self) -> Option<VarId> {
        self.queue.pop().map(|(id, _)| id)
    }

    pub fn predicted(&self, v: VarId) -> bool {
        let jw_pos = self.weight * self.j_pos[v - 1];
        let jw_neg = self.weight * self.j_neg[v - 1];
        let moms_pos = (1.0 - self.weight) * self.pos_counts[v - 1] as f64;
        let moms_neg = (1.0 - self.weight) * self.neg_counts[v - 1] as f64;
        jw_pos + moms_pos >= jw_neg + moms_neg
    }

    fn rekey(&mut self, v: VarId) {
        let jw = self.j_pos[v - 1] + self.j_neg[v - 1];
        let moms = moms_score(self.moms_parameter, self.pos_counts[v - 1], self.neg_counts[v - 1]);
        let s = combined_score(self.weight, jw, moms);
        self.queue.change_priority(&v, Priority { score: s, id: v });
    }

    pub fn on_clause_satisfied(&mut self, clause: usize, formula: &Formula) {
        if !self.dynamic {
            return;
        }

        let jw_weight = clause_weight(formula.clause_len(clause));
        let is_min = formula.clause_len(clause) == self.min_clause_length;
        if is_min {
            self.nr_min_clauses -= 1;
        }

        for lit in formula.clauses[clause].literals.clone() {
            let v = lit.id;
            if self.queue.get(&v).is_none() {
                continue;
            }
            if lit.negative {
                self.j_neg[v - 1] -= jw_weight;
                if is_min {
                    self.neg_counts[v - 1] -= 1;
                }
            } else {
                self.j_pos[v - 1] -= jw_weight;
                if is_min {
                    self.pos_counts[v - 1] -= 1;
                }
            }
            self.rekey(v);
        }

        if self.nr_min_clauses == 0 {
            let (min_len, nr_min) = min_clause_length(formula, Some(clause));
            self.min_clause_length = min_len;
            self.nr_min_clauses = nr_min;

            let active_ids: Vec<VarId> = self.queue.iter().map(|(id, _)| *id).collect();
            for id in active_ids {
                let (p, nn) = counts_at(formula, id, min_len, Some(clause));
                self.pos_counts[id - 1] = p;
                self.neg_counts[id - 1] = nn;
                self.rekey(id);
            }
        }
    }
}
