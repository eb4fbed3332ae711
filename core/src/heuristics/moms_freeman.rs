use super::pqueue::{self, PriorityQueue, Priority};
use crate::cnf::{Formula, VarId};

pub(crate) fn min_clause_length(formula: &Formula, exclude: Option<usize>) -> (usize, usize) {
    let mut min_len = usize::MAX;
    let mut count = 0;
    for (idx, clause) in formula.clauses.iter().enumerate() {
        if Some(idx) == exclude || clause.literals.is_empty() {
            continue;
        }
        let len = clause.literals.len();
        if len < min_len {
            min_len = len;
            count = 1;
        } else if len == min_len {
            count += 1;
        }
    }
    if min_len == usize::MAX {
        min_len = 0;
    }
    (min_len, count)
}

pub(crate) fn counts_at(formula: &Formula, id: VarId, min_len: usize, exclude: Option<usize>) -> (usize, usize) {
    let var = formula.variable(id);
    let matches = |&&c: &&usize| {
        Some(c) != exclude
            && !formula.clauses[c].literals.is_empty()
            && formula.clauses[c].literals.len() == min_len
    };
    (
        var.pos_occ.iter().filter(matches).count(),
        var.neg_occ.iter().filter(matches).count(),
    )
}

/// MOMS-Freeman: score(v) = (p+n)*2^k + p*n where p, n count alive clauses
/// of minimum length Lmin in each occurrence list. The dynamic variant
/// tracks how many minimum-length clauses remain; once the last one is
/// satisfied, Lmin and every active score are recomputed from scratch.
///
/// Propagation notifies this heuristic *before* clearing clause storage
/// (see propagation.rs), so the clause currently being satisfied is passed
/// explicitly as `exclude` when rescanning occurrence lists — it must not
/// count toward the new Lmin even though its storage is still intact.
pub struct MomsFreemanHeuristic {
    dynamic: bool,
    moms_parameter: f64,
    min_clause_length: usize,
    nr_min_clauses: usize,
    pos_counts: Vec<usize>,
    neg_counts: Vec<usize>,
    queue: PriorityQueue,
}

pub(crate) fn moms_score(moms_parameter: f64, p: usize, n: usize) -> f64 {
    (p + n) as f64 * moms_parameter + (p * n) as f64
}

impl MomsFreemanHeuristic {
    pub fn new(formula: &Formula, dynamic: bool, k: f64) -> MomsFreemanHeuristic {
        let n = formula.num_variables();
        let moms_parameter = 2f64.powf(k);
        let (min_len, nr_min) = min_clause_length(formula, None);

        let mut pos_counts = vec![0; n];
        let mut neg_counts = vec![0; n];
        let mut scored = Vec::with_capacity(n);
        for id in 1..=n {
            let (p, nn) = counts_at(formula, id, min_len, None);
            pos_counts[id - 1] = p;
            neg_counts[id - 1] = nn;
            scored.push((id, moms_score(moms_parameter, p, nn)));
        }

        MomsFreemanHeuristic {
            dynamic,
            moms_parameter,
            min_clause_length: min_len,
            nr_min_clauses: nr_min,
            pos_counts,
            neg_counts,
            queue: pqueue::build(scored),
        }
    }

    pub fn next_var(&mut self) -> Option<VarId> {
        self.queue.pop().map(|(id, _)| id)
    }

    pub fn predicted(&self, v: VarId) -> bool {
        self.pos_counts[v - 1] >= self.neg_counts[v - 1]
    }

    pub fn on_clause_satisfied(&mut self, clause: usize, formula: &Formula) {
        if !self.dynamic {
            return;
        }

        if formula.clause_len(clause) == self.min_clause_length {
            self.nr_min_clauses -= 1;
            for lit in formula.clauses[clause].literals.clone() {
                let v = lit.id;
                if self.queue.get(&v).is_none() {
                    continue;
                }
                if lit.negative {
                    self.neg_counts[v - 1] -= 1;
                } else {
                    self.pos_counts[v - 1] -= 1;
                }
                let s = moms_score(self.moms_parameter, self.pos_counts[v - 1], self.neg_counts[v - 1]);
                self.queue.change_priority(&v, Priority { score: s, id: v });
            }
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
                let s = moms_score(self.moms_parameter, p, nn);
                self.queue.change_priority(&id, Priority { score: s, id });
            }
        }
    }
}
