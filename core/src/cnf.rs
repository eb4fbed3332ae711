use std::fmt;
use std::ops::Neg;

/// Identifier of a logical variable, 1-based as in DIMACS.
pub type VarId = usize;

/// A signed reference to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    pub id: VarId,
    pub negative: bool,
}

impl Literal {
    #[inline]
    pub fn positive(id: VarId) -> Literal {
        Literal { id, negative: false }
    }

    #[inline]
    pub fn negative(id: VarId) -> Literal {
        Literal { id, negative: true }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative
    }
}

impl Neg for Literal {
    type Output = Literal;
    fn neg(mut self) -> Literal {
        self.negative = !self.negative;
        self
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}

/// A disjunction of literals. `remaining` tracks how many of its literals
/// are still attached to an OPEN variable; the clause is dead once it hits
/// zero or its literal list has been cleared by satisfaction.
#[derive(Debug, Clone)]
pub struct Clause {
    pub literals: Vec<Literal>,
    pub remaining: usize,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        let remaining = literals.len();
        Clause { literals, remaining }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.remaining > 0 && !self.literals.is_empty()
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.remaining == 1
    }

    /// Marks the clause dead: the literal sequence is cleared, matching the
    /// "clear" operation described for a satisfied clause.
    pub fn kill(&mut self) -> Vec<Literal> {
        self.remaining = 0;
        std::mem::take(&mut self.literals)
    }
}

/// Per-variable bookkeeping: non-owning references (clause indices) into
/// the formula's clause store, plus live occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct Variable {
    pub pos_occ: Vec<usize>,
    pub neg_occ: Vec<usize>,
    pub nr_pos_occ: usize,
    pub nr_neg_occ: usize,
}

/// Read-only-after-construction formula store: clauses plus per-variable
/// occurrence lists built in a single pass over the parsed clauses.
#[derive(Debug, Clone)]
pub struct Formula {
    pub clauses: Vec<Clause>,
    variables: Vec<Variable>,
}

impl Formula {
    /// Builds a formula from clauses given as vectors of literals.
    /// `num_variables` seeds the variable range; it grows automatically if a
    /// literal references a larger id (duplicated literals and tautological
    /// clauses are tolerated, matching the parsing contract).
    pub fn new(raw_clauses: Vec<Vec<Literal>>, num_variables: usize) -> Formula {
        let max_lit_id = raw_clauses
            .iter()
            .flat_map(|c| c.iter())
            .map(|l| l.id)
            .max()
            .unwrap_or(0);
        let n = num_variables.max(max_lit_id);

        let mut variables = vec![Variable::default(); n];
        let mut clauses = Vec::with_capacity(raw_clauses.len());

        for (idx, literals) in raw_clauses.into_iter().enumerate() {
            for lit in &literals {
                let var = &mut variables[lit.id - 1];
                if lit.is_positive() {
                    var.pos_occ.push(idx);
                    var.nr_pos_occ += 1;
                } else {
                    var.neg_occ.push(idx);
                    var.nr_neg_occ += 1;
                }
            }
            clauses.push(Clause::new(literals));
        }

        Formula { clauses, variables }
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    #[inline]
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id - 1]
    }

    #[inline]
    pub(crate) fn variable_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.variables[id - 1]
    }

    #[inline]
    pub fn is_fully_satisfied(&self) -> bool {
        self.clauses.iter().all(|c| !c.is_alive())
    }

    pub fn clause_len(&self, clause: usize) -> usize {
        self.clauses[clause].literals.len()
    }
}
