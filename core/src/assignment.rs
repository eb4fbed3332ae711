use crate::cnf::VarId;

/// Three-valued per-variable assignment cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    False,
    True,
    Open,
}

impl Cell {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::True => Some(true),
            Cell::False => Some(false),
            Cell::Open => None,
        }
    }
}

/// Assignment state: a parallel array of cells plus an append-only trail of
/// assigned variable ids with a cursor into it. Kept separate from
/// `Variable` metadata so a decompressor can rebuild it without mutating
/// the read-only formula.
#[derive(Debug, Clone)]
pub struct Assignment {
    cells: Vec<Cell>,
    trail: Vec<VarId>,
    head: usize,
}

impl Assignment {
    pub fn new(num_variables: usize) -> Assignment {
        Assignment {
            cells: vec![Cell::Open; num_variables],
            trail: Vec::with_capacity(num_variables),
            head: 0,
        }
    }

    #[inline]
    pub fn get(&self, v: VarId) -> Cell {
        self.cells[v - 1]
    }

    #[inline]
    pub fn is_open(&self, v: VarId) -> bool {
        self.cells[v - 1].is_open()
    }

    /// Sets `v` to `value` and appends it to the trail. Once set, a cell
    /// never reverts to OPEN, matching the §3 invariant.
    pub fn assign(&mut self, v: VarId, value: bool) {
        debug_assert!(self.is_open(v), "variable {} assigned twice", v);
        self.cells[v - 1] = if value { Cell::True } else { Cell::False };
        self.trail.push(v);
    }

    #[inline]
    pub fn trail_head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    #[inline]
    pub fn trail_at(&self, i: usize) -> VarId {
        self.trail[i]
    }

    #[inline]
    pub fn advance_head(&mut self) -> VarId {
        let v = self.trail[self.head];
        self.head += 1;
        v
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.head < self.trail.len()
    }

    pub fn num_variables(&self) -> usize {
        self.cells.len()
    }
}
