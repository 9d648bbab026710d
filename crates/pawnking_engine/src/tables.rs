//! Shared lookup tables
//!
//! Everything the engine precomputes lives in one immutable [`Tables`] value:
//! the knight/king attack sets and the combined evaluation table. Build it once
//! per process and hand out references (or an `Arc`) to every game and search.

use crate::evaluation::EvalTables;
use crate::move_gen::AttackTables;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Tables {
    pub attacks: AttackTables,
    pub eval: EvalTables,
}

impl Tables {
    pub fn new() -> Self {
        Tables {
            attacks: AttackTables::new(),
            eval: EvalTables::new(),
        }
    }
}
