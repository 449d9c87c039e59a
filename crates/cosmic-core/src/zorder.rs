use crate::constants::BASE_Z_INDEX;
use std::cell::Cell;
use std::rc::Rc;

/// Monotonic z-index source.
///
/// Clones share the same counter, so several panel managers handed the same
/// `ZCounter` stack against each other; independent counters never interact.
#[derive(Clone, Debug)]
pub struct ZCounter {
    next: Rc<Cell<u32>>,
}

impl ZCounter {
    pub fn new() -> Self {
        Self::starting_at(BASE_Z_INDEX)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Rc::new(Cell::new(first)),
        }
    }

    /// Hand out the next value. Never decrements or resets.
    pub fn activate(&self) -> u32 {
        let z = self.next.get();
        self.next.set(z.saturating_add(1));
        z
    }

    pub fn peek(&self) -> u32 {
        self.next.get()
    }
}

impl Default for ZCounter {
    fn default() -> Self {
        Self::new()
    }
}
