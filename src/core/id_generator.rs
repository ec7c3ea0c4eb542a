//=========================================================================
// Id Generator
//=========================================================================
//
// Monotonic integer ids used to build scene tags.
//
// One generator is owned by each StageController. The counter is never
// reset while the controller lives; restoring a saved stack only moves
// it forward.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== IdGenerator =========================================================

/// Issues unique, strictly increasing `u32` ids.
///
/// Wrapping past `u32::MAX` is not guarded against beyond a warning; a
/// session would need four billion scene launches to get there.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Creates a generator whose first id is `0`.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a generator whose first id is `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns the next id and advances the counter.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        if self.next == 0 {
            warn!("Id generator wrapped around after issuing {}", id);
        }
        id
    }

    /// Returns the id the next call to `next_id` will produce.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Moves the counter so that every future id is greater than `id`.
    ///
    /// Never moves the counter backwards.
    pub fn advance_past(&mut self, id: u32) {
        let candidate = id.wrapping_add(1);
        if id != u32::MAX && candidate > self.next {
            self.next = candidate;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
