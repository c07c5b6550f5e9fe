//! Waste units and their compaction / relay lifecycle.
//!
//! ```text
//!   spawn ──put──► placed ──pick up──► held ──drop off──► placed ──► …
//!                                        │
//!                                        └─ compact: head destroyed,
//!                                           new head promoted one tier
//! ```
//!
//! Colour only moves forward (green → yellow → red).  `Waste::color` has no
//! setter; the only mutation is [`Waste::promote`].

use rustc_hash::FxHashMap;

use wr_core::{Color, WasteId};

/// One unit of waste.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Waste {
    pub id: WasteId,
    color:  Color,
}

impl Waste {
    pub fn new(id: WasteId, color: Color) -> Self {
        Self { id, color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Advance the colour one tier and return the new colour.
    ///
    /// # Panics
    ///
    /// Panics if the waste is already red; red waste is never compacted.
    pub fn promote(&mut self) -> Color {
        self.color = self
            .color
            .next()
            .unwrap_or_else(|| panic!("{} is red and cannot be promoted", self.id));
        self.color
    }
}

/// Compact a carry-list: destroy its head and promote the new head.
///
/// Returns the destroyed unit.  The list shrinks by exactly one.
///
/// # Panics
///
/// Panics if fewer than two units are carried: the deliberation policy only
/// asks for a compaction when the robot is full.
pub fn compact(carry: &mut Vec<Waste>) -> Waste {
    assert!(
        carry.len() >= 2,
        "compaction needs two carried wastes, found {}",
        carry.len()
    );
    let destroyed = carry.remove(0);
    carry[0].promote();
    destroyed
}

/// Registry of every waste currently placed on the grid.
///
/// Held wastes are not in the ledger: they live in a robot's carry-list.
/// The ledger also allocates ids and counts units destroyed by compaction.
#[derive(Default)]
pub struct WasteLedger {
    placed:    FxHashMap<WasteId, Waste>,
    next_id:   u32,
    destroyed: u64,
}

impl WasteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh unit of `color`.
    ///
    /// The unit is not placed: hand it to [`put`](Self::put) once it is on
    /// the grid.
    pub fn spawn(&mut self, color: Color) -> Waste {
        let waste = Waste::new(WasteId(self.next_id), color);
        self.next_id += 1;
        waste
    }

    /// Placed → held: remove `id` from the ledger and hand the value over.
    pub fn take(&mut self, id: WasteId) -> Option<Waste> {
        self.placed.remove(&id)
    }

    /// Held → placed.
    ///
    /// # Panics
    ///
    /// Panics if a unit with the same id is already placed.
    pub fn put(&mut self, waste: Waste) {
        let previous = self.placed.insert(waste.id, waste);
        assert!(previous.is_none(), "{} placed twice", waste.id);
    }

    /// Record a unit destroyed by [`compact`].
    pub fn record_destroyed(&mut self, waste: Waste) {
        debug_assert!(!self.placed.contains_key(&waste.id));
        self.destroyed += 1;
    }

    #[inline]
    pub fn get(&self, id: WasteId) -> Option<&Waste> {
        self.placed.get(&id)
    }

    #[inline]
    pub fn placed_len(&self) -> usize {
        self.placed.len()
    }

    /// Units destroyed by compaction so far.
    #[inline]
    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }

    /// Placed units per colour, indexed by [`Color::index`].
    pub fn placed_by_color(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for w in self.placed.values() {
            counts[w.color().index()] += 1;
        }
        counts
    }
}
