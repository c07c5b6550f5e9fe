//! Multi-occupancy grid storage.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec`:
//!
//! ```text
//! cells[ y * width + x ]  →  Vec<Entity>   (insertion order preserved)
//! ```
//!
//! The grid is not a torus; neighbourhoods are clipped at the borders.
//! Entities do not know their own position here: callers (robots, the waste
//! ledger) track that and pass `from` explicitly when moving or removing.

use wr_core::{Entity, EntityKind, Pos};

use crate::{GridError, GridResult};

/// A bounded grid where every cell holds an ordered list of entities.
pub struct MultiGrid {
    width:  u32,
    height: u32,
    cells:  Vec<Vec<Entity>>,
}

impl MultiGrid {
    /// An empty `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Add `entity` to the end of the cell at `pos`.
    pub fn place_at(&mut self, entity: Entity, pos: Pos) -> GridResult<()> {
        let i = self.cell_index(pos)?;
        self.cells[i].push(entity);
        Ok(())
    }

    /// Remove the first occurrence of `entity` from the cell at `pos`.
    ///
    /// # Errors
    ///
    /// [`GridError::NotAt`] if the cell does not hold `entity`.
    pub fn remove_from(&mut self, entity: Entity, pos: Pos) -> GridResult<()> {
        let i = self.cell_index(pos)?;
        let cell = &mut self.cells[i];
        match cell.iter().position(|&e| e == entity) {
            Some(at) => {
                cell.remove(at);
                Ok(())
            }
            None => Err(GridError::NotAt { entity, pos }),
        }
    }

    /// Relocate `entity` from `from` to `to`.  Moving onto the same cell is a
    /// no-op (the entity keeps its slot in the cell's list).
    pub fn move_to(&mut self, entity: Entity, from: Pos, to: Pos) -> GridResult<()> {
        if from == to {
            // Still validate, so a bogus `from` is reported.
            let i = self.cell_index(from)?;
            if !self.cells[i].contains(&entity) {
                return Err(GridError::NotAt { entity, pos: from });
            }
            return Ok(());
        }
        // Check the destination before mutating anything.
        self.cell_index(to)?;
        self.remove_from(entity, from)?;
        self.place_at(entity, to)
    }

    /// Everything at `pos`, in placement order.
    pub fn contents_at(&self, pos: Pos) -> GridResult<&[Entity]> {
        let i = self.cell_index(pos)?;
        Ok(&self.cells[i])
    }

    /// In-bounds cells within one step of `pos`.
    ///
    /// With `include_diagonals` the Moore (8-connected) neighbourhood is
    /// returned, otherwise the von Neumann (4-connected) one.  The order is
    /// column-major with `dx` outer and `dy` inner, both ascending, so
    /// policies scanning "the first matching cell" are deterministic.
    pub fn neighborhood(&self, pos: Pos, include_diagonals: bool, include_center: bool) -> Vec<Pos> {
        let mut out = Vec::with_capacity(9);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                if !include_diagonals && dx != 0 && dy != 0 {
                    continue;
                }
                let p = Pos::new(pos.x + dx, pos.y + dy);
                if self.in_bounds(p) {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Number of placed entities of `kind` across the whole grid.
    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.cells
            .iter()
            .flat_map(|c| c.iter())
            .filter(|e| e.kind() == kind)
            .count()
    }

    fn cell_index(&self, pos: Pos) -> GridResult<usize> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds { pos, width: self.width, height: self.height });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }
}
