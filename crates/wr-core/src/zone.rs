//! Zone bounds and the three-band layout of the grid.
//!
//! The grid width is split into three equal, contiguous, half-open x-bands:
//!
//!   green  = [0,      w/3)
//!   yellow = [w/3,    2w/3)
//!   red    = [2w/3,   w)
//!
//! A robot may occupy and observe any column left of its own zone's upper
//! bound, never right of it.  That asymmetry is what makes waste flow
//! rightwards.

use crate::{Color, Pos, WrError, WrResult};

/// The immutable bounds of one colour's zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub color: Color,
    /// Inclusive lower x bound.
    pub x_min: i32,
    /// Exclusive upper x bound.
    pub x_max: i32,
}

impl Zone {
    /// The column where hand-offs are dropped.
    #[inline]
    pub fn rightmost(&self) -> i32 {
        self.x_max - 1
    }

    /// `true` if `x` lies inside this zone's own band.
    #[inline]
    pub fn contains_x(&self, x: i32) -> bool {
        (self.x_min..self.x_max).contains(&x)
    }

    /// `true` if a robot of this zone may stand on / see column `x`
    /// (its own band and everything to its left).
    #[inline]
    pub fn reaches_x(&self, x: i32) -> bool {
        (0..self.x_max).contains(&x)
    }

    /// `true` if `pos` sits on the zone's rightmost column.
    #[inline]
    pub fn is_rightmost(&self, pos: Pos) -> bool {
        pos.x == self.rightmost()
    }
}

/// The three zones of a grid of a given width.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ZoneLayout {
    width: u32,
    zones: [Zone; 3],
}

impl ZoneLayout {
    /// Split `width` into three equal bands.
    ///
    /// # Errors
    ///
    /// [`WrError::WidthNotDivisible`] if `width % 3 != 0`;
    /// [`WrError::Config`] for a zero width.
    pub fn new(width: u32) -> WrResult<Self> {
        if width == 0 {
            return Err(WrError::Config("grid width must be positive".into()));
        }
        if width % 3 != 0 {
            return Err(WrError::WidthNotDivisible(width));
        }
        let band = (width / 3) as i32;
        let zones = Color::ALL.map(|color| {
            let i = color.index() as i32;
            Zone { color, x_min: i * band, x_max: (i + 1) * band }
        });
        Ok(Self { width, zones })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The zone owned by `color`.
    #[inline]
    pub fn zone(&self, color: Color) -> Zone {
        self.zones[color.index()]
    }

    /// All zones, left to right.
    #[inline]
    pub fn zones(&self) -> &[Zone; 3] {
        &self.zones
    }
}
