//! Hazard colours shared by zones, robots, wastes and tiles.

/// One of the three hazard tiers.  The derived ordering follows the grid from
/// left to right: `Green < Yellow < Red`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Green,
    Yellow,
    Red,
}

impl Color {
    /// All colours in zone order.
    pub const ALL: [Color; 3] = [Color::Green, Color::Yellow, Color::Red];

    /// The next tier to the right, or `None` for red (the terminal zone).
    ///
    /// This is both the colour a compacted waste is promoted to and the zone
    /// a hand-off notification is addressed to.
    #[inline]
    pub fn next(self) -> Option<Color> {
        match self {
            Color::Green  => Some(Color::Yellow),
            Color::Yellow => Some(Color::Red),
            Color::Red    => None,
        }
    }

    /// Position in [`Color::ALL`]; handy for per-colour count arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Green  => 0,
            Color::Yellow => 1,
            Color::Red    => 2,
        }
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Green  => "green",
            Color::Yellow => "yellow",
            Color::Red    => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
