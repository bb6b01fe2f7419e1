//! Hurdle templates module - obstacle shapes and weighted selection
//!
//! An obstacle is a template: one or more 4-bit column patterns (bit `r`
//! blocks row `r`, row 0 at the top) plus spacing requirements and a
//! selection weight. Multi-column templates are emitted one column per tick
//! across consecutive ticks.
//!
//! [`HurdleCatalog`] owns the shape table and a cumulative-probability table
//! computed once at construction, so a weighted pick costs a single uniform
//! draw and a short scan. The shape definitions themselves are never
//! mutated.

use crate::rng::SimpleRng;

/// Identifier of a shape within a catalog.
pub type HurdleId = usize;

/// An obstacle template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HurdleShape {
    /// Short name for debugging and test output.
    pub name: &'static str,
    /// Column patterns, emitted left to right, one per tick. Bit `r` blocks
    /// row `r` (bit 0 = top row, bit 3 = the floor row).
    pub columns: &'static [u8],
    /// Minimum empty columns required before the first column.
    pub lead_gap: u32,
    /// Minimum empty columns required after the last column.
    pub trail_gap: u32,
    /// Relative selection weight.
    pub weight: f64,
}

/// The standard shape table.
///
/// Every template is clearable under the fixed jump curve: the bar needs any
/// airborne frame, the block height 2, the wall one of the three peak
/// frames, and the slit one of the height-1/height-2 frames. Harder shapes
/// carry larger gaps and smaller weights.
const STANDARD_SHAPES: &[HurdleShape] = &[
    HurdleShape {
        name: "bar",
        columns: &[0b1000],
        lead_gap: 0,
        trail_gap: 0,
        weight: 4.0,
    },
    HurdleShape {
        name: "double-bar",
        columns: &[0b1000, 0b1000],
        lead_gap: 1,
        trail_gap: 1,
        weight: 2.0,
    },
    HurdleShape {
        name: "block",
        columns: &[0b1100],
        lead_gap: 1,
        trail_gap: 1,
        weight: 2.0,
    },
    HurdleShape {
        name: "ramp",
        columns: &[0b1000, 0b1100],
        lead_gap: 1,
        trail_gap: 2,
        weight: 1.0,
    },
    HurdleShape {
        name: "wall",
        columns: &[0b1110],
        lead_gap: 2,
        trail_gap: 2,
        weight: 1.0,
    },
    HurdleShape {
        name: "slit",
        columns: &[0b1001],
        lead_gap: 1,
        trail_gap: 1,
        weight: 1.0,
    },
];

/// Shape table plus the cumulative selection distribution, built once.
#[derive(Debug, Clone)]
pub struct HurdleCatalog {
    shapes: &'static [HurdleShape],
    /// Normalized cumulative weights; the last entry is 1.0.
    cumulative: Vec<f64>,
}

impl HurdleCatalog {
    /// Build a catalog from a shape table.
    pub fn new(shapes: &'static [HurdleShape]) -> Self {
        assert!(!shapes.is_empty(), "catalog requires at least one shape");
        let total: f64 = shapes.iter().map(|s| s.weight).sum();
        let mut acc = 0.0;
        let cumulative = shapes
            .iter()
            .map(|s| {
                acc += s.weight / total;
                acc
            })
            .collect();
        Self { shapes, cumulative }
    }

    /// The standard game catalog.
    pub fn standard() -> Self {
        Self::new(STANDARD_SHAPES)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, id: HurdleId) -> &HurdleShape {
        &self.shapes[id]
    }

    /// Weighted pick against one fresh uniform draw.
    pub fn pick(&self, rng: &mut SimpleRng) -> HurdleId {
        let r = rng.next_f64();
        self.cumulative
            .iter()
            .position(|&edge| r < edge)
            .unwrap_or(self.shapes.len() - 1)
    }
}
