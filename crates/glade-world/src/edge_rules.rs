//! Direction-indexed boundary rules shared by the cliff and grass edge
//! resolvers.
//!
//! Each of the four directions carries the neighbor offset, the edge strip
//! orientation, and the two diagonal inner-corner probes; the four outer
//! corners carry their diagonal and quadrant flags. Both resolvers iterate
//! these tables with their own trigger predicates, so the direction cases
//! cannot drift apart.

/// Edge strip orientation plus the side flag the draw primitive expects.
#[derive(Clone, Copy)]
pub(crate) enum EdgeAxis {
    Vertical { right_side: bool },
    Horizontal { top_side: bool },
}

/// A diagonal probe: when the macro-cell at `diagonal` rejoins the patch,
/// an inner corner replaces part of the straight edge.
#[derive(Clone, Copy)]
pub(crate) struct InnerCorner {
    pub diagonal: (i32, i32),
    pub right_side: bool,
    pub top_side: bool,
}

#[derive(Clone, Copy)]
pub(crate) struct EdgeRule {
    pub offset: (i32, i32),
    pub axis: EdgeAxis,
    pub inner: [InnerCorner; 2],
}

/// Evaluation order is part of the output: west, east, south, north.
pub(crate) const EDGE_RULES: [EdgeRule; 4] = [
    EdgeRule {
        offset: (-2, 0),
        axis: EdgeAxis::Vertical { right_side: false },
        inner: [
            InnerCorner { diagonal: (-2, -2), right_side: true, top_side: false },
            InnerCorner { diagonal: (-2, 2), right_side: true, top_side: true },
        ],
    },
    EdgeRule {
        offset: (2, 0),
        axis: EdgeAxis::Vertical { right_side: true },
        inner: [
            InnerCorner { diagonal: (2, -2), right_side: false, top_side: false },
            InnerCorner { diagonal: (2, 2), right_side: false, top_side: true },
        ],
    },
    EdgeRule {
        offset: (0, -2),
        axis: EdgeAxis::Horizontal { top_side: false },
        inner: [
            InnerCorner { diagonal: (-2, -2), right_side: false, top_side: true },
            InnerCorner { diagonal: (2, -2), right_side: true, top_side: true },
        ],
    },
    EdgeRule {
        offset: (0, 2),
        axis: EdgeAxis::Horizontal { top_side: true },
        inner: [
            InnerCorner { diagonal: (-2, 2), right_side: false, top_side: false },
            InnerCorner { diagonal: (2, 2), right_side: true, top_side: false },
        ],
    },
];

/// An outer corner triggers when the diagonal macro-cell and both adjacent
/// axis macro-cells (derived from the diagonal) all sit outside the patch.
#[derive(Clone, Copy)]
pub(crate) struct OuterCorner {
    pub diagonal: (i32, i32),
    pub right_side: bool,
    pub top_side: bool,
}

impl OuterCorner {
    /// The three macro offsets that must all trigger: horizontal axis,
    /// diagonal, vertical axis.
    pub(crate) fn probes(&self) -> [(i32, i32); 3] {
        let (dx, dy) = self.diagonal;
        [(dx, 0), (dx, dy), (0, dy)]
    }

    /// Bottom corners carry wall columns in the cliff resolver.
    pub(crate) fn is_bottom(&self) -> bool {
        self.diagonal.1 < 0
    }
}

/// Evaluation order is part of the output: bottom-left, top-left,
/// bottom-right, top-right.
pub(crate) const OUTER_CORNERS: [OuterCorner; 4] = [
    OuterCorner { diagonal: (-2, -2), right_side: true, top_side: true },
    OuterCorner { diagonal: (-2, 2), right_side: true, top_side: false },
    OuterCorner { diagonal: (2, -2), right_side: false, top_side: true },
    OuterCorner { diagonal: (2, 2), right_side: false, top_side: false },
];
