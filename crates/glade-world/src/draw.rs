//! Macro-cell and outline painting primitives.
//!
//! A tile group's four sub-tiles are ordered top-left, top-right,
//! bottom-left, bottom-right; `(x, y)` addresses the bottom-left cell of a
//! macro-cell and +y is up.

use glade_catalog::TileGroup;

use crate::surface::TileLayer;

/// Paint all four cells of the macro-cell at `pos`, overwriting anything.
pub fn draw_macro(layer: &mut TileLayer, (x, y): (i32, i32), group: &TileGroup) {
    layer.set((x, y + 1), Some(group.tiles[0]));
    layer.set((x + 1, y + 1), Some(group.tiles[1]));
    layer.set((x, y), Some(group.tiles[2]));
    layer.set((x + 1, y), Some(group.tiles[3]));
}

/// Paint the macro-cell, but skip each 1-wide column whose two cells are
/// already occupied.
pub fn draw_macro_no_overpaint(layer: &mut TileLayer, (x, y): (i32, i32), group: &TileGroup) {
    if !(layer.has((x, y + 1)) && layer.has((x, y))) {
        layer.set((x, y + 1), Some(group.tiles[0]));
        layer.set((x, y), Some(group.tiles[2]));
    }
    if !(layer.has((x + 1, y + 1)) && layer.has((x + 1, y))) {
        layer.set((x + 1, y + 1), Some(group.tiles[1]));
        layer.set((x + 1, y), Some(group.tiles[3]));
    }
}

/// Paint the macro-cell with per-side overpaint control: a column that may
/// not overpaint an occupied primary layer is written to the background
/// layer instead.
pub fn draw_macro_side_overpaint(
    primary: &mut TileLayer,
    background: &mut TileLayer,
    (x, y): (i32, i32),
    group: &TileGroup,
    left_overpaints: bool,
    right_overpaints: bool,
) {
    if !(primary.has((x, y + 1)) && primary.has((x, y))) || left_overpaints {
        primary.set((x, y + 1), Some(group.tiles[0]));
        primary.set((x, y), Some(group.tiles[2]));
    } else {
        background.set((x, y + 1), Some(group.tiles[0]));
        background.set((x, y), Some(group.tiles[2]));
    }
    if !(primary.has((x + 1, y + 1)) && primary.has((x + 1, y))) || right_overpaints {
        primary.set((x + 1, y + 1), Some(group.tiles[1]));
        primary.set((x + 1, y), Some(group.tiles[3]));
    } else {
        background.set((x + 1, y + 1), Some(group.tiles[1]));
        background.set((x + 1, y), Some(group.tiles[3]));
    }
}

/// Paint a vertical boundary strip on the left or right column of the
/// macro-cell at `pos`.
pub fn draw_edge_vertical(
    layer: &mut TileLayer,
    (x, y): (i32, i32),
    right_side: bool,
    group: &TileGroup,
) {
    if right_side {
        layer.set((x, y), Some(group.tiles[1]));
        layer.set((x, y + 1), Some(group.tiles[3]));
    } else {
        layer.set((x + 1, y), Some(group.tiles[0]));
        layer.set((x + 1, y + 1), Some(group.tiles[2]));
    }
}

/// Paint a horizontal boundary strip on the top or bottom row of the
/// macro-cell at `pos`. Passing `None` clears the two cells instead, which
/// the cliff resolver uses to suppress overhang tiles.
pub fn draw_edge_horizontal(
    layer: &mut TileLayer,
    (x, y): (i32, i32),
    top_side: bool,
    group: Option<&TileGroup>,
) {
    if top_side {
        layer.set((x, y), group.map(|g| g.tiles[2]));
        layer.set((x + 1, y), group.map(|g| g.tiles[3]));
    } else {
        layer.set((x, y + 1), group.map(|g| g.tiles[0]));
        layer.set((x + 1, y + 1), group.map(|g| g.tiles[1]));
    }
}

/// Paint an outer-corner tile in the quadrant of the macro-cell named by
/// `right_side`/`top_side`.
pub fn draw_outer_corner(
    layer: &mut TileLayer,
    (x, y): (i32, i32),
    right_side: bool,
    top_side: bool,
    group: &TileGroup,
) {
    match (right_side, top_side) {
        (true, true) => layer.set((x + 1, y + 1), Some(group.tiles[0])),
        (true, false) => layer.set((x + 1, y), Some(group.tiles[2])),
        (false, true) => layer.set((x, y + 1), Some(group.tiles[1])),
        (false, false) => layer.set((x, y), Some(group.tiles[3])),
    }
}

/// Paint an inner-corner tile in the quadrant of the macro-cell named by
/// `right_side`/`top_side`.
pub fn draw_inner_corner(
    layer: &mut TileLayer,
    (x, y): (i32, i32),
    right_side: bool,
    top_side: bool,
    group: &TileGroup,
) {
    match (right_side, top_side) {
        (true, true) => layer.set((x + 1, y + 1), Some(group.tiles[3])),
        (true, false) => layer.set((x + 1, y), Some(group.tiles[1])),
        (false, true) => layer.set((x, y + 1), Some(group.tiles[2])),
        (false, false) => layer.set((x, y), Some(group.tiles[0])),
    }
}

/// Paint the 1-wide wall column under a cliff corner: sub-tile 3 at the top,
/// then either one cell (single height) or three more (double height),
/// indexed top to bottom.
pub fn draw_corner_column(
    layer: &mut TileLayer,
    (x, y): (i32, i32),
    right_side: bool,
    group: &TileGroup,
    double_tall: bool,
) {
    let col = if right_side { x + 1 } else { x };
    layer.set((col, y), Some(group.tiles[3]));
    if double_tall {
        layer.set((col, y - 1), Some(group.tiles[2]));
        layer.set((col, y - 2), Some(group.tiles[1]));
        layer.set((col, y - 3), Some(group.tiles[0]));
    } else {
        layer.set((col, y - 1), Some(group.tiles[0]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glade_catalog::TileId;

    fn group() -> TileGroup {
        TileGroup {
            weight: 1.0,
            tiles: [TileId(0), TileId(1), TileId(2), TileId(3)],
        }
    }

    #[test]
    fn draw_macro_places_sub_tiles_in_reading_order() {
        let mut layer = TileLayer::default();
        draw_macro(&mut layer, (4, 4), &group());
        assert_eq!(layer.get((4, 5)), Some(TileId(0)));
        assert_eq!(layer.get((5, 5)), Some(TileId(1)));
        assert_eq!(layer.get((4, 4)), Some(TileId(2)));
        assert_eq!(layer.get((5, 4)), Some(TileId(3)));
    }

    #[test]
    fn no_overpaint_skips_fully_occupied_columns() {
        let mut layer = TileLayer::default();
        layer.set((4, 4), Some(TileId(90)));
        layer.set((4, 5), Some(TileId(91)));
        draw_macro_no_overpaint(&mut layer, (4, 4), &group());
        // Left column untouched, right column painted.
        assert_eq!(layer.get((4, 4)), Some(TileId(90)));
        assert_eq!(layer.get((4, 5)), Some(TileId(91)));
        assert_eq!(layer.get((5, 4)), Some(TileId(3)));
        assert_eq!(layer.get((5, 5)), Some(TileId(1)));
    }

    #[test]
    fn no_overpaint_paints_half_occupied_columns() {
        let mut layer = TileLayer::default();
        layer.set((4, 4), Some(TileId(90)));
        draw_macro_no_overpaint(&mut layer, (4, 4), &group());
        assert_eq!(layer.get((4, 4)), Some(TileId(2)));
        assert_eq!(layer.get((4, 5)), Some(TileId(0)));
    }

    #[test]
    fn side_overpaint_defers_blocked_column_to_background() {
        let mut primary = TileLayer::default();
        let mut background = TileLayer::default();
        primary.set((4, 4), Some(TileId(90)));
        primary.set((4, 5), Some(TileId(91)));
        draw_macro_side_overpaint(&mut primary, &mut background, (4, 4), &group(), false, false);
        assert_eq!(primary.get((4, 4)), Some(TileId(90)));
        assert_eq!(background.get((4, 4)), Some(TileId(2)));
        assert_eq!(background.get((4, 5)), Some(TileId(0)));
        // Right column was free: painted on the primary, not the background.
        assert_eq!(primary.get((5, 4)), Some(TileId(3)));
        assert!(!background.has((5, 4)));
    }

    #[test]
    fn side_overpaint_flag_forces_primary() {
        let mut primary = TileLayer::default();
        let mut background = TileLayer::default();
        primary.set((4, 4), Some(TileId(90)));
        primary.set((4, 5), Some(TileId(91)));
        draw_macro_side_overpaint(&mut primary, &mut background, (4, 4), &group(), true, false);
        assert_eq!(primary.get((4, 4)), Some(TileId(2)));
        assert!(background.is_empty());
    }

    #[test]
    fn edge_strips_pick_expected_cells() {
        let mut layer = TileLayer::default();
        draw_edge_vertical(&mut layer, (4, 4), true, &group());
        assert_eq!(layer.get((4, 4)), Some(TileId(1)));
        assert_eq!(layer.get((4, 5)), Some(TileId(3)));

        let mut layer = TileLayer::default();
        draw_edge_vertical(&mut layer, (4, 4), false, &group());
        assert_eq!(layer.get((5, 4)), Some(TileId(0)));
        assert_eq!(layer.get((5, 5)), Some(TileId(2)));

        let mut layer = TileLayer::default();
        draw_edge_horizontal(&mut layer, (4, 4), true, Some(&group()));
        assert_eq!(layer.get((4, 4)), Some(TileId(2)));
        assert_eq!(layer.get((5, 4)), Some(TileId(3)));

        let mut layer = TileLayer::default();
        draw_edge_horizontal(&mut layer, (4, 4), false, Some(&group()));
        assert_eq!(layer.get((4, 5)), Some(TileId(0)));
        assert_eq!(layer.get((5, 5)), Some(TileId(1)));
    }

    #[test]
    fn horizontal_edge_with_none_clears() {
        let mut layer = TileLayer::default();
        layer.set((4, 5), Some(TileId(50)));
        layer.set((5, 5), Some(TileId(51)));
        draw_edge_horizontal(&mut layer, (4, 4), false, None);
        assert!(!layer.has((4, 5)));
        assert!(!layer.has((5, 5)));
    }

    #[test]
    fn corner_column_heights() {
        let mut layer = TileLayer::default();
        draw_corner_column(&mut layer, (4, 4), true, &group(), false);
        assert_eq!(layer.get((5, 4)), Some(TileId(3)));
        assert_eq!(layer.get((5, 3)), Some(TileId(0)));

        let mut layer = TileLayer::default();
        draw_corner_column(&mut layer, (4, 4), false, &group(), true);
        assert_eq!(layer.get((4, 4)), Some(TileId(3)));
        assert_eq!(layer.get((4, 3)), Some(TileId(2)));
        assert_eq!(layer.get((4, 2)), Some(TileId(1)));
        assert_eq!(layer.get((4, 1)), Some(TileId(0)));
    }
}
