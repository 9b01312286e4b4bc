use crate::geometry::{self, BoxIn};
use crate::model::Rotation;

/// Gap between grid cells used by auto-pack.
pub const PACK_PADDING_IN: f32 = 0.125;

/// Spacing constant for the loose manual-placement heuristic.
pub const SCATTER_SPACING_IN: f32 = 0.25;

const SCATTER_MAX_ATTEMPTS: usize = 512;

/// A legal placement candidate: the top-left of the *unrotated* artwork rect
/// plus the orientation the cell was tiled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedPosition {
    pub x_in: f32,
    pub y_in: f32,
    pub rotation: Rotation,
}

/// `capacity` is the sum of both orientations' theoretical grid capacities
/// when rotation is allowed. That sum can overstate what is simultaneously
/// achievable (the two grids compete for the same sheet area); it is a
/// documented upper bound, not a promise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackResult {
    pub positions: Vec<PackedPosition>,
    pub capacity: usize,
}

fn grid_counts(sheet_w: f32, sheet_h: f32, cell_w: f32, cell_h: f32) -> (usize, usize) {
    if cell_w <= 0.0 || cell_h <= 0.0 {
        return (0, 0);
    }
    ((sheet_w / cell_w) as usize, (sheet_h / cell_h) as usize)
}

/// Tiles one orientation over the whole sheet in row-major order, accepting
/// cells that collide with nothing in `taken`. `footprint_w/h` is the design
/// size in the tiled orientation; `design_w/h` the unrotated size used to
/// recover the instance top-left (rotated cells pivot about the cell center).
#[allow(clippy::too_many_arguments)]
fn tile_orientation(
    sheet_w: f32,
    sheet_h: f32,
    design_w: f32,
    design_h: f32,
    footprint_w: f32,
    footprint_h: f32,
    quantity: usize,
    padding: f32,
    deadspace: f32,
    rotation: Rotation,
    taken: &mut Vec<BoxIn>,
    out: &mut Vec<PackedPosition>,
) {
    let cell_w = footprint_w + 2.0 * deadspace + padding;
    let cell_h = footprint_h + 2.0 * deadspace + padding;
    let (cols, rows) = grid_counts(sheet_w, sheet_h, cell_w, cell_h);
    let box_w = footprint_w + 2.0 * deadspace;
    let box_h = footprint_h + 2.0 * deadspace;
    for row in 0..rows {
        for col in 0..cols {
            if out.len() >= quantity {
                return;
            }
            let candidate = BoxIn::new(col as f32 * cell_w, row as f32 * cell_h, box_w, box_h);
            if taken.iter().any(|t| geometry::intersects(candidate, *t)) {
                continue;
            }
            let (x_in, y_in) = match rotation {
                Rotation::Deg0 => (candidate.x + deadspace, candidate.y + deadspace),
                Rotation::Deg90 => {
                    let (cx, cy) = candidate.center();
                    (cx - design_w * 0.5, cy - design_h * 0.5)
                }
            };
            taken.push(candidate);
            out.push(PackedPosition {
                x_in,
                y_in,
                rotation,
            });
        }
    }
}

/// Computes legal non-overlapping placements for up to `quantity` copies of a
/// `design_w × design_h` artwork, skipping cells that collide with
/// `occupied`. Deterministic: same inputs, same positions, same capacity.
///
/// The rotated phase re-tiles the whole sheet (not the leftover area) in the
/// swapped orientation and keeps only collision-free cells.
#[allow(clippy::too_many_arguments)]
pub fn auto_pack(
    sheet_w: f32,
    sheet_h: f32,
    design_w: f32,
    design_h: f32,
    quantity: usize,
    padding: f32,
    deadspace: f32,
    allow_rotate: bool,
    occupied: &[BoxIn],
) -> PackResult {
    // Capacity is a property of the sheet and design grid, so a zero
    // quantity still reports it; only degenerate dimensions short-circuit.
    let mut result = PackResult::default();
    if design_w <= 0.0 || design_h <= 0.0 || sheet_w <= 0.0 || sheet_h <= 0.0 {
        return result;
    }

    let mut taken = occupied.to_vec();
    let cell_w = design_w + 2.0 * deadspace + padding;
    let cell_h = design_h + 2.0 * deadspace + padding;
    let (cols, rows) = grid_counts(sheet_w, sheet_h, cell_w, cell_h);
    result.capacity = cols * rows;
    tile_orientation(
        sheet_w,
        sheet_h,
        design_w,
        design_h,
        design_w,
        design_h,
        quantity,
        padding,
        deadspace,
        Rotation::Deg0,
        &mut taken,
        &mut result.positions,
    );

    if allow_rotate {
        let (rcols, rrows) = grid_counts(sheet_w, sheet_h, cell_h, cell_w);
        result.capacity += rcols * rrows;
        if result.positions.len() < quantity {
            tile_orientation(
                sheet_w,
                sheet_h,
                design_w,
                design_h,
                design_h,
                design_w,
                quantity,
                padding,
                deadspace,
                Rotation::Deg90,
                &mut taken,
                &mut result.positions,
            );
        }
    }

    result
}

/// Loose first-fit heuristic for manual (non-auto) placement: a square-ish
/// grid derived from `ceil(sqrt(quantity))`, scanned row by row with a fixed
/// spacing, bounded in attempts. May return fewer positions than requested;
/// that is not an error.
pub fn scatter_positions(
    sheet_w: f32,
    sheet_h: f32,
    design_w: f32,
    design_h: f32,
    quantity: usize,
    deadspace: f32,
    occupied: &[BoxIn],
) -> Vec<PackedPosition> {
    let mut out = Vec::new();
    if quantity == 0 || design_w <= 0.0 || design_h <= 0.0 {
        return out;
    }
    let cols = ((quantity as f32).sqrt().ceil() as usize).max(1);
    let step_x = design_w + 2.0 * deadspace + SCATTER_SPACING_IN;
    let step_y = design_h + 2.0 * deadspace + SCATTER_SPACING_IN;
    let box_w = design_w + 2.0 * deadspace;
    let box_h = design_h + 2.0 * deadspace;
    let mut taken = occupied.to_vec();
    let mut attempts = 0;
    let mut row = 0;
    while out.len() < quantity && attempts < SCATTER_MAX_ATTEMPTS {
        let y = row as f32 * step_y;
        if y + box_h > sheet_h {
            break;
        }
        for col in 0..cols {
            attempts += 1;
            if out.len() >= quantity || attempts > SCATTER_MAX_ATTEMPTS {
                break;
            }
            let candidate = BoxIn::new(col as f32 * step_x, y, box_w, box_h);
            if !geometry::within_bounds(
                candidate.x,
                candidate.y,
                candidate.w,
                candidate.h,
                sheet_w,
                sheet_h,
            ) {
                continue;
            }
            if taken.iter().any(|t| geometry::intersects(candidate, *t)) {
                continue;
            }
            taken.push(candidate);
            out.push(PackedPosition {
                x_in: candidate.x + deadspace,
                y_in: candidate.y + deadspace,
                rotation: Rotation::Deg0,
            });
        }
        row += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DEADSPACE_IN;

    #[test]
    fn four_by_four_on_22x12_caps_at_eight() {
        // cell ≈ 4.439in → 4 cols × 2 rows.
        let r = auto_pack(
            22.0,
            12.0,
            4.0,
            4.0,
            20,
            PACK_PADDING_IN,
            DEADSPACE_IN,
            false,
            &[],
        );
        assert_eq!(r.capacity, 8);
        assert_eq!(r.positions.len(), 8);
    }

    #[test]
    fn positions_are_row_major_and_deterministic() {
        let a = auto_pack(22.0, 12.0, 4.0, 4.0, 8, PACK_PADDING_IN, DEADSPACE_IN, false, &[]);
        let b = auto_pack(22.0, 12.0, 4.0, 4.0, 8, PACK_PADDING_IN, DEADSPACE_IN, false, &[]);
        assert_eq!(a, b);
        // Row 0 fills left to right before row 1 starts.
        assert!(a.positions[0].x_in < a.positions[1].x_in);
        assert!(a.positions[0].y_in < a.positions[4].y_in);
        assert!((a.positions[0].y_in - a.positions[3].y_in).abs() < 1e-5);
    }

    #[test]
    fn rotated_phase_reports_summed_capacity() {
        // 6×2 design on 22×12: unrotated cell 6.439×2.439 → 3×4 = 12;
        // rotated cell 2.439×6.439 → 9×1 = 9. Capacity = 21 (upper bound).
        let r = auto_pack(22.0, 12.0, 6.0, 2.0, 100, PACK_PADDING_IN, DEADSPACE_IN, true, &[]);
        assert_eq!(r.capacity, 21);
        // Rotated cells only land where they collide with nothing placed.
        let rotated = r
            .positions
            .iter()
            .filter(|p| p.rotation == Rotation::Deg90)
            .count();
        assert!(rotated > 0);
        assert!(r.positions.len() <= 21);
        // Every pair of accepted padded boxes is disjoint.
        let boxes: Vec<BoxIn> = r
            .positions
            .iter()
            .map(|p| {
                let inst = crate::model::PlacedInstance {
                    id: 0,
                    design_id: 0,
                    x_in: p.x_in,
                    y_in: p.y_in,
                    width_in: 6.0,
                    height_in: 2.0,
                    rotation: p.rotation,
                };
                crate::geometry::padded_box(&inst, DEADSPACE_IN)
            })
            .collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!crate::geometry::intersects(*a, *b));
            }
        }
    }

    #[test]
    fn occupied_cells_are_skipped() {
        let blocker = BoxIn::new(0.0, 0.0, 4.0, 12.0);
        let r = auto_pack(
            22.0,
            12.0,
            4.0,
            4.0,
            20,
            PACK_PADDING_IN,
            DEADSPACE_IN,
            false,
            &[blocker],
        );
        // First column of both rows is blocked.
        assert_eq!(r.positions.len(), 6);
        for p in &r.positions {
            assert!(p.x_in - DEADSPACE_IN >= 4.439 - 1e-3);
        }
    }

    #[test]
    fn scatter_places_fewer_when_space_runs_out() {
        let got = scatter_positions(10.0, 10.0, 4.0, 4.0, 9, DEADSPACE_IN, &[]);
        assert!(got.len() < 9);
        assert!(!got.is_empty());
        for p in &got {
            assert!(geometry::within_bounds(
                p.x_in - DEADSPACE_IN,
                p.y_in - DEADSPACE_IN,
                4.0 + 2.0 * DEADSPACE_IN,
                4.0 + 2.0 * DEADSPACE_IN,
                10.0,
                10.0
            ));
        }
    }

    #[test]
    fn zero_quantity_still_reports_capacity() {
        // Same grid as a non-zero request: 8 per orientation for a square.
        let r = auto_pack(22.0, 12.0, 4.0, 4.0, 0, PACK_PADDING_IN, DEADSPACE_IN, true, &[]);
        assert!(r.positions.is_empty());
        assert_eq!(r.capacity, 16);
        let unrotated =
            auto_pack(22.0, 12.0, 4.0, 4.0, 0, PACK_PADDING_IN, DEADSPACE_IN, false, &[]);
        assert!(unrotated.positions.is_empty());
        assert_eq!(unrotated.capacity, 8);
    }

    #[test]
    fn degenerate_dimensions_yield_nothing() {
        let r = auto_pack(22.0, 12.0, 0.0, 4.0, 5, PACK_PADDING_IN, DEADSPACE_IN, true, &[]);
        assert_eq!(r, PackResult::default());
    }
}
