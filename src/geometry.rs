use crate::model::{PlacedInstance, Rotation};

/// Display pixels per sheet inch at zoom 1.0.
pub const PX_PER_IN: f32 = 40.0;

/// Fixed physical margin (≈4 mm) the printing process requires around every
/// artwork. Always included in collision and bounds checks.
pub const DEADSPACE_IN: f32 = 0.157;

/// Float slack for bounds/overlap tests, in inches. Keeps a group drag from
/// being rejected because two boxes that share an edge drift apart by one ulp.
const EPS: f32 = 1e-4;

/// Axis-aligned rectangle in sheet inches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxIn {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoxIn {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

pub fn to_pixels(inches: f32) -> f32 {
    inches * PX_PER_IN
}

pub fn to_inches(px: f32) -> f32 {
    px / PX_PER_IN
}

/// Rounds to the nearest multiple of `increment`; an increment of zero (or
/// anything non-positive) disables snapping.
pub fn snap(value: f32, increment: f32) -> f32 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// True iff the rectangle lies fully inside `[0, sheet_w] × [0, sheet_h]`.
pub fn within_bounds(x: f32, y: f32, w: f32, h: f32, sheet_w: f32, sheet_h: f32) -> bool {
    x >= -EPS && y >= -EPS && x + w <= sheet_w + EPS && y + h <= sheet_h + EPS
}

/// Open-rectangle overlap test: two rectangles sharing only an edge do not
/// intersect.
pub fn intersects(a: BoxIn, b: BoxIn) -> bool {
    a.x + EPS < b.x + b.w && a.x + a.w > b.x + EPS && a.y + EPS < b.y + b.h && a.y + a.h > b.y + EPS
}

/// The artwork's occupied footprint before deadspace: the unrotated rect, or
/// the width/height-swapped rect pivoted about the artwork's own center when
/// rotated 90°.
pub fn footprint_box(instance: &PlacedInstance) -> BoxIn {
    match instance.rotation {
        Rotation::Deg0 => BoxIn::new(
            instance.x_in,
            instance.y_in,
            instance.width_in,
            instance.height_in,
        ),
        Rotation::Deg90 => {
            let cx = instance.x_in + instance.width_in * 0.5;
            let cy = instance.y_in + instance.height_in * 0.5;
            BoxIn::new(
                cx - instance.height_in * 0.5,
                cy - instance.width_in * 0.5,
                instance.height_in,
                instance.width_in,
            )
        }
    }
}

/// The bounding box used for every collision and bounds check: the footprint
/// inflated by `deadspace` on all four sides.
pub fn padded_box(instance: &PlacedInstance, deadspace: f32) -> BoxIn {
    let fp = footprint_box(instance);
    BoxIn::new(
        fp.x - deadspace,
        fp.y - deadspace,
        fp.w + 2.0 * deadspace,
        fp.h + 2.0 * deadspace,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(x: f32, y: f32, w: f32, h: f32, rotation: Rotation) -> PlacedInstance {
        PlacedInstance {
            id: 1,
            design_id: 1,
            x_in: x,
            y_in: y,
            width_in: w,
            height_in: h,
            rotation,
        }
    }

    #[test]
    fn pixel_conversion_round_trips() {
        for v in [0.0, 0.157, 4.439, 22.0] {
            assert!((to_inches(to_pixels(v)) - v).abs() < 1e-5);
        }
    }

    #[test]
    fn snap_zero_increment_is_identity() {
        assert_eq!(snap(3.37, 0.0), 3.37);
        assert_eq!(snap(3.37, -1.0), 3.37);
    }

    #[test]
    fn snap_is_idempotent() {
        let once = snap(3.37, 0.25);
        assert_eq!(once, 3.25);
        assert_eq!(snap(once, 0.25), once);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = BoxIn::new(0.0, 0.0, 4.0, 4.0);
        let b = BoxIn::new(4.0, 0.0, 4.0, 4.0);
        assert!(!intersects(a, b));
        let c = BoxIn::new(3.9, 0.0, 4.0, 4.0);
        assert!(intersects(a, c));
        assert!(intersects(c, a));
    }

    #[test]
    fn bounds_test_is_inclusive_of_edges() {
        assert!(within_bounds(0.0, 0.0, 22.0, 12.0, 22.0, 12.0));
        assert!(!within_bounds(0.0, 0.0, 22.1, 12.0, 22.0, 12.0));
        assert!(!within_bounds(-0.5, 0.0, 4.0, 4.0, 22.0, 12.0));
    }

    #[test]
    fn padded_box_inflates_by_deadspace() {
        let b = padded_box(&instance(1.0, 2.0, 4.0, 3.0, Rotation::Deg0), 0.157);
        assert!((b.x - 0.843).abs() < 1e-5);
        assert!((b.y - 1.843).abs() < 1e-5);
        assert!((b.w - 4.314).abs() < 1e-5);
        assert!((b.h - 3.314).abs() < 1e-5);
    }

    #[test]
    fn rotated_padded_box_pivots_about_artwork_center() {
        let i = instance(1.0, 2.0, 4.0, 2.0, Rotation::Deg90);
        let b = padded_box(&i, 0.157);
        // Center stays at (3.0, 3.0); width and height swap before inflation.
        let (cx, cy) = b.center();
        assert!((cx - 3.0).abs() < 1e-5);
        assert!((cy - 3.0).abs() < 1e-5);
        assert!((b.w - (2.0 + 0.314)).abs() < 1e-5);
        assert!((b.h - (4.0 + 0.314)).abs() < 1e-5);
    }
}
