use serde::{Deserialize, Serialize};

/// Uploads default to this physical size: natural pixels at 300 DPI.
pub const REFERENCE_DPI: f32 = 300.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SheetSize {
    pub id: String,
    pub label: String,
    pub width_in: f32,
    pub height_in: f32,
}

fn sheet(id: &str, label: &str, width_in: f32, height_in: f32) -> SheetSize {
    SheetSize {
        id: id.to_string(),
        label: label.to_string(),
        width_in,
        height_in,
    }
}

/// Fixed catalog, loaded once at startup and never mutated.
pub fn sheet_catalog() -> Vec<SheetSize> {
    vec![
        sheet("22x12", "Gang Sheet 22\" × 12\"", 22.0, 12.0),
        sheet("22x24", "Gang Sheet 22\" × 24\"", 22.0, 24.0),
        sheet("22x36", "Gang Sheet 22\" × 36\"", 22.0, 36.0),
        sheet("22x60", "Gang Sheet 22\" × 60\"", 22.0, 60.0),
    ]
}

pub fn sheet_by_id(id: &str) -> Option<SheetSize> {
    sheet_catalog().into_iter().find(|s| s.id == id)
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub fn toggled(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Rotation::Deg90
    }
}

/// An uploaded artwork asset. The decoded pixels live in the controller's
/// texture cache; the store only owns this metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    pub id: u64,
    pub name: String,
    pub natural_width_px: u32,
    pub natural_height_px: u32,
    pub width_in: f32,
    pub height_in: f32,
}

impl DesignFile {
    /// Effective print resolution at the current physical size. Informational
    /// only; layout logic never depends on it.
    pub fn dpi_estimate(&self) -> f32 {
        if self.width_in <= f32::EPSILON || self.height_in <= f32::EPSILON {
            return 0.0;
        }
        let dx = self.natural_width_px as f32 / self.width_in;
        let dy = self.natural_height_px as f32 / self.height_in;
        dx.min(dy)
    }
}

/// One physical copy of a design on the sheet. `(x_in, y_in)` is the top-left
/// of the unrotated artwork rect; the size is copied from the owning design at
/// placement time, not a live reference.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlacedInstance {
    pub id: u64,
    pub design_id: u64,
    pub x_in: f32,
    pub y_in: f32,
    pub width_in: f32,
    pub height_in: f32,
    pub rotation: Rotation,
}
