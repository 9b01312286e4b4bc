use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::model::DesignFile;
use crate::pricing;
use crate::store::Snapshot;

/// Layout occupancy figures shown next to the order summary.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UsageStats {
    pub instance_count: usize,
    /// Fraction of the sheet covered by artwork footprints, deadspace
    /// excluded. Purely informational.
    pub coverage_ratio: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InstanceLayout {
    pub id: u64,
    pub design_id: u64,
    pub x_in: f32,
    pub y_in: f32,
    pub width_in: f32,
    pub height_in: f32,
    pub rotation_deg: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DesignSummary {
    pub id: u64,
    pub name: String,
    pub natural_width_px: u32,
    pub natural_height_px: u32,
    pub width_in: f32,
    pub height_in: f32,
    pub quantity: usize,
}

/// Everything a fulfillment backend needs to reproduce the sheet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    pub sheet_id: String,
    pub sheet_width_in: f32,
    pub sheet_height_in: f32,
    pub sheet_quantity: u32,
    pub unit_price_cents: u32,
    pub total_cents: u64,
    pub designs: Vec<DesignSummary>,
    pub instances: Vec<InstanceLayout>,
    pub usage: UsageStats,
}

pub fn usage_stats(snapshot: &Snapshot) -> UsageStats {
    let sheet_area = snapshot.sheet.width_in * snapshot.sheet.height_in;
    if sheet_area <= 0.0 {
        return UsageStats::default();
    }
    let covered: f32 = snapshot
        .instances
        .iter()
        .map(|i| geometry::footprint_box(i).area())
        .sum();
    UsageStats {
        instance_count: snapshot.instances.len(),
        coverage_ratio: covered / sheet_area,
    }
}

fn summarize_design(snapshot: &Snapshot, design: &DesignFile) -> DesignSummary {
    DesignSummary {
        id: design.id,
        name: design.name.clone(),
        natural_width_px: design.natural_width_px,
        natural_height_px: design.natural_height_px,
        width_in: design.width_in,
        height_in: design.height_in,
        quantity: snapshot
            .instances
            .iter()
            .filter(|i| i.design_id == design.id)
            .count(),
    }
}

/// Flattens the current state into an order. Instance coordinates stay in
/// sheet inches with the unrotated top-left convention.
pub fn build_order_payload(snapshot: &Snapshot) -> OrderPayload {
    OrderPayload {
        sheet_id: snapshot.sheet.id.clone(),
        sheet_width_in: snapshot.sheet.width_in,
        sheet_height_in: snapshot.sheet.height_in,
        sheet_quantity: snapshot.sheet_quantity,
        unit_price_cents: pricing::unit_price_cents(&snapshot.sheet.id, snapshot.sheet_quantity)
            .unwrap_or(0),
        total_cents: pricing::order_total_cents(&snapshot.sheet.id, snapshot.sheet_quantity)
            .unwrap_or(0),
        designs: snapshot
            .designs
            .iter()
            .map(|d| summarize_design(snapshot, d))
            .collect(),
        instances: snapshot
            .instances
            .iter()
            .map(|i| InstanceLayout {
                id: i.id,
                design_id: i.design_id,
                x_in: i.x_in,
                y_in: i.y_in,
                width_in: i.width_in,
                height_in: i.height_in,
                rotation_deg: i.rotation.degrees(),
            })
            .collect(),
        usage: usage_stats(snapshot),
    }
}

/// Seam for order submission so the UI never talks to a backend directly.
pub trait CheckoutService {
    /// Submits an order, returning a human-readable confirmation.
    fn submit(&mut self, payload: &OrderPayload) -> Result<String, String>;
}

/// Writes the order payload as pretty JSON next to the app; stands in for a
/// network backend.
pub struct JsonFileCheckout {
    path: PathBuf,
}

impl JsonFileCheckout {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CheckoutService for JsonFileCheckout {
    fn submit(&mut self, payload: &OrderPayload) -> Result<String, String> {
        if payload.instances.is_empty() {
            return Err("Nothing to order: the sheet is empty".to_string());
        }
        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| format!("Failed to encode order: {e}"))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))?;
        Ok(format!(
            "Order saved to {} ({} sheet{}, {})",
            self.path.display(),
            payload.sheet_quantity,
            if payload.sheet_quantity == 1 { "" } else { "s" },
            pricing::format_cents(payload.total_cents)
        ))
    }
}
