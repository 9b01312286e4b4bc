/// One row of a sheet's quantity-break table. `from..=to` is the inclusive
/// quantity range; `to` of `None` means the band is open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceBand {
    pub from: u32,
    pub to: Option<u32>,
    pub unit_price_cents: u32,
}

const fn band(from: u32, to: Option<u32>, unit_price_cents: u32) -> PriceBand {
    PriceBand {
        from,
        to,
        unit_price_cents,
    }
}

const BANDS_22X12: &[PriceBand] = &[
    band(1, Some(4), 899),
    band(5, Some(9), 799),
    band(10, Some(24), 699),
    band(25, None, 599),
];

const BANDS_22X24: &[PriceBand] = &[
    band(1, Some(4), 1599),
    band(5, Some(9), 1449),
    band(10, Some(24), 1299),
    band(25, None, 1149),
];

const BANDS_22X36: &[PriceBand] = &[
    band(1, Some(4), 2299),
    band(5, Some(9), 2099),
    band(10, Some(24), 1899),
    band(25, None, 1699),
];

const BANDS_22X60: &[PriceBand] = &[
    band(1, Some(4), 3499),
    band(5, Some(9), 3199),
    band(10, Some(24), 2899),
    band(25, None, 2599),
];

/// Quantity-break table for a sheet size; `None` for an unknown id. Bands
/// are contiguous, ascending, and end with an open-ended row.
pub fn bands_for_sheet(sheet_id: &str) -> Option<&'static [PriceBand]> {
    match sheet_id {
        "22x12" => Some(BANDS_22X12),
        "22x24" => Some(BANDS_22X24),
        "22x36" => Some(BANDS_22X36),
        "22x60" => Some(BANDS_22X60),
        _ => None,
    }
}

/// The band whose range contains `quantity`. Quantity zero prices as one.
pub fn effective_band(sheet_id: &str, quantity: u32) -> Option<PriceBand> {
    let quantity = quantity.max(1);
    bands_for_sheet(sheet_id)?
        .iter()
        .find(|b| b.from <= quantity && b.to.is_none_or(|to| quantity <= to))
        .copied()
}

pub fn unit_price_cents(sheet_id: &str, quantity: u32) -> Option<u32> {
    effective_band(sheet_id, quantity).map(|b| b.unit_price_cents)
}

pub fn order_total_cents(sheet_id: &str, quantity: u32) -> Option<u64> {
    let quantity = quantity.max(1);
    unit_price_cents(sheet_id, quantity).map(|unit| unit as u64 * quantity as u64)
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
