use crate::catalog::Catalog;

/// Highest proportion a pool entry can carry.
pub const MAX_PROPORTION: u32 = 10;

/// One entry of the auto-pack pool: a packet type and its relative share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub packet_id: String,
    pub proportion: u32,
}

impl PoolEntry {
    pub fn new(packet_id: &str, proportion: u32) -> Self {
        Self {
            packet_id: packet_id.to_string(),
            proportion: proportion.min(MAX_PROPORTION),
        }
    }
}

/// Expand a weighted pool into a flat list of packet ids whose combined
/// calories approximate `target_calories`.
///
/// Per-type counts are rounded half-up, so the achieved total may drift from
/// the target by a fraction of one packet; there is no remainder-correction
/// pass. Degenerate pools (empty, all-zero proportions, or zero weighted
/// calories per unit, e.g. only salt) yield an empty list.
pub fn allocate(catalog: &Catalog, pool: &[PoolEntry], target_calories: f64) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    let total_proportion: u32 = pool.iter().map(|e| e.proportion).sum();
    if total_proportion == 0 {
        return Vec::new();
    }
    let total = f64::from(total_proportion);

    let weighted_calories_per_unit: f64 = pool
        .iter()
        .map(|entry| {
            let share = f64::from(entry.proportion) / total;
            share * f64::from(catalog.packet(&entry.packet_id).calories)
        })
        .sum();

    if weighted_calories_per_unit == 0.0 {
        return Vec::new();
    }

    let total_units_needed = target_calories / weighted_calories_per_unit;

    let mut out = Vec::new();
    for entry in pool {
        let share = f64::from(entry.proportion) / total;
        // Nonnegative operand, so round() is round-half-up here.
        let count = (share * total_units_needed).round() as u64;
        for _ in 0..count {
            out.push(entry.packet_id.clone());
        }
    }
    out
}
