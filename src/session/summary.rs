use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::{ContainerId, PackedContainer};

/// Derived totals for the active container list.
///
/// Always recomputed from the list; never stored or mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub calories_needed: u64,
    pub calories_packed: u64,
    /// Capped at 100.
    pub progress_percent: f64,
    /// Whole days the packed calories cover for the given party.
    pub achieved_days: u64,
    pub container_count: usize,
    pub total_weight_kg: f64,
    /// Container prices plus packet prices across all placed instances.
    pub total_cost: u64,
}

impl PlanSummary {
    pub fn compute(
        catalog: &Catalog,
        containers: &[PackedContainer],
        duration_days: u32,
        people_count: u32,
        daily_calories: u32,
    ) -> Self {
        let calories_needed =
            u64::from(duration_days) * u64::from(people_count) * u64::from(daily_calories);

        let mut calories_packed = 0u64;
        let mut total_weight_kg = 0.0f64;
        let mut total_cost = 0u64;

        for container in containers {
            total_cost += u64::from(catalog.container_type(&container.container_type_id).price);
            for packet_id in &container.packet_ids {
                let packet = catalog.packet(packet_id);
                calories_packed += u64::from(packet.calories);
                total_weight_kg += packet.weight_kg;
                total_cost += u64::from(packet.price);
            }
        }

        let progress_percent = if calories_needed == 0 {
            if calories_packed == 0 { 0.0 } else { 100.0 }
        } else {
            (calories_packed as f64 / calories_needed as f64 * 100.0).min(100.0)
        };

        let daily_burn = u64::from(people_count) * u64::from(daily_calories);
        let achieved_days = if daily_burn == 0 {
            0
        } else {
            calories_packed / daily_burn
        };

        Self {
            calories_needed,
            calories_packed,
            progress_percent,
            achieved_days,
            container_count: containers.len(),
            total_weight_kg,
            total_cost,
        }
    }
}

/// A presentation-only merge of container instances identical in type and
/// packet multiset, shown with a multiplier count. Members stay distinct and
/// removable as a batch via `member_ids`.
#[derive(Debug, Clone)]
pub struct ContainerGroup {
    /// Representative instance (the first seen).
    pub container: PackedContainer,
    pub count: usize,
    pub member_ids: Vec<ContainerId>,
}

/// Coalesce containers for display, preserving first-seen order.
pub fn group_containers(containers: &[PackedContainer]) -> Vec<ContainerGroup> {
    let mut groups: Vec<ContainerGroup> = Vec::new();
    let mut index: HashMap<(String, Vec<String>), usize> = HashMap::new();

    for container in containers {
        let mut sorted_packets = container.packet_ids.clone();
        sorted_packets.sort();
        let key = (container.container_type_id.clone(), sorted_packets);

        match index.get(&key) {
            Some(&i) => {
                groups[i].count += 1;
                groups[i].member_ids.push(container.id);
            }
            None => {
                index.insert(key, groups.len());
                groups.push(ContainerGroup {
                    container: container.clone(),
                    count: 1,
                    member_ids: vec![container.id],
                });
            }
        }
    }
    groups
}
