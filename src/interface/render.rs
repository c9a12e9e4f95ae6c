use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::session::{ContainerGroup, PlanSummary};

fn plural(n: u64, singular: &str, plural_form: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural_form)
    }
}

/// Approximate duration label: the single largest applicable bucket
/// (days < 7, weeks < 30 days, months < 365 days, then years with a
/// leftover-months suffix).
pub fn format_duration(days: u64) -> String {
    if days < 7 {
        return plural(days, "day", "days");
    }
    if days < 30 {
        return plural(days / 7, "week", "weeks");
    }
    if days < 365 {
        return plural(days / 30, "month", "months");
    }

    let years = days / 365;
    let remaining_months = (days % 365) / 30;
    let mut result = plural(years, "year", "years");
    if remaining_months > 0 {
        result.push_str(" and ");
        result.push_str(&plural(remaining_months, "month", "months"));
    }
    result
}

/// Precise duration label: up to two largest non-zero parts out of
/// years / months / weeks / days.
pub fn format_duration_precise(days: u64) -> String {
    if days == 0 {
        return "0 days".to_string();
    }

    let years = days / 365;
    let mut remainder = days % 365;
    let months = remainder / 30;
    remainder %= 30;
    let weeks = remainder / 7;
    let d = remainder % 7;

    let mut parts: Vec<String> = Vec::new();
    if years > 0 {
        parts.push(plural(years, "year", "years"));
    }
    if months > 0 {
        parts.push(plural(months, "month", "months"));
    }
    if parts.len() < 2 && weeks > 0 {
        parts.push(plural(weeks, "week", "weeks"));
    }
    if parts.len() < 2 && d > 0 {
        parts.push(plural(d, "day", "days"));
    }

    if parts.is_empty() {
        plural(days, "day", "days")
    } else {
        parts.truncate(2);
        parts.join(" and ")
    }
}

/// Print the full packet and container catalog.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Food packets ({}) ===", catalog.packets().len());
    println!();

    let max_name_len = catalog
        .packets()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10);

    for packet in catalog.packets() {
        println!(
            "  {:<width$}  [{:>2}]  {:>6} kcal | {:>5.2} kg | {:>5} RUB  (id: {})",
            packet.name,
            packet.size.label(),
            packet.calories,
            packet.weight_kg,
            packet.price,
            packet.id,
            width = max_name_len
        );
    }

    println!();
    println!("=== Container types ({}) ===", catalog.containers().len());
    println!();

    for container in catalog.containers() {
        println!(
            "  {} - {} | {} general units{} | {} RUB  (id: {})",
            container.name,
            container.description,
            container.general_unit_budget(),
            if container.bonus_small_capacity > 0 {
                format!(" + {} bonus small slots", container.bonus_small_capacity)
            } else {
                String::new()
            },
            container.price,
            container.id
        );
    }
    println!();
}

/// Print the active container list, coalesced into display groups.
pub fn display_containers(catalog: &Catalog, groups: &[ContainerGroup]) {
    if groups.is_empty() {
        println!("  (no containers packed)");
        return;
    }

    for (i, group) in groups.iter().enumerate() {
        let container = &group.container;
        let container_type = catalog.container_type(&container.container_type_id);
        let used = container.units_used(catalog);
        let max = container_type.combined_unit_budget();

        let multiplier = if group.count > 1 {
            format!("  x{}", group.count)
        } else {
            String::new()
        };

        println!(
            "  {}. {} - {} / {} units{}",
            i + 1,
            container_type.name,
            used,
            max,
            multiplier
        );

        // Per-type counts within the container, in first-seen order.
        let mut counts: Vec<(String, u32)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for packet_id in &container.packet_ids {
            match index.get(packet_id.as_str()) {
                Some(&at) => counts[at].1 += 1,
                None => {
                    index.insert(packet_id, counts.len());
                    counts.push((packet_id.clone(), 1));
                }
            }
        }

        for (packet_id, count) in counts {
            let packet = catalog.packet(&packet_id);
            println!(
                "       {} [{}] x{} ({} kcal each)",
                packet.name,
                packet.size.label(),
                count,
                packet.calories
            );
        }
    }
}

/// Print the summary block for the active plan.
pub fn display_summary(summary: &PlanSummary) {
    println!();
    println!("--- Summary ---");
    println!(
        "Calories needed: {} kcal | packed: {} kcal",
        summary.calories_needed, summary.calories_packed
    );
    println!("Goal progress: {:.0}%", summary.progress_percent);
    println!(
        "Stock lasts: {} ({} days)",
        format_duration_precise(summary.achieved_days),
        summary.achieved_days
    );
    println!("Containers: {}", summary.container_count);
    println!("Total weight: {:.1} kg", summary.total_weight_kg);
    println!("Total cost: {} RUB", summary.total_cost);
    println!();
}
