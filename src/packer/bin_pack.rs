use crate::catalog::Catalog;
use crate::models::{ContainerType, IdGen, PackedContainer, SizeClass};

/// Greedily distribute an ordered packet sequence across containers of a
/// single type.
///
/// Pure first-fit in arrival order, no backtracking. Small packets consume
/// the container's bonus allotment before touching the general budget; this
/// path-dependent rule applies only here, during the initial fill. Every
/// later check on a built container uses the flat combined budget instead
/// (see [`ContainerType::combined_unit_budget`]).
pub fn pack(
    catalog: &Catalog,
    container_type: &ContainerType,
    sequence: &[String],
    ids: &mut IdGen,
) -> Vec<PackedContainer> {
    let general_budget = container_type.general_unit_budget();
    let bonus_budget = container_type.bonus_small_capacity;

    let mut containers = Vec::new();
    let mut current = PackedContainer::empty(ids.next_id(), &container_type.id);
    let mut general_used = 0u32;
    let mut bonus_used = 0u32;

    for packet_id in sequence {
        let packet = catalog.packet(packet_id);
        let units = packet.units();

        let fits = if packet.size == SizeClass::Small && bonus_used < bonus_budget {
            bonus_used += 1;
            true
        } else if general_used + units <= general_budget {
            general_used += units;
            true
        } else {
            false
        };

        if fits {
            current.packet_ids.push(packet_id.clone());
        } else {
            if !current.packet_ids.is_empty() {
                containers.push(current);
            }
            current = PackedContainer::empty(ids.next_id(), &container_type.id);
            current.packet_ids.push(packet_id.clone());
            if packet.size == SizeClass::Small && bonus_budget > 0 {
                bonus_used = 1;
                general_used = 0;
            } else {
                bonus_used = 0;
                general_used = units;
            }
        }
    }

    if !current.packet_ids.is_empty() {
        containers.push(current);
    }
    containers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(id: &str, count: usize) -> Vec<String> {
        vec![id.to_string(); count]
    }

    #[test]
    fn test_single_packet_single_box() {
        let catalog = Catalog::builtin();
        let box_type = catalog.container_type("box");
        let mut ids = IdGen::new();

        let containers = pack(&catalog, box_type, &sequence("buckwheat", 1), &mut ids);
        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].packet_ids, vec!["buckwheat"]);
    }

    #[test]
    fn test_overflow_opens_new_container() {
        let catalog = Catalog::builtin();
        let box_type = catalog.container_type("box");
        let mut ids = IdGen::new();

        // A box holds 4 large packets; the 5th starts a second box.
        let containers = pack(&catalog, box_type, &sequence("buckwheat", 5), &mut ids);
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].packet_ids.len(), 4);
        assert_eq!(containers[1].packet_ids.len(), 1);
        assert_ne!(containers[0].id, containers[1].id);
    }

    #[test]
    fn test_bonus_slots_consumed_before_general_budget() {
        let catalog = Catalog::builtin();
        let household = catalog.container_type("household");
        let mut ids = IdGen::new();

        // 7 Small peppers: 5 fill the bonus slots, 2 land in the general
        // budget at 1 unit each.
        let containers = pack(&catalog, household, &sequence("pepper", 7), &mut ids);
        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].packet_ids.len(), 7);
    }

    #[test]
    fn test_bonus_slots_extend_capacity_for_small_packets() {
        let catalog = Catalog::builtin();
        let household = catalog.container_type("household");
        let mut ids = IdGen::new();

        // 60 general units + 5 bonus slots = 65 Small packets per container.
        let containers = pack(&catalog, household, &sequence("pepper", 66), &mut ids);
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].packet_ids.len(), 65);
        assert_eq!(containers[1].packet_ids.len(), 1);
    }

    #[test]
    fn test_large_packets_never_use_bonus_slots() {
        let catalog = Catalog::builtin();
        let household = catalog.container_type("household");
        let mut ids = IdGen::new();

        // 10 large packets exhaust the 60 general units; the 11th rolls over
        // even though 5 bonus slots sit unused.
        let containers = pack(&catalog, household, &sequence("buckwheat", 11), &mut ids);
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].packet_ids.len(), 10);
    }

    #[test]
    fn test_mixed_sizes_share_general_budget() {
        let catalog = Catalog::builtin();
        let box_type = catalog.container_type("box");
        let mut ids = IdGen::new();

        // 3 large (18) + 3 medium-small (6) = exactly 24 units in one box.
        let mut seq = sequence("buckwheat", 3);
        seq.extend(sequence("ptitim", 3));
        let containers = pack(&catalog, box_type, &seq, &mut ids);
        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].units_used(&catalog), 24);
    }

    #[test]
    fn test_empty_sequence() {
        let catalog = Catalog::builtin();
        let box_type = catalog.container_type("box");
        let mut ids = IdGen::new();

        assert!(pack(&catalog, box_type, &[], &mut ids).is_empty());
    }
}
