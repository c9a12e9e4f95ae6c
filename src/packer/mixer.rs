use crate::packer::allocator::PoolEntry;

/// Order the allocator's flat output for packing.
///
/// With `mix` off, the list is sorted ascending by packet id, grouping
/// identical types contiguously. With `mix` on, the list is partitioned back
/// into per-type sublists (in pool order) and round-robin interleaved, each
/// sublist consumed as a stack, so types spread evenly across the eventual
/// container sequence.
pub fn order_for_packing(pool: &[PoolEntry], mut packets: Vec<String>, mix: bool) -> Vec<String> {
    if !mix {
        packets.sort();
        return packets;
    }

    let mut sublists: Vec<Vec<String>> = pool
        .iter()
        .map(|entry| {
            packets
                .iter()
                .filter(|id| **id == entry.packet_id)
                .cloned()
                .collect()
        })
        .collect();

    let mut mixed = Vec::with_capacity(packets.len());
    loop {
        let mut took_any = false;
        for sublist in &mut sublists {
            if let Some(id) = sublist.pop() {
                mixed.push(id);
                took_any = true;
            }
        }
        if !took_any {
            break;
        }
    }
    mixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unmixed_groups_by_id_ascending() {
        let pool = vec![PoolEntry::new("rice", 5), PoolEntry::new("buckwheat", 5)];
        let flat = ids(&["rice", "rice", "buckwheat", "rice", "buckwheat"]);

        let out = order_for_packing(&pool, flat, false);
        assert_eq!(
            out,
            ids(&["buckwheat", "buckwheat", "rice", "rice", "rice"])
        );
    }

    #[test]
    fn test_mixed_alternates_while_both_remain() {
        let pool = vec![PoolEntry::new("buckwheat", 5), PoolEntry::new("rice", 5)];
        let flat = ids(&[
            "buckwheat",
            "buckwheat",
            "buckwheat",
            "buckwheat",
            "rice",
            "rice",
            "rice",
            "rice",
        ]);

        let out = order_for_packing(&pool, flat, true);
        assert_eq!(out.len(), 8);

        // No two consecutive items share a type while both sublists last.
        for window in out.windows(2) {
            assert_ne!(window[0], window[1], "types should alternate: {:?}", out);
        }
    }

    #[test]
    fn test_mixed_drains_longer_sublist_at_tail() {
        let pool = vec![PoolEntry::new("buckwheat", 5), PoolEntry::new("rice", 5)];
        let flat = ids(&["buckwheat", "buckwheat", "buckwheat", "rice"]);

        let out = order_for_packing(&pool, flat, true);
        assert_eq!(out, ids(&["buckwheat", "rice", "buckwheat", "buckwheat"]));
    }

    #[test]
    fn test_empty_input() {
        let pool = vec![PoolEntry::new("buckwheat", 5)];
        assert!(order_for_packing(&pool, Vec::new(), true).is_empty());
        assert!(order_for_packing(&pool, Vec::new(), false).is_empty());
    }
}
