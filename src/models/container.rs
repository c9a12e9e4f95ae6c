use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// An immutable catalog entry describing one storage container type.
///
/// `general_capacity` is expressed in Large-equivalent units; the actual
/// general unit budget is `general_capacity * 6`. `bonus_small_capacity` is a
/// separate allotment usable only by Small packets during the initial
/// auto-pack fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerType {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "GeneralCapacity")]
    pub general_capacity: u32,

    #[serde(rename = "BonusSmallCapacity")]
    pub bonus_small_capacity: u32,

    #[serde(rename = "Price")]
    pub price: u32,

    #[serde(rename = "Description")]
    pub description: String,
}

impl ContainerType {
    /// General unit budget available to packets of any size.
    #[inline]
    pub fn general_unit_budget(&self) -> u32 {
        self.general_capacity * 6
    }

    /// Flat budget applied to every check on an already-built container.
    ///
    /// Once a container exists, its bonus allotment is treated as fungible
    /// extra general budget. Only the bin packer's initial fill restricts
    /// bonus slots to Small packets; the asymmetry is intentional.
    #[inline]
    pub fn combined_unit_budget(&self) -> u32 {
        self.general_unit_budget() + self.bonus_small_capacity
    }

    /// Basic validation: non-empty id.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Opaque identity of a container instance.
///
/// Never semantically meaningful beyond equality and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

/// Monotonic generator for fresh container ids.
#[derive(Debug, Default)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ContainerId {
        let id = ContainerId(self.next);
        self.next += 1;
        id
    }

    /// Ensure every subsequently issued id is greater than `id`.
    ///
    /// Used when a container list numbered by another generator is adopted
    /// into a session, so fresh ids cannot collide with adopted ones.
    pub fn skip_past(&mut self, id: ContainerId) {
        self.next = self.next.max(id.0 + 1);
    }
}

/// A concrete container instance holding packet ids (repeats allowed,
/// insertion order preserved).
#[derive(Debug, Clone, PartialEq)]
pub struct PackedContainer {
    pub id: ContainerId,
    pub container_type_id: String,
    pub packet_ids: Vec<String>,
}

impl PackedContainer {
    pub fn empty(id: ContainerId, container_type_id: &str) -> Self {
        Self {
            id,
            container_type_id: container_type_id.to_string(),
            packet_ids: Vec::new(),
        }
    }

    /// Flat unit usage: plain sum of per-packet unit costs, ignoring how the
    /// bonus allotment was consumed during the initial fill.
    pub fn units_used(&self, catalog: &Catalog) -> u32 {
        self.packet_ids
            .iter()
            .map(|id| catalog.packet(id).units())
            .sum()
    }

    /// Whether one more packet of the given type fits, using the flat
    /// combined budget (see [`ContainerType::combined_unit_budget`]).
    pub fn fits(&self, catalog: &Catalog, packet_id: &str) -> bool {
        let container_type = catalog.container_type(&self.container_type_id);
        let needed = catalog.packet(packet_id).units();
        self.units_used(catalog) + needed <= container_type.combined_unit_budget()
    }

    /// Remove the last occurrence of a packet id. Returns false if absent.
    pub fn remove_last(&mut self, packet_id: &str) -> bool {
        match self.packet_ids.iter().rposition(|id| id == packet_id) {
            Some(index) => {
                self.packet_ids.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample_type() -> ContainerType {
        ContainerType {
            id: "box".to_string(),
            name: "Cardboard box".to_string(),
            general_capacity: 4,
            bonus_small_capacity: 0,
            price: 100,
            description: "Holds 4 large packets".to_string(),
        }
    }

    #[test]
    fn test_unit_budgets() {
        let box_type = sample_type();
        assert_eq!(box_type.general_unit_budget(), 24);
        assert_eq!(box_type.combined_unit_budget(), 24);

        let mut household = sample_type();
        household.general_capacity = 10;
        household.bonus_small_capacity = 5;
        assert_eq!(household.general_unit_budget(), 60);
        assert_eq!(household.combined_unit_budget(), 65);
    }

    #[test]
    fn test_id_gen_is_monotonic() {
        let mut ids = IdGen::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_id_gen_skip_past_avoids_adopted_ids() {
        let mut foreign = IdGen::new();
        let adopted: Vec<ContainerId> = (0..3).map(|_| foreign.next_id()).collect();

        let mut ids = IdGen::new();
        for id in &adopted {
            ids.skip_past(*id);
        }
        assert!(ids.next_id() > adopted[2]);

        // Skipping past an already-passed id is a no-op.
        let high = ids.next_id();
        ids.skip_past(adopted[0]);
        assert!(ids.next_id() > high);
    }

    #[test]
    fn test_units_used_and_fits() {
        let catalog = Catalog::builtin();
        let mut ids = IdGen::new();
        let mut container = PackedContainer::empty(ids.next_id(), "box");

        // 3 large packets = 18 of 24 units; a 4th still fits, a 5th does not.
        for _ in 0..3 {
            container.packet_ids.push("buckwheat".to_string());
        }
        assert_eq!(container.units_used(&catalog), 18);
        assert!(container.fits(&catalog, "rice"));

        container.packet_ids.push("rice".to_string());
        assert_eq!(container.units_used(&catalog), 24);
        assert!(!container.fits(&catalog, "buckwheat"));

        // Small packets no longer fit either once the flat budget is full.
        assert!(!container.fits(&catalog, "pepper"));
    }

    #[test]
    fn test_remove_last_occurrence() {
        let catalog = Catalog::builtin();
        let mut ids = IdGen::new();
        let mut container = PackedContainer::empty(ids.next_id(), "box");
        container.packet_ids =
            vec!["rice".to_string(), "buckwheat".to_string(), "rice".to_string()];

        assert!(container.remove_last("rice"));
        assert_eq!(container.packet_ids, vec!["rice", "buckwheat"]);
        assert_eq!(container.units_used(&catalog), 12);

        assert!(!container.remove_last("salt"));
    }
}
