use crate::catalog::Catalog;
use crate::models::{ContainerId, IdGen, PackedContainer};
use crate::packer::{allocate, order_for_packing, pack, PoolEntry, MAX_PROPORTION};
use crate::session::summary::{group_containers, ContainerGroup, PlanSummary};

/// Default daily caloric target per person.
pub const DEFAULT_DAILY_CALORIES: u32 = 2000;

/// Which container list the session is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackMode {
    Auto,
    Manual,
}

/// A single planning session.
///
/// Owns all mutable state; every derived value (containers in auto mode,
/// summary figures, display groups) is recomputed from this state on read,
/// so derived data can never drift from its source.
///
/// Auto mode carries an edit log: the derived container list is authoritative
/// until the first manual edit materializes an override, which then holds
/// regardless of pool/duration changes until [`PlanSession::reset_auto_override`].
/// Manual mode has its own always-authoritative list; switching modes clears
/// neither.
pub struct PlanSession<'a> {
    catalog: &'a Catalog,
    duration_days: u32,
    people_count: u32,
    daily_calories: u32,
    mode: PackMode,
    pool: Vec<PoolEntry>,
    auto_container_id: String,
    mix: bool,
    auto_override: Option<Vec<PackedContainer>>,
    manual_containers: Vec<PackedContainer>,
    ids: IdGen,
}

impl<'a> PlanSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        // Catalog validation guarantees at least one container type.
        let default_container = catalog.containers()[0].id.clone();
        Self {
            catalog,
            duration_days: 30,
            people_count: 1,
            daily_calories: DEFAULT_DAILY_CALORIES,
            mode: PackMode::Auto,
            pool: Vec::new(),
            auto_container_id: default_container,
            mix: true,
            auto_override: None,
            manual_containers: Vec::new(),
            ids: IdGen::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    // ── Plan inputs ─────────────────────────────────────────────────────

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn set_duration_days(&mut self, days: u32) {
        self.duration_days = days;
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn set_people_count(&mut self, people: u32) {
        self.people_count = people;
    }

    pub fn daily_calories(&self) -> u32 {
        self.daily_calories
    }

    pub fn set_daily_calories(&mut self, calories: u32) {
        self.daily_calories = calories;
    }

    /// Total calories the plan must cover.
    pub fn target_calories(&self) -> u64 {
        u64::from(self.duration_days) * u64::from(self.people_count) * u64::from(self.daily_calories)
    }

    // ── Auto-pack configuration ─────────────────────────────────────────

    pub fn mode(&self) -> PackMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PackMode) {
        self.mode = mode;
    }

    pub fn pool(&self) -> &[PoolEntry] {
        &self.pool
    }

    /// Insert or update a pool entry. Proportions are clamped to 0..=10.
    pub fn set_pool_entry(&mut self, packet_id: &str, proportion: u32) {
        let proportion = proportion.min(MAX_PROPORTION);
        match self.pool.iter_mut().find(|e| e.packet_id == packet_id) {
            Some(entry) => entry.proportion = proportion,
            None => self.pool.push(PoolEntry::new(packet_id, proportion)),
        }
    }

    pub fn remove_pool_entry(&mut self, packet_id: &str) -> bool {
        let before = self.pool.len();
        self.pool.retain(|e| e.packet_id != packet_id);
        self.pool.len() != before
    }

    pub fn auto_container_id(&self) -> &str {
        &self.auto_container_id
    }

    pub fn set_auto_container(&mut self, container_type_id: &str) {
        self.auto_container_id = container_type_id.to_string();
    }

    pub fn mix(&self) -> bool {
        self.mix
    }

    pub fn set_mix(&mut self, mix: bool) {
        self.mix = mix;
    }

    // ── Container lists ─────────────────────────────────────────────────

    /// Run the allocator → mixer → packer pipeline against current inputs.
    ///
    /// Deterministic: the same inputs always produce the same containers,
    /// numbered from a fresh id generator, so ids handed out by
    /// [`PlanSession::active_containers`] stay valid for edit calls as long
    /// as the inputs have not changed.
    pub fn derived_auto_containers(&self) -> Vec<PackedContainer> {
        let flat = allocate(self.catalog, &self.pool, self.target_calories() as f64);
        let ordered = order_for_packing(&self.pool, flat, self.mix);
        let container_type = self.catalog.container_type(&self.auto_container_id);
        let mut ids = IdGen::new();
        pack(self.catalog, container_type, &ordered, &mut ids)
    }

    /// The container list the current mode displays and edits.
    pub fn active_containers(&self) -> Vec<PackedContainer> {
        match self.mode {
            PackMode::Auto => self
                .auto_override
                .clone()
                .unwrap_or_else(|| self.derived_auto_containers()),
            PackMode::Manual => self.manual_containers.clone(),
        }
    }

    /// Active containers coalesced into display groups.
    pub fn grouped_containers(&self) -> Vec<ContainerGroup> {
        group_containers(&self.active_containers())
    }

    /// Summary figures for the active container list.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::compute(
            self.catalog,
            &self.active_containers(),
            self.duration_days,
            self.people_count,
            self.daily_calories,
        )
    }

    // ── Edit log ────────────────────────────────────────────────────────

    /// Whether auto mode currently holds a manual override.
    pub fn is_overridden(&self) -> bool {
        self.auto_override.is_some()
    }

    /// Discard the auto-mode override and revert to the derived pipeline.
    pub fn reset_auto_override(&mut self) {
        self.auto_override = None;
    }

    /// The list the current mode's edits apply to. In auto mode the first
    /// edit materializes the derived list as the override.
    fn edit_list_mut(&mut self) -> &mut Vec<PackedContainer> {
        match self.mode {
            PackMode::Auto => {
                if self.auto_override.is_none() {
                    let derived = self.derived_auto_containers();
                    // The derived list is numbered by its own generator;
                    // advance the session's so fresh ids stay unique.
                    for container in &derived {
                        self.ids.skip_past(container.id);
                    }
                    self.auto_override = Some(derived);
                }
                self.auto_override.get_or_insert_with(Vec::new)
            }
            PackMode::Manual => &mut self.manual_containers,
        }
    }

    // ── Container mutations (shared by auto edits and manual mode) ──────

    /// Add an empty container of the given type. Returns its fresh id.
    pub fn add_container(&mut self, container_type_id: &str) -> ContainerId {
        // Assert the type exists up front; ids are validated at the CLI edge.
        let type_id = self.catalog.container_type(container_type_id).id.clone();
        let id = self.ids.next_id();
        self.edit_list_mut()
            .push(PackedContainer::empty(id, &type_id));
        id
    }

    /// Remove a container by id. Returns false if no such container.
    pub fn remove_container(&mut self, id: ContainerId) -> bool {
        let list = self.edit_list_mut();
        let before = list.len();
        list.retain(|c| c.id != id);
        list.len() != before
    }

    /// Remove a batch of containers (a coalesced display group).
    pub fn remove_containers(&mut self, ids: &[ContainerId]) -> usize {
        let list = self.edit_list_mut();
        let before = list.len();
        list.retain(|c| !ids.contains(&c.id));
        before - list.len()
    }

    /// Remove every container from the active list.
    pub fn clear_containers(&mut self) {
        self.edit_list_mut().clear();
    }

    /// Add a packet to a container if the flat combined budget allows.
    ///
    /// Returns false, with no state change, when the packet does not fit
    /// or the container id is unknown. A false return is the only signal;
    /// capacity rejection is deliberately not an error.
    pub fn add_packet_if_fits(&mut self, container_id: ContainerId, packet_id: &str) -> bool {
        let catalog = self.catalog;
        let list = self.edit_list_mut();
        let Some(container) = list.iter_mut().find(|c| c.id == container_id) else {
            return false;
        };
        if container.fits(catalog, packet_id) {
            container.packet_ids.push(packet_id.to_string());
            true
        } else {
            false
        }
    }

    /// Add a packet to the first container that can take it, opening a fresh
    /// container of the default type when none fits. Returns the receiving
    /// container's id.
    pub fn add_packet_to_first_available(&mut self, packet_id: &str) -> ContainerId {
        let catalog = self.catalog;
        let target = self
            .edit_list_mut()
            .iter()
            .find(|c| c.fits(catalog, packet_id))
            .map(|c| c.id);

        let container_id = match target {
            Some(id) => id,
            None => {
                let default_type = catalog.containers()[0].id.clone();
                self.add_container(&default_type)
            }
        };

        self.add_packet_if_fits(container_id, packet_id);
        container_id
    }

    /// Remove the last occurrence of a packet from a container.
    pub fn remove_packet(&mut self, container_id: ContainerId, packet_id: &str) -> bool {
        let list = self.edit_list_mut();
        match list.iter_mut().find(|c| c.id == container_id) {
            Some(container) => container.remove_last(packet_id),
            None => false,
        }
    }
}
