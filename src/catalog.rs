use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StockError};
use crate::models::{ContainerType, FoodPacket};

/// JSON shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(rename = "Packets")]
    packets: Vec<FoodPacket>,

    #[serde(rename = "Containers")]
    containers: Vec<ContainerType>,
}

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// The closed, read-only catalog of packet and container definitions.
///
/// Loaded and validated once per process. After validation, every id held by
/// session state refers to a catalog entry, so the infallible lookups
/// ([`Catalog::packet`], [`Catalog::container_type`]) panic on a miss: an
/// unknown id at that point is a programming error, not a runtime condition.
/// User-supplied ids go through the fallible `get_*` variants instead.
#[derive(Debug)]
pub struct Catalog {
    packets: Vec<FoodPacket>,
    containers: Vec<ContainerType>,
    packet_index: HashMap<String, usize>,
    container_index: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Self {
        // Compile-time data, validated by tests.
        Self::from_json(BUILTIN_CATALOG).expect("built-in catalog is valid")
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.packets, data.containers)
    }

    fn new(packets: Vec<FoodPacket>, containers: Vec<ContainerType>) -> Result<Self> {
        if packets.is_empty() {
            return Err(StockError::InvalidCatalog("no packets defined".to_string()));
        }
        if containers.is_empty() {
            return Err(StockError::InvalidCatalog(
                "no container types defined".to_string(),
            ));
        }

        let mut packet_index = HashMap::new();
        for (i, packet) in packets.iter().enumerate() {
            if !packet.is_valid() {
                return Err(StockError::InvalidCatalog(format!(
                    "invalid packet entry: {}",
                    packet.id
                )));
            }
            if packet_index.insert(packet.id.clone(), i).is_some() {
                return Err(StockError::InvalidCatalog(format!(
                    "duplicate packet id: {}",
                    packet.id
                )));
            }
        }

        let mut container_index = HashMap::new();
        for (i, container) in containers.iter().enumerate() {
            if !container.is_valid() {
                return Err(StockError::InvalidCatalog(format!(
                    "invalid container entry: {}",
                    container.id
                )));
            }
            if container_index.insert(container.id.clone(), i).is_some() {
                return Err(StockError::InvalidCatalog(format!(
                    "duplicate container id: {}",
                    container.id
                )));
            }
        }

        Ok(Self {
            packets,
            containers,
            packet_index,
            container_index,
        })
    }

    /// All packets, in catalog order.
    pub fn packets(&self) -> &[FoodPacket] {
        &self.packets
    }

    /// All container types, in catalog order.
    pub fn containers(&self) -> &[ContainerType] {
        &self.containers
    }

    /// Look up a packet by id, if present.
    pub fn get_packet(&self, id: &str) -> Option<&FoodPacket> {
        self.packet_index.get(id).map(|&i| &self.packets[i])
    }

    /// Look up a container type by id, if present.
    pub fn get_container_type(&self, id: &str) -> Option<&ContainerType> {
        self.container_index.get(id).map(|&i| &self.containers[i])
    }

    /// Look up a packet that session state asserts exists.
    ///
    /// Panics on a miss: the catalog is closed, so a dangling id is an
    /// invariant violation.
    pub fn packet(&self, id: &str) -> &FoodPacket {
        self.get_packet(id)
            .unwrap_or_else(|| panic!("packet id not in catalog: {id}"))
    }

    /// Look up a container type that session state asserts exists.
    pub fn container_type(&self, id: &str) -> &ContainerType {
        self.get_container_type(id)
            .unwrap_or_else(|| panic!("container type id not in catalog: {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.packets().len(), 15);
        assert_eq!(catalog.containers().len(), 4);

        let buckwheat = catalog.packet("buckwheat");
        assert_eq!(buckwheat.calories, 9089);
        assert_eq!(buckwheat.units(), 6);

        let household = catalog.container_type("household");
        assert_eq!(household.general_unit_budget(), 60);
        assert_eq!(household.bonus_small_capacity, 5);
    }

    #[test]
    fn test_get_variants_are_fallible() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_packet("buckwheat").is_some());
        assert!(catalog.get_packet("caviar").is_none());
        assert!(catalog.get_container_type("submarine").is_none());
    }

    #[test]
    #[should_panic(expected = "packet id not in catalog")]
    fn test_unknown_packet_panics() {
        let catalog = Catalog::builtin();
        catalog.packet("caviar");
    }

    #[test]
    fn test_duplicate_packet_id_rejected() {
        let json = r#"{
            "Packets": [
                { "Id": "rice", "Name": "Rice", "Calories": 100, "WeightKg": 1.0, "Size": "L", "Price": 10 },
                { "Id": "rice", "Name": "Rice again", "Calories": 100, "WeightKg": 1.0, "Size": "L", "Price": 10 }
            ],
            "Containers": [
                { "Id": "box", "Name": "Box", "GeneralCapacity": 4, "BonusSmallCapacity": 0, "Price": 100, "Description": "" }
            ]
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate packet id"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let json = r#"{ "Packets": [], "Containers": [] }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"{
            "Packets": [
                { "Id": "rice", "Name": "Rice", "Calories": 8824, "WeightKg": 2.65, "Size": "L", "Price": 880 }
            ],
            "Containers": [
                { "Id": "box", "Name": "Box", "GeneralCapacity": 4, "BonusSmallCapacity": 0, "Price": 100, "Description": "" }
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.packets().len(), 1);
        assert_eq!(catalog.packet("rice").calories, 8824);
    }
}
