use serde::{Deserialize, Serialize};

/// Packing-size classification of a food packet.
///
/// Each class costs a fixed number of capacity units against a container's
/// general budget: Large = 6, MediumSmall = 2, Small = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[serde(rename = "L")]
    Large,

    #[serde(rename = "MS")]
    MediumSmall,

    #[serde(rename = "S")]
    Small,
}

impl SizeClass {
    /// Capacity units this class occupies in a container's general budget.
    #[inline]
    pub fn units(self) -> u32 {
        match self {
            SizeClass::Large => 6,
            SizeClass::MediumSmall => 2,
            SizeClass::Small => 1,
        }
    }

    /// Short label as shown in the catalog listing.
    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Large => "L",
            SizeClass::MediumSmall => "MS",
            SizeClass::Small => "S",
        }
    }
}

/// An immutable catalog entry describing one food packet type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPacket {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: u32,

    #[serde(rename = "WeightKg")]
    pub weight_kg: f64,

    #[serde(rename = "Size")]
    pub size: SizeClass,

    #[serde(rename = "Price")]
    pub price: u32,
}

impl FoodPacket {
    /// Capacity units this packet occupies in the general budget.
    #[inline]
    pub fn units(&self) -> u32 {
        self.size.units()
    }

    /// Basic validation: non-empty id and a finite, non-negative weight.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.weight_kg.is_finite() && self.weight_kg >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_packet() -> FoodPacket {
        FoodPacket {
            id: "buckwheat".to_string(),
            name: "Buckwheat".to_string(),
            calories: 9089,
            weight_kg: 2.65,
            size: SizeClass::Large,
            price: 590,
        }
    }

    #[test]
    fn test_size_class_units() {
        assert_eq!(SizeClass::Large.units(), 6);
        assert_eq!(SizeClass::MediumSmall.units(), 2);
        assert_eq!(SizeClass::Small.units(), 1);
    }

    #[test]
    fn test_packet_units_follow_size() {
        let mut packet = sample_packet();
        assert_eq!(packet.units(), 6);

        packet.size = SizeClass::Small;
        assert_eq!(packet.units(), 1);
    }

    #[test]
    fn test_is_valid() {
        let packet = sample_packet();
        assert!(packet.is_valid());

        let mut invalid = sample_packet();
        invalid.weight_kg = -1.0;
        assert!(!invalid.is_valid());

        let mut empty_id = sample_packet();
        empty_id.id = String::new();
        assert!(!empty_id.is_valid());
    }

    #[test]
    fn test_size_class_serde_labels() {
        let json = serde_json::to_string(&SizeClass::MediumSmall).unwrap();
        assert_eq!(json, "\"MS\"");

        let parsed: SizeClass = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, SizeClass::Small);
    }
}
