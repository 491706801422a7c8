//! Catalog enumerations and records shared across resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a catalog item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// A minifigure.
    Minifig,
    /// A part.
    Part,
    /// A set.
    Set,
    /// A book.
    Book,
    /// Gear (merchandise).
    Gear,
    /// A catalog.
    Catalog,
    /// Building instructions.
    Instruction,
    /// An unsorted lot.
    UnsortedLot,
    /// An original box.
    OriginalBox,
}

impl ItemType {
    /// Returns the name used in paths and bodies.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minifig => "MINIFIG",
            Self::Part => "PART",
            Self::Set => "SET",
            Self::Book => "BOOK",
            Self::Gear => "GEAR",
            Self::Catalog => "CATALOG",
            Self::Instruction => "INSTRUCTION",
            Self::UnsortedLot => "UNSORTED_LOT",
            Self::OriginalBox => "ORIGINAL_BOX",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a list shows incoming or outgoing records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Records you received.
    #[default]
    In,
    /// Records you created.
    Out,
}

/// Item condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Condition {
    /// New.
    #[default]
    #[serde(rename = "N")]
    New,
    /// Used.
    #[serde(rename = "U")]
    Used,
}

/// Which sales a price guide is computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GuideType {
    /// Completed sales over the last six months.
    Sold,
    /// Items currently for sale.
    #[default]
    Stock,
}

/// Region filter for price guides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Asia.
    Asia,
    /// Africa.
    Africa,
    /// North America.
    NorthAmerica,
    /// South America.
    SouthAmerica,
    /// Middle East.
    MiddleEast,
    /// Europe.
    Europe,
    /// European Union.
    Eu,
    /// Oceania.
    Oceania,
}

/// VAT handling for price guide amounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VatOption {
    /// Exclude VAT.
    #[default]
    #[serde(rename = "N")]
    Exclude,
    /// Include VAT.
    #[serde(rename = "Y")]
    Include,
    /// Include VAT as Norway settings.
    #[serde(rename = "O")]
    Norway,
}

/// The catalog item an inventory, order item, or mapping refers to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemRef {
    /// Item number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no: Option<String>,

    /// Item name. Read-only.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// Item type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,

    /// Main category ID. Read-only.
    #[serde(skip_serializing)]
    pub category_id: Option<u32>,
}

impl ItemRef {
    /// Refers to an item by type and number.
    #[must_use]
    pub fn new(item_type: ItemType, no: impl Into<String>) -> Self {
        Self {
            no: Some(no.into()),
            item_type: Some(item_type),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_type_wire_names() {
        assert_eq!(serde_json::to_value(ItemType::UnsortedLot).unwrap(), json!("UNSORTED_LOT"));
        assert_eq!(ItemType::OriginalBox.to_string(), "ORIGINAL_BOX");
        let parsed: ItemType = serde_json::from_value(json!("MINIFIG")).unwrap();
        assert_eq!(parsed, ItemType::Minifig);
    }

    #[test]
    fn test_short_code_enums() {
        assert_eq!(serde_json::to_value(Condition::Used).unwrap(), json!("U"));
        assert_eq!(serde_json::to_value(VatOption::Norway).unwrap(), json!("O"));
        assert_eq!(serde_json::to_value(Region::NorthAmerica).unwrap(), json!("north_america"));
        assert_eq!(serde_json::to_value(Direction::Out).unwrap(), json!("out"));
        assert_eq!(serde_json::to_value(GuideType::Sold).unwrap(), json!("sold"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Direction::default(), Direction::In);
        assert_eq!(Condition::default(), Condition::New);
        assert_eq!(GuideType::default(), GuideType::Stock);
        assert_eq!(VatOption::default(), VatOption::Exclude);
    }

    #[test]
    fn test_item_ref_serializes_only_writable_fields() {
        let item: ItemRef = serde_json::from_value(json!({
            "no": "3001",
            "name": "Brick 2 x 4",
            "type": "PART",
            "category_id": 5
        }))
        .unwrap();
        assert_eq!(item.name.as_deref(), Some("Brick 2 x 4"));

        let body = serde_json::to_value(&item).unwrap();
        assert_eq!(body, json!({"no": "3001", "type": "PART"}));
    }
}
