//! Properties and the rentable units they contain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, lease::Lease};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A single rentable space within a property.
pub struct Unit {
    pub id: Uuid,
    pub unit_number: String,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: u32,
    #[serde(default)]
    pub leases: Vec<Lease>,
}

impl Unit {
    pub fn new(
        unit_number: impl Into<String>,
        bedrooms: u32,
        bathrooms: f64,
        square_feet: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            unit_number: unit_number.into(),
            bedrooms,
            bathrooms,
            square_feet,
            leases: Vec::new(),
        }
    }

    pub fn active_leases(&self) -> impl Iterator<Item = &Lease> {
        self.leases.iter().filter(|lease| lease.is_active())
    }
}

impl Identifiable for Unit {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Unit {
    fn name(&self) -> &str {
        &self.unit_number
    }
}

impl Displayable for Unit {
    fn display_label(&self) -> String {
        format!(
            "Unit: {} | Beds: {} | Baths: {:.1} | Sqft: {}",
            self.unit_number, self.bedrooms, self.bathrooms, self.square_feet
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A building or address holding rentable units.
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Property {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            units: Vec::new(),
        }
    }

    pub fn lease_count(&self) -> usize {
        self.units.iter().map(|unit| unit.leases.len()).sum()
    }
}

impl Identifiable for Property {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Property {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Property {
    fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lease::Tenant, LeaseStatus};
    use chrono::NaiveDate;

    #[test]
    fn unit_label_matches_listing_format() {
        let unit = Unit::new("2A", 2, 1.5, 850);
        assert_eq!(
            unit.display_label(),
            "Unit: 2A | Beds: 2 | Baths: 1.5 | Sqft: 850"
        );
    }

    #[test]
    fn active_leases_skips_other_statuses() {
        let mut unit = Unit::new("1", 1, 1.0, 500);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let active = Lease::new(Tenant::new("A", "a@x", "1"), start, end, 500.0, 0.0);
        let mut ended = Lease::new(Tenant::new("B", "b@x", "2"), start, end, 500.0, 0.0);
        ended.status = LeaseStatus::Ended;
        let active_id = active.id;
        unit.leases.push(active);
        unit.leases.push(ended);

        let ids: Vec<_> = unit.active_leases().map(|lease| lease.id).collect();
        assert_eq!(ids, vec![active_id]);
    }

    #[test]
    fn property_deserializes_without_units_field() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{id}","name":"Elm","address":"1 Elm St"}}"#);
        let property: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(property.id, id);
        assert!(property.units.is_empty());
        assert_eq!(property.lease_count(), 0);
    }
}
