//! Property and unit creation plus bounds-checked positional selection.

use nestora_domain::{Lease, Property, Unit};

use crate::CoreError;

/// Provides constructor and lookup helpers for the property tree.
pub struct PropertyService;

impl PropertyService {
    /// Appends a new property to the collection and returns it.
    pub fn add_property<'a>(
        properties: &'a mut Vec<Property>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> &'a Property {
        let property = Property::new(name, address);
        tracing::info!(property_id = %property.id, "property added");
        properties.push(property);
        &properties[properties.len() - 1]
    }

    /// Appends a new unit to `property`. Bathroom counts must be non-negative.
    pub fn add_unit<'a>(
        property: &'a mut Property,
        unit_number: impl Into<String>,
        bedrooms: u32,
        bathrooms: f64,
        square_feet: u32,
    ) -> Result<&'a Unit, CoreError> {
        if !bathrooms.is_finite() || bathrooms < 0.0 {
            return Err(CoreError::Validation(format!(
                "bathroom count must be non-negative (got {bathrooms})"
            )));
        }
        let unit = Unit::new(unit_number, bedrooms, bathrooms, square_feet);
        tracing::info!(property_id = %property.id, unit_id = %unit.id, "unit added");
        property.units.push(unit);
        Ok(&property.units[property.units.len() - 1])
    }

    pub fn property_at(properties: &[Property], index: usize) -> Result<&Property, CoreError> {
        properties
            .get(index)
            .ok_or_else(|| out_of_range("property", index, properties.len()))
    }

    pub fn property_at_mut(
        properties: &mut [Property],
        index: usize,
    ) -> Result<&mut Property, CoreError> {
        let len = properties.len();
        properties
            .get_mut(index)
            .ok_or_else(|| out_of_range("property", index, len))
    }

    pub fn unit_at(property: &Property, index: usize) -> Result<&Unit, CoreError> {
        property
            .units
            .get(index)
            .ok_or_else(|| out_of_range("unit", index, property.units.len()))
    }

    pub fn unit_at_mut(property: &mut Property, index: usize) -> Result<&mut Unit, CoreError> {
        let len = property.units.len();
        property
            .units
            .get_mut(index)
            .ok_or_else(|| out_of_range("unit", index, len))
    }

    pub fn lease_at(unit: &Unit, index: usize) -> Result<&Lease, CoreError> {
        unit.leases
            .get(index)
            .ok_or_else(|| out_of_range("lease", index, unit.leases.len()))
    }

    pub fn lease_at_mut(unit: &mut Unit, index: usize) -> Result<&mut Lease, CoreError> {
        let len = unit.leases.len();
        unit.leases
            .get_mut(index)
            .ok_or_else(|| out_of_range("lease", index, len))
    }
}

fn out_of_range(kind: &str, index: usize, len: usize) -> CoreError {
    CoreError::NotFound(format!(
        "{kind} #{} does not exist ({len} available)",
        index + 1
    ))
}
