//! In-memory property tree coupled to a persistence backend.

use std::sync::Arc;

use chrono::NaiveDate;

use nestora_domain::{Lease, Payment, Property, Tenant, Unit};

use crate::{
    lease_service::LeaseService,
    property_service::PropertyService,
    rent_roll_service::{RentRollReport, RentRollService},
    storage::{store_warnings, PropertyStorage},
    time::Clock,
    CoreError,
};

/// Owns the ordered property collection for a session.
///
/// Mutations only touch memory; callers persist with [`PropertyStore::save`]
/// after each one. A failed save leaves the in-memory tree untouched, so it
/// stays authoritative for the rest of the session.
pub struct PropertyStore {
    properties: Vec<Property>,
    storage: Box<dyn PropertyStorage>,
    clock: Arc<dyn Clock>,
}

impl PropertyStore {
    /// Creates an empty store. Call [`PropertyStore::load`] to populate it.
    pub fn new(storage: Box<dyn PropertyStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            properties: Vec::new(),
            storage,
            clock,
        }
    }

    /// Replaces the in-memory tree with the stored one and returns the property count.
    pub fn load(&mut self) -> Result<usize, CoreError> {
        let properties = self.storage.load()?;
        tracing::info!(
            properties = properties.len(),
            source = %self.storage.describe(),
            "property store loaded"
        );
        self.properties = properties;
        Ok(self.properties.len())
    }

    /// Writes the whole tree through the backend.
    pub fn save(&self) -> Result<(), CoreError> {
        match self.storage.save(&self.properties) {
            Ok(()) => {
                tracing::debug!(properties = self.properties.len(), "property store saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "property store save failed; keeping in-memory state");
                Err(err)
            }
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn warnings(&self) -> Vec<String> {
        store_warnings(&self.properties)
    }

    pub fn property(&self, index: usize) -> Result<&Property, CoreError> {
        PropertyService::property_at(&self.properties, index)
    }

    pub fn unit(&self, property: usize, unit: usize) -> Result<&Unit, CoreError> {
        PropertyService::unit_at(self.property(property)?, unit)
    }

    pub fn lease(&self, property: usize, unit: usize, lease: usize) -> Result<&Lease, CoreError> {
        PropertyService::lease_at(self.unit(property, unit)?, lease)
    }

    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> &Property {
        PropertyService::add_property(&mut self.properties, name, address)
    }

    pub fn add_unit(
        &mut self,
        property: usize,
        unit_number: impl Into<String>,
        bedrooms: u32,
        bathrooms: f64,
        square_feet: u32,
    ) -> Result<&Unit, CoreError> {
        let property = PropertyService::property_at_mut(&mut self.properties, property)?;
        PropertyService::add_unit(property, unit_number, bedrooms, bathrooms, square_feet)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_lease(
        &mut self,
        property: usize,
        unit: usize,
        tenant: Tenant,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: f64,
        security_deposit: f64,
    ) -> Result<&Lease, CoreError> {
        let unit = self.unit_mut(property, unit)?;
        LeaseService::create_lease(
            unit,
            tenant,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn record_payment(
        &mut self,
        property: usize,
        unit: usize,
        lease: usize,
        year: i32,
        month: u32,
        amount_paid: f64,
        notes: Option<String>,
    ) -> Result<&Payment, CoreError> {
        let clock = Arc::clone(&self.clock);
        let unit = self.unit_mut(property, unit)?;
        let lease = PropertyService::lease_at_mut(unit, lease)?;
        LeaseService::record_payment(lease, year, month, amount_paid, notes, clock.as_ref())
    }

    pub fn rent_roll(&self) -> RentRollReport {
        RentRollService::generate(&self.properties)
    }

    fn unit_mut(&mut self, property: usize, unit: usize) -> Result<&mut Unit, CoreError> {
        let property = PropertyService::property_at_mut(&mut self.properties, property)?;
        PropertyService::unit_at_mut(property, unit)
    }
}
