//! Rent-roll aggregation across the property tree.

use serde::Serialize;
use uuid::Uuid;

use nestora_domain::{Lease, Payment, PaymentStatus, Property, RentMonth, Unit};

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
/// Expected, collected and outstanding rent for some slice of the roll.
pub struct RentRollTotals {
    pub expected: f64,
    pub collected: f64,
    pub outstanding: f64,
}

impl RentRollTotals {
    /// A lease with no payment rows counts one month of rent as fully outstanding.
    fn add_unbilled(&mut self, monthly_rent: f64) {
        self.expected += monthly_rent;
        self.outstanding += monthly_rent;
    }

    /// Overpayments are absorbed: they never reduce the outstanding figure.
    fn add_payment(&mut self, payment: &Payment) {
        self.expected += payment.amount_due;
        self.collected += payment.amount_paid;
        if payment.amount_paid < payment.amount_due {
            self.outstanding += payment.amount_due - payment.amount_paid;
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RentRollItem {
    NoPayments {
        monthly_rent: f64,
    },
    Payment {
        month: RentMonth,
        status: PaymentStatus,
        amount_due: f64,
        amount_paid: f64,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
/// Itemised rows for one active lease, with the context the report prints above them.
pub struct RentRollLease {
    pub property_id: Uuid,
    pub property_name: String,
    pub unit_id: Uuid,
    pub unit_number: String,
    pub lease_id: Uuid,
    pub tenant_name: String,
    pub items: Vec<RentRollItem>,
    pub totals: RentRollTotals,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RentRollReport {
    pub totals: RentRollTotals,
    pub leases: Vec<RentRollLease>,
}

impl RentRollReport {
    pub fn total_expected(&self) -> f64 {
        self.totals.expected
    }

    pub fn total_collected(&self) -> f64 {
        self.totals.collected
    }

    pub fn total_outstanding(&self) -> f64 {
        self.totals.outstanding
    }

    /// Every report line in traversal order.
    pub fn items(&self) -> impl Iterator<Item = &RentRollItem> {
        self.leases.iter().flat_map(|lease| lease.items.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
    }
}

pub struct RentRollService;

impl RentRollService {
    /// Walks properties, units and leases in order and aggregates every active lease.
    ///
    /// Upcoming and ended leases are skipped entirely. Payments are visited in
    /// the order they were recorded, not sorted by month. The traversal is read
    /// only, so repeated calls over unchanged data return identical reports.
    pub fn generate(properties: &[Property]) -> RentRollReport {
        let mut report = RentRollReport::default();
        for property in properties {
            for unit in &property.units {
                for lease in unit.active_leases() {
                    let entry = Self::lease_entry(property, unit, lease, &mut report.totals);
                    report.leases.push(entry);
                }
            }
        }
        tracing::debug!(
            leases = report.leases.len(),
            expected = report.totals.expected,
            collected = report.totals.collected,
            outstanding = report.totals.outstanding,
            "rent roll generated"
        );
        report
    }

    fn lease_entry(
        property: &Property,
        unit: &Unit,
        lease: &Lease,
        grand_totals: &mut RentRollTotals,
    ) -> RentRollLease {
        let mut totals = RentRollTotals::default();
        let mut items = Vec::with_capacity(lease.rent_history.len().max(1));

        if lease.rent_history.is_empty() {
            totals.add_unbilled(lease.monthly_rent);
            grand_totals.add_unbilled(lease.monthly_rent);
            items.push(RentRollItem::NoPayments {
                monthly_rent: lease.monthly_rent,
            });
        } else {
            for payment in &lease.rent_history {
                totals.add_payment(payment);
                grand_totals.add_payment(payment);
                items.push(RentRollItem::Payment {
                    month: payment.month,
                    status: payment.status,
                    amount_due: payment.amount_due,
                    amount_paid: payment.amount_paid,
                });
            }
        }

        RentRollLease {
            property_id: property.id,
            property_name: property.name.clone(),
            unit_id: unit.id,
            unit_number: unit.unit_number.clone(),
            lease_id: lease.id,
            tenant_name: lease.tenant.full_name.clone(),
            items,
            totals,
        }
    }
}

/// Free-function form of [`RentRollService::generate`].
pub fn generate_rent_roll(properties: &[Property]) -> RentRollReport {
    RentRollService::generate(properties)
}
