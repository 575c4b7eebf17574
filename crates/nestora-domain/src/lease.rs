//! Leases and the tenant snapshots embedded in them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, payment::Payment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Tenant details captured when a lease is signed.
///
/// The snapshot is copied into the lease, so later edits elsewhere never
/// rewrite past leases.
pub struct Tenant {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl Tenant {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Identifiable for Tenant {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Tenant {
    fn name(&self) -> &str {
        &self.full_name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Lifecycle tag of a lease. Fixed at creation; never re-evaluated against the clock.
pub enum LeaseStatus {
    #[default]
    Active,
    Upcoming,
    Ended,
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeaseStatus::Active => "active",
            LeaseStatus::Upcoming => "upcoming",
            LeaseStatus::Ended => "ended",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lease {
    pub id: Uuid,
    pub tenant: Tenant,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    #[serde(default)]
    pub rent_history: Vec<Payment>,
    #[serde(default)]
    pub status: LeaseStatus,
}

impl Lease {
    /// Builds an active lease with an empty payment history. Callers validate
    /// dates and amounts before constructing.
    pub fn new(
        tenant: Tenant,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: f64,
        security_deposit: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            rent_history: Vec::new(),
            status: LeaseStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LeaseStatus::Active
    }

    pub fn payments(&self) -> &[Payment] {
        &self.rent_history
    }

    pub fn push_payment(&mut self, payment: Payment) {
        self.rent_history.push(payment);
    }
}

impl Identifiable for Lease {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Lease {
    fn name(&self) -> &str {
        &self.tenant.full_name
    }
}

impl Displayable for Lease {
    fn display_label(&self) -> String {
        format!(
            "{} ({} to {}) [{}]",
            self.tenant.full_name,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_lease_starts_active_without_payments() {
        let tenant = Tenant::new("Ada Lovelace", "ada@example.com", "555-0100");
        let lease = Lease::new(tenant, date(2024, 1, 1), date(2024, 12, 31), 1200.0, 1200.0);
        assert!(lease.is_active());
        assert!(lease.payments().is_empty());
        assert_eq!(lease.display_label(), "Ada Lovelace (2024-01-01 to 2024-12-31) [active]");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&LeaseStatus::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");
        let parsed: LeaseStatus = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(parsed, LeaseStatus::Ended);
    }
}
