use std::collections::HashSet;

use nestora_domain::{Identifiable, NamedEntity, PaymentStatus, Property};
use uuid::Uuid;

use crate::CoreError;

/// Abstraction over persistence backends holding the whole property tree.
///
/// Backends load and save the complete ordered collection at once; there is no
/// partial update.
pub trait PropertyStorage: Send + Sync {
    /// Loads the stored tree. A store that does not exist yet yields an empty collection.
    fn load(&self) -> Result<Vec<Property>, CoreError>;

    /// Overwrites the stored tree with `properties`.
    fn save(&self, properties: &[Property]) -> Result<(), CoreError>;

    /// Human-readable description of where the data lives.
    fn describe(&self) -> String;
}

/// Detects duplicate identities and records whose stored values disagree with
/// the invariants enforced at creation time.
pub fn store_warnings(properties: &[Property]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for property in properties {
        claim_id(&mut seen, "property", property, &mut warnings);
        for unit in &property.units {
            claim_id(&mut seen, "unit", unit, &mut warnings);
            for lease in &unit.leases {
                claim_id(&mut seen, "lease", lease, &mut warnings);
                if lease.end_date < lease.start_date {
                    warnings.push(format!(
                        "lease {} ends ({}) before it starts ({})",
                        lease.id, lease.end_date, lease.start_date
                    ));
                }
                for payment in &lease.rent_history {
                    match PaymentStatus::derive(payment.amount_due, payment.amount_paid) {
                        Ok(derived) if derived != payment.status => warnings.push(format!(
                            "lease {} payment for {} is stored as {} but amounts indicate {}",
                            lease.id, payment.month, payment.status, derived
                        )),
                        Ok(_) => {}
                        Err(err) => warnings.push(format!(
                            "lease {} payment for {} has invalid amounts: {}",
                            lease.id, payment.month, err
                        )),
                    }
                }
            }
        }
    }
    warnings
}

fn claim_id<T>(seen: &mut HashSet<Uuid>, kind: &str, entity: &T, warnings: &mut Vec<String>)
where
    T: Identifiable + NamedEntity,
{
    if !seen.insert(entity.id()) {
        warnings.push(format!(
            "duplicate id {} on {kind} `{}`",
            entity.id(),
            entity.name()
        ));
    }
}
