//! Lease creation and payment recording.

use chrono::NaiveDate;

use nestora_domain::{Lease, Payment, RentMonth, Tenant, Unit};

use crate::{time::Clock, CoreError};

/// Validated constructors for leases and the payments recorded against them.
pub struct LeaseService;

impl LeaseService {
    /// Creates an active lease on `unit` and returns it.
    ///
    /// Fails with [`CoreError::InvalidDateRange`] when `end_date` precedes
    /// `start_date` (equal dates are accepted) and with
    /// [`CoreError::InvalidAmount`] for negative rent or deposit.
    pub fn create_lease<'a>(
        unit: &'a mut Unit,
        tenant: Tenant,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: f64,
        security_deposit: f64,
    ) -> Result<&'a Lease, CoreError> {
        if end_date < start_date {
            return Err(CoreError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        ensure_amount("monthly rent", monthly_rent)?;
        ensure_amount("security deposit", security_deposit)?;

        let lease = Lease::new(tenant, start_date, end_date, monthly_rent, security_deposit);
        tracing::info!(unit_id = %unit.id, lease_id = %lease.id, "lease created");
        unit.leases.push(lease);
        Ok(&unit.leases[unit.leases.len() - 1])
    }

    /// Records a payment for `year`/`month` against `lease`.
    ///
    /// The amount due is the lease's rent at the time of recording and the
    /// paid date comes from `clock`. Rows for an already-paid month are
    /// accepted and appended like any other.
    pub fn record_payment<'a>(
        lease: &'a mut Lease,
        year: i32,
        month: u32,
        amount_paid: f64,
        notes: Option<String>,
        clock: &dyn Clock,
    ) -> Result<&'a Payment, CoreError> {
        let month = RentMonth::new(year, month)?;
        ensure_amount("amount paid", amount_paid)?;
        let payment = Payment::record(
            month,
            lease.monthly_rent,
            amount_paid,
            Some(clock.now()),
            notes.unwrap_or_default(),
        )?;
        tracing::info!(
            lease_id = %lease.id,
            month = %payment.month,
            status = %payment.status,
            "payment recorded"
        );
        lease.push_payment(payment);
        Ok(&lease.rent_history[lease.rent_history.len() - 1])
    }
}

fn ensure_amount(label: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidAmount(format!(
            "{label} must be a non-negative number (got {value})"
        )))
    }
}
