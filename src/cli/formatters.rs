//! Text rendering for listings and the rent-roll report.

use nestora_config::Theme;
use nestora_core::{RentRollItem, RentRollReport};
use nestora_domain::{Displayable, Lease, Payment, PaymentStatus, Property, Unit};

/// Renders an amount as `<symbol><value>` with two decimals; negatives keep the sign in front.
pub fn money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

pub fn status_icon(status: PaymentStatus, theme: Theme) -> &'static str {
    match (theme, status) {
        (Theme::Iconic, PaymentStatus::Paid) => "✔",
        (Theme::Iconic, PaymentStatus::Partial) => "⚠",
        (Theme::Iconic, PaymentStatus::Unpaid) => "✖",
        (Theme::Plain, PaymentStatus::Paid) => "PAID",
        (Theme::Plain, PaymentStatus::Partial) => "PARTIAL",
        (Theme::Plain, PaymentStatus::Unpaid) => "UNPAID",
    }
}

pub fn property_line(position: usize, property: &Property) -> String {
    format!(
        "{}) {} (ID: {}, units: {}, leases: {})",
        position,
        property.display_label(),
        property.id,
        property.units.len(),
        property.lease_count()
    )
}

pub fn unit_line(position: usize, unit: &Unit) -> String {
    format!("{}) {}", position, unit.display_label())
}

pub fn lease_line(position: usize, lease: &Lease, symbol: &str) -> String {
    format!(
        "{}) {} | Rent: {} | Deposit: {} | Payments: {}",
        position,
        lease.display_label(),
        money(lease.monthly_rent, symbol),
        money(lease.security_deposit, symbol),
        lease.rent_history.len()
    )
}

pub fn payment_line(position: usize, payment: &Payment, symbol: &str, theme: Theme) -> String {
    let mut line = format!(
        "{}) [{}] {} | Due: {} | Paid: {}",
        position,
        status_icon(payment.status, theme),
        payment.month,
        money(payment.amount_due, symbol),
        money(payment.amount_paid, symbol)
    );
    if let Some(paid_date) = payment.paid_date {
        line.push_str(&format!(" | Recorded: {}", paid_date.format("%Y-%m-%d")));
    }
    if !payment.notes.is_empty() {
        line.push_str(&format!(" | Notes: {}", payment.notes));
    }
    line
}

/// Report body: one header per active lease, its rows, then the summary block.
pub fn render_rent_roll(report: &RentRollReport, symbol: &str, theme: Theme) -> Vec<String> {
    let mut lines = Vec::new();
    for lease in &report.leases {
        lines.push(format!(
            "Property: {} | Unit: {} | Tenant: {}",
            lease.property_name, lease.unit_number, lease.tenant_name
        ));
        for item in &lease.items {
            match item {
                RentRollItem::NoPayments { .. } => {
                    lines.push("  No payments recorded yet.".to_string());
                }
                RentRollItem::Payment {
                    month,
                    status,
                    amount_due,
                    amount_paid,
                } => lines.push(format!(
                    "  [{}] {} | Due: {} | Paid: {}",
                    status_icon(*status, theme),
                    month,
                    money(*amount_due, symbol),
                    money(*amount_paid, symbol)
                )),
            }
        }
    }
    lines.push(String::new());
    lines.push("==== Rent Roll Summary ====".to_string());
    lines.push(format!(
        "Total Rent Expected: {}",
        money(report.total_expected(), symbol)
    ));
    lines.push(format!(
        "Total Rent Collected: {}",
        money(report.total_collected(), symbol)
    ));
    lines.push(format!(
        "Total Outstanding: {}",
        money(report.total_outstanding(), symbol)
    ));
    lines.push("===========================".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nestora_core::RentRollService;
    use nestora_domain::{RentMonth, Tenant};

    fn portfolio() -> Vec<Property> {
        let mut property = Property::new("Willow Flats", "4 Willow St");
        let mut unit = Unit::new("2C", 1, 1.0, 610);
        let mut lease = Lease::new(
            Tenant::new("Sam Ortiz", "sam@example.com", "555-0199"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            1000.0,
            500.0,
        );
        for (month, paid) in [(1, 1000.0), (2, 400.0)] {
            let month = RentMonth::new(2024, month).unwrap();
            lease.push_payment(Payment::record(month, 1000.0, paid, None, "").unwrap());
        }
        unit.leases.push(lease);
        unit.leases.push(Lease::new(
            Tenant::new("Ren Park", "ren@example.com", "555-0110"),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            800.0,
            0.0,
        ));
        property.units.push(unit);
        vec![property]
    }

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(money(1400.0, "$"), "$1400.00");
        assert_eq!(money(7.5, "€"), "€7.50");
        assert_eq!(money(-12.5, "$"), "-$12.50");
    }

    #[test]
    fn rent_roll_lines_match_report() {
        let report = RentRollService::generate(&portfolio());
        let lines = render_rent_roll(&report, "$", Theme::Plain);

        assert_eq!(lines[0], "Property: Willow Flats | Unit: 2C | Tenant: Sam Ortiz");
        assert_eq!(lines[1], "  [PAID] Jan 2024 | Due: $1000.00 | Paid: $1000.00");
        assert_eq!(lines[2], "  [PARTIAL] Feb 2024 | Due: $1000.00 | Paid: $400.00");
        assert_eq!(lines[3], "Property: Willow Flats | Unit: 2C | Tenant: Ren Park");
        assert_eq!(lines[4], "  No payments recorded yet.");
        assert!(lines.contains(&"Total Rent Expected: $2800.00".to_string()));
        assert!(lines.contains(&"Total Rent Collected: $1400.00".to_string()));
        assert!(lines.contains(&"Total Outstanding: $1400.00".to_string()));
    }

    #[test]
    fn empty_report_still_prints_zero_summary() {
        let lines = render_rent_roll(&RentRollReport::default(), "$", Theme::Iconic);
        assert!(lines.contains(&"Total Outstanding: $0.00".to_string()));
    }

    #[test]
    fn property_line_counts_units_and_leases() {
        let property = &portfolio()[0];
        let line = property_line(3, property);
        assert!(line.starts_with("3) Willow Flats - 4 Willow St (ID: "));
        assert!(line.ends_with("units: 1, leases: 2)"));
    }

    #[test]
    fn payment_line_includes_notes() {
        let month = RentMonth::new(2024, 5).unwrap();
        let payment = Payment::record(month, 900.0, 0.0, None, "bounced").unwrap();
        assert_eq!(
            payment_line(1, &payment, "$", Theme::Iconic),
            "1) [✖] May 2024 | Due: $900.00 | Paid: $0.00 | Notes: bounced"
        );
    }
}
