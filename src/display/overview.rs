//! Accounts overview display formatting

use crate::models::{Currency, Money};
use crate::reports::{AccountsOverview, OverviewEntry};

use super::format::{format_percentage, separator, spread};
use super::range_bar::format_range_bar;

/// Format the full accounts overview
pub fn format_overview(overview: &AccountsOverview, width: usize) -> String {
    if overview.sections.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let currency = overview.primary_currency.clone().unwrap_or_default();
    let line_width = width + 2;
    let mut output = String::new();

    output.push_str(&spread(
        "Net position",
        &currency.format(overview.net_position),
        line_width,
    ));
    output.push('\n');

    if let Some(progress) = overview.progress_pct {
        output.push_str(&format!("  Progress: {}", format_percentage(progress)));
        output.push_str(&totals_suffix(overview, &currency));
        output.push('\n');
    }

    for section in &overview.sections {
        let section_currency = section
            .entries
            .first()
            .map(|entry| &entry.currency)
            .unwrap_or(&currency);

        output.push('\n');
        output.push_str(&spread(
            &section.group.to_string(),
            &section_currency.format(section.total),
            line_width,
        ));
        output.push('\n');
        output.push_str(&separator(line_width));
        output.push('\n');

        for entry in &section.entries {
            output.push_str(&format_entry(entry, width));
            output.push('\n');
        }
    }

    output
}

/// Format a single account row with its range bar
pub fn format_entry(entry: &OverviewEntry, width: usize) -> String {
    let currency = &entry.currency;
    let line_width = width + 2;
    let mut output = String::new();

    output.push_str(&spread(&entry.name, &currency.format(entry.balance), line_width));
    output.push('\n');
    output.push_str(&format_range_bar(&entry.range, currency, width));

    output.push_str(&detail_line(
        "Net change this period",
        Some(entry.balance_change_this_period),
        currency,
        line_width,
    ));

    if entry.account_type.uses_allowance_range() {
        output.push_str(&detail_line(
            "Next transfer",
            entry.next_transfer_amount,
            currency,
            line_width,
        ));
        output.push_str(&detail_line(
            "Balance after next transfer",
            entry.balance_after_next_transfer,
            currency,
            line_width,
        ));
    }

    output
}

fn detail_line(label: &str, amount: Option<Money>, currency: &Currency, width: usize) -> String {
    let value = match amount {
        Some(amount) => currency.format(amount),
        None => "Not set".to_string(),
    };
    format!("{}\n", spread(&format!("  {}", label), &value, width))
}

fn totals_suffix(overview: &AccountsOverview, currency: &Currency) -> String {
    let mut parts = Vec::new();
    if overview.liquid_total.is_positive() {
        parts.push(format!("Liquid {}", currency.format(overview.liquid_total)));
    }
    if overview.savings_total.is_positive() {
        parts.push(format!("Savings {}", currency.format(overview.savings_total)));
    }
    if !overview.debt_total.is_zero() {
        parts.push(format!("Debt {}", currency.format(overview.debt_total)));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("   {}", parts.join("   "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{samples_from_cents, AccountSnapshot, AccountType};

    fn accounts() -> Vec<AccountSnapshot> {
        let mut pocket = AccountSnapshot::new("Pocket", AccountType::Allowance, Money::from_cents(4000));
        pocket.balance_per_day = samples_from_cents(&[-11000, 14000]);

        let mut checking =
            AccountSnapshot::new("Checking", AccountType::Checking, Money::from_cents(548000));
        checking.balance_per_day = samples_from_cents(&[280000, 510000]);

        vec![
            checking,
            pocket,
            AccountSnapshot::new("Card", AccountType::CreditCard, Money::from_cents(-12000)),
        ]
    }

    #[test]
    fn test_format_overview() {
        let overview = AccountsOverview::generate(&accounts());
        let output = format_overview(&overview, 30);

        assert!(output.contains("Net position"));
        assert!(output.contains("$5,400.00"));
        assert!(output.contains("Liquid"));
        assert!(output.contains("Allowance"));
        assert!(output.contains("Debt -$120.00"));
        assert!(!output.contains("Protected"));
        assert!(output.contains("Above recent range by $380.00"));
    }

    #[test]
    fn test_section_total_uses_section_currency() {
        let mut savings =
            AccountSnapshot::new("Rainy Day", AccountType::Savings, Money::from_cents(200000));
        savings.currency = Currency::new("EUR", "€", 2);
        let mut all = accounts();
        all.push(savings);

        let overview = AccountsOverview::generate(&all);
        let output = format_overview(&overview, 30);

        let header = output
            .lines()
            .find(|line| line.starts_with("Protected"))
            .unwrap();
        assert!(header.ends_with("€2,000.00"));
        let liquid = output.lines().find(|line| line.starts_with("Liquid")).unwrap();
        assert!(liquid.ends_with("$5,480.00"));
    }

    #[test]
    fn test_allowance_entry_without_transfer() {
        let overview = AccountsOverview::generate(&accounts());
        let output = format_overview(&overview, 30);

        assert!(output.contains("Next transfer"));
        assert!(output.contains("Not set"));
    }

    #[test]
    fn test_standard_entry_has_no_transfer_lines() {
        let entry = OverviewEntry::from_account(&accounts()[0]);
        let output = format_entry(&entry, 30);

        assert!(output.contains("Net change this period"));
        assert!(!output.contains("Next transfer"));
    }

    #[test]
    fn test_format_empty_overview() {
        let output = format_overview(&AccountsOverview::generate(&[]), 30);
        assert!(output.contains("No accounts found"));
    }
}
