use std::fmt;

use tax_core::calculations::ScenarioReport;
use tax_core::calculations::scenarios::lifestyle_budget;

use crate::utils::{format_currency, format_percent};

/// What one year's tax could have done instead.
pub struct ScenariosView<'a> {
    pub report: &'a ScenarioReport,
}

impl fmt::Display for ScenariosView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.report;
        writeln!(f, "Annual tax: {}", format_currency(r.annual_tax))?;

        writeln!(f, "\nHome purchase")?;
        for home in &r.homes {
            writeln!(
                f,
                "  {:<14} home up to {:>14}, down payment {}, mortgage {} ({}/month), {}",
                home.tier.label(),
                format_currency(home.max_home_value),
                format_currency(home.down_payment),
                format_currency(home.mortgage),
                format_currency(home.monthly_payment),
                home.tier.time_saved()
            )?;
        }

        writeln!(f, "\nInvesting every year")?;
        for projection in &r.investments {
            let years = projection.points.len();
            writeln!(
                f,
                "  {:<13} {:>6} for {} years: {:>16}  ({})",
                projection.profile.label(),
                format_percent(projection.annual_rate),
                years,
                format_currency(projection.final_value()),
                projection.profile.strategy()
            )?;
        }

        writeln!(f, "\nPaying down debt")?;
        for debt in &r.debts {
            write!(
                f,
                "  {:<13} {:>6}  saves {:>12}/month, {:>14} over 5 years",
                debt.kind.label(),
                format_percent(debt.annual_rate),
                format_currency(debt.monthly_interest_saved),
                format_currency(debt.five_year_savings)
            )?;
            if let (Some(balance), Some(share)) = (debt.balance, debt.share_cleared) {
                write!(
                    f,
                    ", clears {} of {}",
                    format_percent(share),
                    format_currency(balance)
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nRetirement")?;
        for projection in &r.retirement {
            writeln!(
                f,
                "  Age {} ({} years): {} / {} / {}",
                projection.retirement_age,
                projection.years_to_retirement,
                format_currency(projection.conservative_value),
                format_currency(projection.balanced_value),
                format_currency(projection.aggressive_value)
            )?;
        }
        if let Some(first) = r.retirement.first() {
            writeln!(
                f,
                "  Monthly retirement income: {}",
                format_currency(first.monthly_income_potential)
            )?;
            for (label, amount) in lifestyle_budget(first.monthly_income_potential) {
                writeln!(f, "    {label:<24} {}", format_currency(amount))?;
            }
        }

        write!(
            f,
            "\nOf a {}-hour day, {} hours work for tax and {} for you",
            r.workday.working_hours.normalize(),
            r.workday.hours_for_tax.normalize(),
            r.workday.hours_for_you.normalize()
        )
    }
}
