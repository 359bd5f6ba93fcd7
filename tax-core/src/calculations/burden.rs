//! Total tax burden for a Canadian resident.
//!
//! Builds on the bracket engine with the pieces a pay stub shows:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Federal basic personal amount (phased out for high incomes) |
//! | 2    | Federal tax on income minus the basic personal amount |
//! | 3    | Provincial tax on gross income |
//! | 4    | CPP contribution (both portions when self-employed) |
//! | 5    | EI premium (none when self-employed) |
//! | 6    | Total deductions and after-tax income |
//! | 7    | GST/HST paid when the after-tax income is spent |
//! | 8    | Take-home pay per pay period |
//!
//! # Example
//!
//! ```no_run
//! # fn tables() -> tax_core::TaxTables { unimplemented!() }
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{TaxBurdenCalculator, TaxBurdenInput};
//! use tax_core::{EmploymentType, Province};
//!
//! let tables = tables();
//! let burden = TaxBurdenCalculator::new(&tables)
//!     .calculate(&TaxBurdenInput {
//!         income: dec!(85000),
//!         province: Province::Ontario,
//!         employment_type: EmploymentType::Employee,
//!     })
//!     .unwrap();
//!
//! println!("take-home: {}", burden.after_tax_income);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{ratio_or_zero, round_half_up};
use crate::calculations::engine::{bracket_tax, trim_to_income};
use crate::{EmploymentType, InvalidInputError, Province, TaxResult, TaxTables};

/// Inputs describing the person whose burden is calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBurdenInput {
    pub income: Decimal,
    pub province: Province,
    pub employment_type: EmploymentType,
}

/// CPP and EI deducted from pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollContributions {
    pub cpp: Decimal,
    pub ei: Decimal,
}

impl PayrollContributions {
    pub fn total(&self) -> Decimal {
        self.cpp + self.ei
    }
}

/// Each component expressed as a fraction of gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurdenRates {
    pub total: Decimal,
    pub federal: Decimal,
    pub provincial: Decimal,
    pub payroll: Decimal,
    /// Combined federal and provincial income tax rate on the next dollar.
    pub marginal: Decimal,
}

/// A slice of after-tax spending and the GST/HST it attracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingCategory {
    pub name: String,
    pub share: Decimal,
    pub taxable: bool,
    pub monthly_amount: Decimal,
    pub monthly_sales_tax: Decimal,
}

/// GST/HST paid when after-tax income is spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionTax {
    pub rate: Decimal,
    pub annual_tax: Decimal,
    pub taxable_spending: Decimal,
    pub non_taxable_spending: Decimal,
    /// Share of after-tax income that attracts GST/HST.
    pub taxable_ratio: Decimal,
    pub categories: Vec<SpendingCategory>,
}

/// Frequency at which pay is received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayFrequency {
    Yearly,
    Monthly,
    BiWeekly,
    Weekly,
}

impl PayFrequency {
    pub fn all() -> &'static [PayFrequency] {
        &[
            PayFrequency::Yearly,
            PayFrequency::Monthly,
            PayFrequency::BiWeekly,
            PayFrequency::Weekly,
        ]
    }

    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Yearly => 1,
            Self::Monthly => 12,
            Self::BiWeekly => 26,
            Self::Weekly => 52,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yearly => "Yearly",
            Self::Monthly => "Monthly",
            Self::BiWeekly => "Bi-Weekly",
            Self::Weekly => "Weekly",
        }
    }
}

/// Gross, deductions and net for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub frequency: PayFrequency,
    pub gross: Decimal,
    pub deductions: Decimal,
    pub net: Decimal,
}

/// Full burden breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBurden {
    pub income: Decimal,
    pub province: Province,
    pub employment_type: EmploymentType,
    pub basic_personal_amount: Decimal,
    /// Income the federal schedule was applied to.
    pub federal_taxable_income: Decimal,
    pub income_tax: TaxResult,
    pub payroll: PayrollContributions,
    pub total_deductions: Decimal,
    pub after_tax_income: Decimal,
    pub rates: BurdenRates,
    pub consumption: ConsumptionTax,
    pub pay_periods: Vec<PayPeriod>,
}

/// How after-tax income is assumed to be spent: (name, share, taxable).
const SPENDING_PATTERN: [(&str, Decimal, bool); 6] = [
    ("Housing", dec!(0.35), false),
    ("Groceries", dec!(0.15), false),
    ("Transportation", dec!(0.12), true),
    ("Entertainment & Dining", dec!(0.10), true),
    ("Shopping & Misc", dec!(0.18), true),
    ("Savings & Investments", dec!(0.10), false),
];

/// Calculator for the full burden against one year's tables.
#[derive(Debug, Clone)]
pub struct TaxBurdenCalculator<'a> {
    tables: &'a TaxTables,
}

impl<'a> TaxBurdenCalculator<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Calculates every component of the burden.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NegativeIncome`] for negative income, or
    /// [`InvalidInputError::MissingProvincialTable`] if the tables lack the
    /// requested province.
    pub fn calculate(
        &self,
        input: &TaxBurdenInput,
    ) -> Result<TaxBurden, InvalidInputError> {
        let income = input.income;
        if income < Decimal::ZERO {
            return Err(InvalidInputError::NegativeIncome(income));
        }

        let config = self.tables.config();
        let provincial_table = self.tables.provincial(input.province)?;

        let basic_personal_amount = config.basic_personal_amount.amount_for(income);
        let federal_taxable_income = (income - basic_personal_amount).max(Decimal::ZERO);

        let mut federal = bracket_tax(federal_taxable_income, self.tables.federal());
        let mut provincial = bracket_tax(income, provincial_table);
        trim_to_income(income, &mut provincial, &mut federal);
        let income_tax_total = federal.tax + provincial.tax;
        // Marginal rates come from the gross-income positions in both tables.
        let marginal_rate = if income.is_zero() {
            Decimal::ZERO
        } else {
            self.tables.federal().marginal_rate(income) + provincial.marginal_rate
        };
        let income_tax = TaxResult {
            income,
            federal_tax: federal.tax,
            provincial_tax: provincial.tax,
            total_tax: income_tax_total,
            effective_rate: ratio_or_zero(income_tax_total, income),
            marginal_rate,
            federal,
            provincial,
        };

        let payroll = self.payroll(income, input.employment_type);
        let total_deductions = income_tax.total_tax + payroll.total();
        let after_tax_income = income - total_deductions;

        let rates = BurdenRates {
            total: ratio_or_zero(total_deductions, income),
            federal: ratio_or_zero(income_tax.federal_tax, income),
            provincial: ratio_or_zero(income_tax.provincial_tax, income),
            payroll: ratio_or_zero(payroll.total(), income),
            marginal: income_tax.marginal_rate,
        };

        let consumption = self.consumption_tax(after_tax_income, input.province);
        let pay_periods = pay_periods(income, total_deductions);

        debug!(
            %income,
            province = input.province.code(),
            employment_type = input.employment_type.label(),
            %total_deductions,
            "calculated tax burden"
        );

        Ok(TaxBurden {
            income,
            province: input.province,
            employment_type: input.employment_type,
            basic_personal_amount: round_half_up(basic_personal_amount),
            federal_taxable_income: round_half_up(federal_taxable_income),
            income_tax,
            payroll,
            total_deductions,
            after_tax_income,
            rates,
            consumption,
            pay_periods,
        })
    }

    /// CPP and EI, capped at the yearly maximums.
    fn payroll(
        &self,
        income: Decimal,
        employment_type: EmploymentType,
    ) -> PayrollContributions {
        let config = self.tables.config();
        let cpp_multiplier = if employment_type.pays_both_cpp_portions() {
            Decimal::TWO
        } else {
            Decimal::ONE
        };

        let cpp = (income * config.cpp_rate * cpp_multiplier).min(config.cpp_max * cpp_multiplier);
        let ei = if employment_type.pays_ei() {
            (income * config.ei_rate).min(config.ei_max)
        } else {
            Decimal::ZERO
        };

        PayrollContributions {
            cpp: round_half_up(cpp),
            ei: round_half_up(ei),
        }
    }

    /// GST/HST on the taxable share of after-tax spending.
    fn consumption_tax(
        &self,
        after_tax_income: Decimal,
        province: Province,
    ) -> ConsumptionTax {
        let rate = self.tables.config().sales_tax_rate(province);
        let spendable = after_tax_income.max(Decimal::ZERO);
        let months = Decimal::from(12);

        let mut taxable_spending = Decimal::ZERO;
        let mut non_taxable_spending = Decimal::ZERO;
        let mut categories = Vec::with_capacity(SPENDING_PATTERN.len());

        for (name, share, taxable) in SPENDING_PATTERN {
            let amount = spendable * share;
            let sales_tax = if taxable {
                taxable_spending += amount;
                amount * rate
            } else {
                non_taxable_spending += amount;
                Decimal::ZERO
            };
            categories.push(SpendingCategory {
                name: name.to_string(),
                share,
                taxable,
                monthly_amount: round_half_up(amount / months),
                monthly_sales_tax: round_half_up(sales_tax / months),
            });
        }

        ConsumptionTax {
            rate,
            annual_tax: round_half_up(taxable_spending * rate),
            taxable_spending: round_half_up(taxable_spending),
            non_taxable_spending: round_half_up(non_taxable_spending),
            taxable_ratio: ratio_or_zero(taxable_spending, spendable),
            categories,
        }
    }
}

/// Splits gross income and deductions evenly across each pay frequency.
pub fn pay_periods(
    income: Decimal,
    total_deductions: Decimal,
) -> Vec<PayPeriod> {
    let net = income - total_deductions;
    PayFrequency::all()
        .iter()
        .map(|frequency| {
            let periods = Decimal::from(frequency.periods_per_year());
            PayPeriod {
                frequency: *frequency,
                gross: round_half_up(income / periods),
                deductions: round_half_up(total_deductions / periods),
                net: round_half_up(net / periods),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BasicPersonalAmount, BracketTable, TaxBracket, TaxYearConfig};

    fn federal() -> BracketTable {
        BracketTable::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(53359)), dec!(0.15)),
            TaxBracket::new(dec!(53359), Some(dec!(106717)), dec!(0.205)),
            TaxBracket::new(dec!(106717), Some(dec!(165430)), dec!(0.26)),
            TaxBracket::new(dec!(165430), Some(dec!(235675)), dec!(0.29)),
            TaxBracket::new(dec!(235675), None, dec!(0.33)),
        ])
        .unwrap()
    }

    fn alberta_style() -> BracketTable {
        BracketTable::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(142292)), dec!(0.10)),
            TaxBracket::new(dec!(142292), None, dec!(0.15)),
        ])
        .unwrap()
    }

    fn tables() -> TaxTables {
        let provincial = Province::all()
            .iter()
            .map(|p| (*p, alberta_style()))
            .collect();
        let config = TaxYearConfig {
            tax_year: 2024,
            basic_personal_amount: BasicPersonalAmount {
                maximum: dec!(15000),
                minimum: dec!(13521),
                phase_out_start: dec!(173205),
                phase_out_end: dec!(235675),
            },
            cpp_rate: dec!(0.0595),
            cpp_max: dec!(3754.45),
            ei_rate: dec!(0.0163),
            ei_max: dec!(1002.45),
            gst_rate: dec!(0.05),
            sales_tax_rates: BTreeMap::from([(Province::Ontario, dec!(0.13))]),
        };
        TaxTables::new(2024, federal(), provincial, config).unwrap()
    }

    fn input(
        income: Decimal,
        employment_type: EmploymentType,
    ) -> TaxBurdenInput {
        TaxBurdenInput {
            income,
            province: Province::Alberta,
            employment_type,
        }
    }

    #[test]
    fn employee_burden_components() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(50000), EmploymentType::Employee))
            .unwrap();

        // Federal: (50000 - 15000) * 0.15
        assert_eq!(burden.federal_taxable_income, dec!(35000));
        assert_eq!(burden.income_tax.federal_tax, dec!(5250.00));
        assert_eq!(burden.income_tax.provincial_tax, dec!(5000.00));
        // CPP: 50000 * 0.0595 = 2975; EI: 50000 * 0.0163 = 815
        assert_eq!(burden.payroll.cpp, dec!(2975.00));
        assert_eq!(burden.payroll.ei, dec!(815.00));
        assert_eq!(burden.total_deductions, dec!(14040.00));
        assert_eq!(burden.after_tax_income, dec!(35960.00));
        assert_eq!(burden.rates.total, dec!(0.2808));
    }

    #[test]
    fn payroll_is_capped_at_maximums() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(200000), EmploymentType::Employee))
            .unwrap();

        assert_eq!(burden.payroll.cpp, dec!(3754.45));
        assert_eq!(burden.payroll.ei, dec!(1002.45));
    }

    #[test]
    fn self_employed_pays_double_cpp_and_no_ei() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(200000), EmploymentType::SelfEmployed))
            .unwrap();

        assert_eq!(burden.payroll.cpp, dec!(7508.90));
        assert_eq!(burden.payroll.ei, dec!(0));
    }

    #[test]
    fn contractor_is_treated_like_employee() {
        let tables = tables();
        let calculator = TaxBurdenCalculator::new(&tables);

        let employee = calculator
            .calculate(&input(dec!(70000), EmploymentType::Employee))
            .unwrap();
        let contractor = calculator
            .calculate(&input(dec!(70000), EmploymentType::Contractor))
            .unwrap();

        assert_eq!(employee.payroll, contractor.payroll);
        assert_eq!(employee.total_deductions, contractor.total_deductions);
    }

    #[test]
    fn income_below_basic_personal_amount_has_no_federal_tax() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(12000), EmploymentType::Employee))
            .unwrap();

        assert_eq!(burden.federal_taxable_income, dec!(0));
        assert_eq!(burden.income_tax.federal_tax, dec!(0));
        assert_eq!(burden.income_tax.federal.marginal_rate, dec!(0));
        assert_eq!(burden.rates.marginal, dec!(0.25));
    }

    #[test]
    fn zero_income_has_zero_rates() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(0), EmploymentType::Employee))
            .unwrap();

        assert_eq!(burden.total_deductions, dec!(0));
        assert_eq!(burden.rates.total, dec!(0));
        assert_eq!(burden.consumption.annual_tax, dec!(0));
        assert_eq!(burden.consumption.taxable_ratio, dec!(0));
    }

    #[test]
    fn negative_income_is_rejected() {
        let tables = tables();
        let result = TaxBurdenCalculator::new(&tables)
            .calculate(&input(dec!(-5), EmploymentType::Employee));

        assert_eq!(result, Err(InvalidInputError::NegativeIncome(dec!(-5))));
    }

    #[test]
    fn consumption_tax_uses_provincial_rate() {
        let tables = tables();
        let burden = TaxBurdenCalculator::new(&tables)
            .calculate(&TaxBurdenInput {
                income: dec!(50000),
                province: Province::Ontario,
                employment_type: EmploymentType::Employee,
            })
            .unwrap();

        let consumption = &burden.consumption;
        assert_eq!(consumption.rate, dec!(0.13));
        assert_eq!(consumption.taxable_ratio, dec!(0.40));
        assert_eq!(consumption.categories.len(), 6);
        // 40% of 35960 is taxable: 14384 * 0.13
        assert_eq!(consumption.taxable_spending, dec!(14384.00));
        assert_eq!(consumption.annual_tax, dec!(1869.92));
        assert!(!consumption.categories[0].taxable);
        assert_eq!(consumption.categories[0].monthly_sales_tax, dec!(0));
    }

    #[test]
    fn pay_periods_split_evenly() {
        let periods = pay_periods(dec!(52000), dec!(13000));

        assert_eq!(periods.len(), 4);
        assert_eq!(periods[0].net, dec!(39000));
        assert_eq!(periods[1].gross, dec!(4333.33));
        assert_eq!(periods[2].deductions, dec!(500));
        assert_eq!(periods[3].frequency, PayFrequency::Weekly);
        assert_eq!(periods[3].net, dec!(750));
    }
}
