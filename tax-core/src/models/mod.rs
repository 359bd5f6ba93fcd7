mod employment_type;
mod freedom_day;
mod province;
mod tax_bracket;
mod tax_result;
mod tax_tables;
mod tax_year_config;

pub use employment_type::EmploymentType;
pub use freedom_day::FreedomDay;
pub use province::Province;
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
pub use tax_result::{BracketLine, JurisdictionTax, TaxResult};
pub use tax_tables::{TaxTables, TaxTablesError};
pub use tax_year_config::{BasicPersonalAmount, TaxYearConfig};
