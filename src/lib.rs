//! Nigerian tax calculations: Personal Income Tax with rent relief, VAT,
//! Company Income Tax, the ₦50m small company turnover test and monthly
//! remittance deadlines.

pub mod core;
