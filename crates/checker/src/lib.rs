pub mod checker;
pub mod config;
pub mod error;
pub mod error_report;
pub mod overload;
pub mod patcher;
pub mod table;

pub use checker::{check, type_of_value};
pub use config::{Config, OperatorTable};
pub use error::{CheckError, CheckResult};
pub use error_report::report_check_error;
pub use overload::{find_suitable_operator_overload, Overload};
pub use patcher::patch_operators;
pub use table::{Signature, TypesTable};

#[cfg(test)]
mod tests;
