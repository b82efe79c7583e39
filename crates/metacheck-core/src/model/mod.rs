pub mod check_result;
pub mod params;

pub use check_result::CheckResult;
pub use params::ValidationParams;
