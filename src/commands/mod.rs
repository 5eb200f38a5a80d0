mod audit;
mod inspect;

pub use audit::run_audit;
pub use inspect::run_inspect;
