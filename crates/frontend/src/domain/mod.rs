pub mod hr;
pub mod leave;
pub mod supply;
pub mod vehicle;
pub mod waste;
