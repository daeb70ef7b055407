pub mod hr;
pub mod leave;
pub mod shared;
pub mod supply;
pub mod system;
pub mod vehicle;
pub mod waste;
