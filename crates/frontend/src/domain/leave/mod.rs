pub mod approvals;
pub mod calc;
pub mod my;
