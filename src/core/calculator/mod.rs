pub mod pay;
pub mod shift;

pub use pay::compute_amount;
pub use shift::Shift;
