pub mod gaps;
pub mod narrative;
pub mod readiness;
