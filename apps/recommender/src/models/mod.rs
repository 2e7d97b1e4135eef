pub mod assessment;
pub mod career;
pub mod recommendation;
