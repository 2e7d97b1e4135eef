pub mod aggregator;
pub mod keywords;
pub mod market_demand;
pub mod personality;
pub mod skills;
pub mod values;
pub mod work_style;
