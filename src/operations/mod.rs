pub mod euler;
pub mod query;
pub mod shaping;
