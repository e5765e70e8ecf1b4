pub mod assessment;
pub mod breakdown;
pub mod poam;
pub mod weights;
