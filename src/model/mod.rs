pub mod inventory;
pub mod sequence;
