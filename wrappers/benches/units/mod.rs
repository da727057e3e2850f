pub mod map;
pub mod registry;
pub mod sequence;
