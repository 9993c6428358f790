pub mod add;
pub mod complete;
pub mod list;
pub mod summary;

/// Width of the separator rule around rendered blocks.
pub const RULE_WIDTH: usize = 60;
