pub mod promotion;
pub mod roster;
