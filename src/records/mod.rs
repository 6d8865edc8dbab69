pub mod display;
pub mod normalize;
