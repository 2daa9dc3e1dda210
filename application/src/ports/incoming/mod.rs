pub mod analysis;
pub mod drawing;
