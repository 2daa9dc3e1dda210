pub mod analyze;
pub mod canvas;
pub mod drawing;
pub mod health;
