pub mod capture;
pub mod encoder;
pub mod presenter;
pub mod service;
