pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod utils;
