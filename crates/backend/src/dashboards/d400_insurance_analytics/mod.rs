pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod presenter;
pub mod selector;
pub mod service;
