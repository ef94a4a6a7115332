//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Form submission to the DocuScan backend

pub mod upload;

pub use upload::*;
