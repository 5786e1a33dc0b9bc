//! Backend communication and the submission flow.
//!
//! # Services
//!
//! - [`upload`] - multipart transport to the ingest backend and response interpretation
//! - [`submission`] - form validation and the submit state machine

pub mod upload;
pub mod submission;

pub use upload::*;
pub use submission::*;
