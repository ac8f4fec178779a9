//! Wire format types for provider API protocols
//!
//! Pure serde structs matching the provider's JSON format. They are only
//! used at the HTTP boundary and never leak into the reply service.

pub mod openai;
