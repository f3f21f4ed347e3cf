//! # Problems that are shared between tests inside the crate.
//!
//! Convention for function names:
//!
//! * `fn standard_form()`
//! * `fn tableau_form()`
