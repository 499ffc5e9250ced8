//! Core error payloads for modkit modules
//!
//! Pure data types, no HTTP framework dependencies:
//! - RFC 9457 Problem Details (`Problem`)
//! - Error catalog entries (`ErrDef`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;

pub use catalog::ErrDef;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ValidationViolation};

/// Attach the request instance and optional trace id to a Problem.
pub fn finalize(p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    let p = p.with_instance(instance);
    match trace_id {
        Some(tid) => p.with_trace_id(tid),
        None => p,
    }
}
