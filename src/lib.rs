//! Weighted scoring engine for AI governance and risk self-assessments.
//!
//! A [`framework::Framework`] is an immutable, versioned questionnaire
//! definition: categories, weighted questions, and tier bands tied to a
//! named regulatory release. The [`scoring`] module turns a (possibly
//! partial) set of responses into a deterministic [`scoring::ScoreResult`];
//! [`session`] holds per-user response state, and [`report`] wraps results
//! for structured export.

pub mod framework;
pub mod output;
pub mod report;
pub mod scoring;
pub mod session;
