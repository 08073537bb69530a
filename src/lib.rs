//! Archlint - Architecture diagram validation
//!
//! Scores an architecture/process diagram ("artifact") against the
//! structural rules of one of four modeling frameworks - C4, ArchiMate,
//! TOGAF, BPMN - and returns a weighted score, a letter grade, per-rule
//! outcomes, and improvement suggestions.
//!
//! The engine is a pure, synchronous computation: inputs are immutable
//! snapshots, there is no I/O and no shared state, and identical inputs
//! always produce identical results.

pub mod cli;
pub mod evaluators;
pub mod models;
pub mod reachability;
pub mod report;
pub mod scoring;
pub mod suggestions;
pub mod validator;

pub use models::{
    Artifact, ArtifactError, Element, Grade, Relationship, RuleOutcome, RuleSeverity,
    RuleStatus, RulesSummary, ValidationResult,
};
pub use validator::{validate, validate_artifact};
