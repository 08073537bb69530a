//! Core data models for Archlint
//!
//! These models are used throughout the codebase for representing
//! artifacts, elements, relationships, and validation results.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome status of a single structural rule check
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    #[default]
    Pass,
    Warning,
    Fail,
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleStatus::Pass => write!(f, "pass"),
            RuleStatus::Warning => write!(f, "warning"),
            RuleStatus::Fail => write!(f, "fail"),
        }
    }
}

/// Severity a rule violation carries. Informational only: scoring weights
/// look at `RuleStatus`, never at severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Error,
    #[default]
    Warning,
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSeverity::Error => write!(f, "error"),
            RuleSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Result of one structural rule check against an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Human description of the rule itself
    pub rule: String,
    pub status: RuleStatus,
    /// What was found, including offender names where applicable
    pub message: String,
    pub severity: RuleSeverity,
}

impl RuleOutcome {
    pub fn pass(rule: &str, message: &str, severity: RuleSeverity) -> Self {
        Self {
            rule: rule.to_string(),
            status: RuleStatus::Pass,
            message: message.to_string(),
            severity,
        }
    }

    pub fn warning(rule: &str, message: &str) -> Self {
        Self {
            rule: rule.to_string(),
            status: RuleStatus::Warning,
            message: message.to_string(),
            severity: RuleSeverity::Warning,
        }
    }

    pub fn fail(rule: &str, message: &str, severity: RuleSeverity) -> Self {
        Self {
            rule: rule.to_string(),
            status: RuleStatus::Fail,
            message: message.to_string(),
            severity,
        }
    }
}

/// Letter grade derived from a validation score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Calculate grade from score. Inclusive lower bounds, total over 0-100.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Grade::A,
            s if s >= 80 => Grade::B,
            s if s >= 70 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// A single modeled entity within an artifact (person, system, task, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub element_id: String,
    /// Framework-specific tag, e.g. `c4_person`, `bpmn_task`
    pub element_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ArchiMate layer; empty for other frameworks
    #[serde(default)]
    pub layer: String,
}

/// A directed, labeled edge between two elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub relationship_id: String,
    pub source_element_id: String,
    pub target_element_id: String,
    pub relationship_type: String,
    #[serde(default)]
    pub label: String,
}

/// The engine's sole output: score, grade, per-rule outcomes, suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub score: u32,
    pub grade: Grade,
    pub framework: String,
    pub rules: Vec<RuleOutcome>,
    pub suggestions: Vec<String>,
}

/// Summary of rule outcomes by status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesSummary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub total: usize,
}

impl RulesSummary {
    pub fn from_rules(rules: &[RuleOutcome]) -> Self {
        let mut summary = Self::default();
        for r in rules {
            match r.status {
                RuleStatus::Pass => summary.passed += 1,
                RuleStatus::Warning => summary.warnings += 1,
                RuleStatus::Fail => summary.failed += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// A saved architecture/process diagram belonging to one framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default)]
    pub name: String,
    /// One of `c4`, `archimate`, `togaf`, `bpmn`
    pub framework: String,
    /// Framework-specific diagram type, e.g. `c4_context`. Consulted only
    /// by the C4 evaluator.
    #[serde(default)]
    pub artifact_type: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// Errors reading an artifact file
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Artifact {
    /// Load an artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let contents = std::fs::read_to_string(path)?;
        let artifact: Artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }
}
