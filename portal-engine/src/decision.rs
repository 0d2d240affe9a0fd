//! Compensation troubleshooting decision table
//!
//! Answers "where does compensation for this service come from?" from a
//! handful of categorical inputs, and records which inputs were consulted
//! on the way. A static decision table, not a state machine: no state is
//! kept between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an ATC code (or its mapped parent) routes compensation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MappingTarget {
    /// Mapped to a subrisk with its own limit balance
    #[default]
    Subrisk,
    /// Mapped directly to the parent risk
    ParentRisk,
}

/// Inputs to the troubleshooting procedure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootInput {
    /// Whether TLK compensation was already used for the service
    pub tlk_used: bool,
    /// Whether an ATC code exists for the service
    pub atc_exists: bool,
    /// Whether the ATC parent exists and is mapped (consulted only when no
    /// ATC code exists)
    pub parent_mapped: bool,
    /// Mapping target (consulted once an ATC code or mapped parent is found)
    pub mapping_target: MappingTarget,
    /// Remaining subrisk limit balance, free text (consulted only for
    /// subrisk mappings)
    pub subrisk_balance: String,
}

/// The routing decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompensationDecision {
    /// Nothing to compensate from
    NoCompensation,
    /// Compensate from the parent risk
    CompensateFromRisk,
    /// Compensate from the subrisk balance
    CompensateFromSubrisk,
}

impl fmt::Display for CompensationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoCompensation => "No compensation",
            Self::CompensateFromRisk => "Compensate from risk",
            Self::CompensateFromSubrisk => "Compensate from subrizika",
        };
        f.write_str(label)
    }
}

/// Decision plus the human-readable trace of consulted inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub decision: CompensationDecision,
    pub trace: Vec<String>,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Run the decision table
///
/// Branching:
/// - no ATC code and no mapped parent: no compensation
/// - mapping target is the parent risk: compensate from risk
/// - subrisk mapping with a positive limit balance: compensate from
///   subrizika; otherwise fall back to the risk
///
/// The balance is parsed strictly (no comma-decimal normalization) so a
/// blank or malformed balance routes to the risk fallback.
pub fn decide(input: &TroubleshootInput) -> DecisionOutcome {
    let mut trace = Vec::new();

    trace.push(format!("TLK used: {}", yes_no(input.tlk_used)));
    trace.push(format!("ATC exists: {}", yes_no(input.atc_exists)));

    // Without an ATC code the parent mapping is the only way forward
    if !input.atc_exists {
        trace.push(format!(
            "ATC parent exists and mapped: {}",
            yes_no(input.parent_mapped)
        ));
        if !input.parent_mapped {
            return DecisionOutcome {
                decision: CompensationDecision::NoCompensation,
                trace,
            };
        }
    }

    let target = match input.mapping_target {
        MappingTarget::Subrisk => "subrisk",
        MappingTarget::ParentRisk => "parent_risk",
    };
    trace.push(format!("Mapping target: {}", target));

    if input.mapping_target == MappingTarget::ParentRisk {
        return DecisionOutcome {
            decision: CompensationDecision::CompensateFromRisk,
            trace,
        };
    }

    let balance_raw = input.subrisk_balance.trim();
    let has_balance = !balance_raw.is_empty()
        && Decimal::from_str(balance_raw)
            .map(|b| b > Decimal::ZERO)
            .unwrap_or(false);
    trace.push(format!(
        "Subrisk balance: {}",
        if balance_raw.is_empty() { "n/a" } else { balance_raw }
    ));

    let decision = if has_balance {
        CompensationDecision::CompensateFromSubrisk
    } else {
        CompensationDecision::CompensateFromRisk
    };

    DecisionOutcome { decision, trace }
}

// ==================== Tests ====================
