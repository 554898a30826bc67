//! Integration tests for the decision engine.
//! Tests the full flow: config file → configuration → decision.

use elizasign::agent::{defaults, parser, AgentConfiguration, RiskLevel, SigningMethod};
use elizasign::engine::{DecisionEngine, DecisionType, TransactionRequest};
use elizasign::EngineError;
use rust_decimal::Decimal;
use std::str::FromStr;

fn request(amount: &str, risk: RiskLevel) -> TransactionRequest {
    TransactionRequest::new("0xABC", Decimal::from_str(amount).unwrap(), risk, true)
}

fn medium_threshold() -> AgentConfiguration {
    AgentConfiguration {
        auto_approve_status: true,
        risk_threshold: RiskLevel::Medium,
        signing_method: SigningMethod::Delegated,
    }
}

#[test]
fn test_low_risk_auto_approved() {
    let record = DecisionEngine::new()
        .decide(&request("0.5", RiskLevel::Low), &medium_threshold(), "")
        .unwrap();
    assert_eq!(record.kind, DecisionType::Success);
    assert_eq!(
        record.services_used,
        vec![
            "Chainlink Data Feeds",
            "Chainlink Functions",
            "Chainlink Automation (Auto-Sign)"
        ]
    );
}

#[test]
fn test_high_risk_above_threshold_never_succeeds() {
    let record = DecisionEngine::new()
        .decide(&request("0.5", RiskLevel::High), &medium_threshold(), "")
        .unwrap();
    assert_ne!(record.kind, DecisionType::Success);
    assert_eq!(record.kind, DecisionType::Error);
    assert_eq!(record.decision, "Transaction Blocked");
}

#[test]
fn test_zero_amount_is_invalid() {
    let err = DecisionEngine::new()
        .decide(&request("0", RiskLevel::Low), &medium_threshold(), "")
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidRequest(_)));
}

#[test]
fn test_empty_address_is_invalid() {
    let mut req = request("1", RiskLevel::Low);
    req.to_address = String::new();
    let err = DecisionEngine::new()
        .decide(&req, &medium_threshold(), "")
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidRequest(_)));
}

#[test]
fn test_decisions_are_deterministic() {
    let engine = DecisionEngine::new();
    for config in [
        medium_threshold(),
        AgentConfiguration {
            auto_approve_status: false,
            ..medium_threshold()
        },
        AgentConfiguration {
            risk_threshold: RiskLevel::Low,
            signing_method: SigningMethod::Manual,
            ..medium_threshold()
        },
    ] {
        for risk in RiskLevel::ALL {
            let req = request("3.14", risk);
            let a = engine.decide(&req, &config, "").unwrap();
            let b = engine.decide(&req, &config, "").unwrap();
            assert_eq!(a.outcome(), b.outcome(), "risk {} config {:?}", risk, config);
        }
    }
}

#[test]
fn test_full_decision_table() {
    use DecisionType::*;
    use RiskLevel::*;

    // (auto-approve, threshold, risk) -> expected type
    let table = [
        (true, Low, Low, Success),
        (true, Low, Medium, Warning),
        (true, Low, High, Error),
        (true, Medium, Low, Success),
        (true, Medium, Medium, Success),
        (true, Medium, High, Error),
        (true, High, High, Success),
        (false, Medium, Low, Warning),
        (false, Medium, High, Error),
        (false, High, High, Warning),
    ];

    let engine = DecisionEngine::new();
    for (auto, threshold, risk, expected) in table {
        let config = AgentConfiguration {
            auto_approve_status: auto,
            risk_threshold: threshold,
            signing_method: SigningMethod::Delegated,
        };
        let outcome = engine.evaluate(&request("1", risk), &config, "").unwrap();
        assert_eq!(
            outcome.kind, expected,
            "auto={} threshold={} risk={}",
            auto, threshold, risk
        );
    }
}

#[test]
fn test_cautious_fixture_profile() {
    let profile = parser::parse_profile_str(include_str!("fixtures/cautious.yaml"))
        .expect("fixture should parse");
    assert_eq!(profile.agent, "test-cautious");

    let outcome = DecisionEngine::new()
        .evaluate(&request("5", RiskLevel::Medium), &profile.config, "")
        .unwrap();
    assert_eq!(outcome.kind, DecisionType::Warning);
    assert_eq!(outcome.decision, "Manual Signature Required");
}

#[test]
fn test_hands_off_template_signs_high_risk() {
    let profile = parser::parse_profile_str(defaults::HANDS_OFF_YAML).unwrap();
    let outcome = DecisionEngine::new()
        .evaluate(&request("100", RiskLevel::High), &profile.config, "")
        .unwrap();
    assert_eq!(outcome.kind, DecisionType::Success);
    assert!(outcome
        .chainlink_services_used
        .contains(&"Chainlink Data Streams".to_string()));
}

#[test]
fn test_balanced_template_never_delegates() {
    let profile = parser::parse_profile_str(defaults::BALANCED_YAML).unwrap();
    let engine = DecisionEngine::new();
    for risk in RiskLevel::ALL {
        let outcome = engine
            .evaluate(&request("1", risk), &profile.config, "")
            .unwrap();
        assert_ne!(outcome.kind, DecisionType::Warning, "risk {}", risk);
    }

    let manual = AgentConfiguration {
        auto_approve_status: false,
        ..profile.config
    };
    let outcome = engine
        .evaluate(&request("1", RiskLevel::Medium), &manual, "")
        .unwrap();
    assert_eq!(outcome.decision, "Delegated for Review");
}
