//! Which oracle services back a decision.
//!
//! The mapping is fixed: it depends only on the risk level and the decision
//! type, never on external state.

use crate::agent::types::RiskLevel;
use crate::engine::types::{DecisionType, ServiceTag};

/// Ordered service tags for a decision.
///
/// Price feeds and the risk scoring function are consulted for every
/// transaction. Medium and high risk also pull real-time market data. The
/// last tag names the automation job that carries out the decision.
pub fn services_for(risk: RiskLevel, kind: DecisionType) -> Vec<ServiceTag> {
    let mut tags = vec![ServiceTag::DataFeeds, ServiceTag::Functions];

    if risk >= RiskLevel::Medium {
        tags.push(ServiceTag::DataStreams);
    }

    tags.push(match kind {
        DecisionType::Success => ServiceTag::AutomationAutoSign,
        DecisionType::Warning => ServiceTag::AutomationDelegate,
        DecisionType::Error => ServiceTag::AutomationBlock,
    });

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_risk_success() {
        assert_eq!(
            services_for(RiskLevel::Low, DecisionType::Success),
            vec![
                ServiceTag::DataFeeds,
                ServiceTag::Functions,
                ServiceTag::AutomationAutoSign
            ]
        );
    }

    #[test]
    fn test_high_risk_block_includes_streams() {
        let tags = services_for(RiskLevel::High, DecisionType::Error);
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[2], ServiceTag::DataStreams);
        assert_eq!(tags.last(), Some(&ServiceTag::AutomationBlock));
    }

    #[test]
    fn test_automation_tag_follows_type() {
        for risk in RiskLevel::ALL {
            assert_eq!(
                services_for(risk, DecisionType::Warning).last(),
                Some(&ServiceTag::AutomationDelegate)
            );
        }
    }
}
