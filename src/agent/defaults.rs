//! Built-in agent configuration templates.
//!
//! - `balanced`: auto-sign up to medium risk, block high risk
//! - `cautious`: auto-sign only low risk, manual signature otherwise
//! - `hands-off`: auto-sign everything the agent is asked to sign

/// The default profile. Matches a fresh session with no config file.
pub const BALANCED_YAML: &str = r#"# ElizaSign agent config: balanced
# Low and medium risk transactions are signed automatically.
# High risk transactions are blocked.

agent: balanced

description: >
  Auto-signs low and medium risk transactions and blocks high risk ones.
  Turning auto-approve off sends everything below high risk to a delegated
  reviewer.

auto_approve: true
risk_threshold: medium
signing_method: delegated
"#;

/// Conservative profile for wallets holding real funds.
pub const CAUTIOUS_YAML: &str = r#"# ElizaSign agent config: cautious
# Only low risk transactions are signed automatically.
# Everything else waits for your own wallet signature.

agent: cautious

description: >
  Auto-signs only low risk transactions. Medium risk transactions need a
  manual signature and high risk transactions are blocked.

auto_approve: true
risk_threshold: low
signing_method: manual
"#;

/// Everything inside the threshold is signed, and the threshold is HIGH.
pub const HANDS_OFF_YAML: &str = r#"# ElizaSign agent config: hands-off
# The agent signs every transaction on its own. Nothing is blocked.
# Use this for test wallets only.

agent: hands-off

description: >
  Auto-signs transactions at every risk level. Intended for demos and
  test wallets.

auto_approve: true
risk_threshold: high
signing_method: delegated
"#;

/// Get the YAML content for a named template.
pub fn get_default_profile(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "balanced" | "default" => Some(BALANCED_YAML),
        "cautious" | "strict" => Some(CAUTIOUS_YAML),
        "hands-off" | "hands_off" | "trusting" => Some(HANDS_OFF_YAML),
        _ => None,
    }
}

/// List all available template names.
pub fn available_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "balanced",
            "Auto-sign up to medium risk, block high risk (default)",
        ),
        (
            "cautious",
            "Auto-sign only low risk, manual signature for the rest",
        ),
        (
            "hands-off",
            "Auto-sign everything — for demos and test wallets",
        ),
    ]
}
