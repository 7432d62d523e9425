//! Shared fixtures

/// Publish step that always succeeds without touching the network
pub const CONFIG_PUBLISH_TRUE: &str = r#"
[deploy]
publish = ["true"]
"#;

/// Output written to `site/` instead of `public/`
pub const CONFIG_SITE_OUTPUT: &str = r#"
[output]
dir = "site"
filename = "days.json"
"#;
