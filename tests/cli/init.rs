use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "patterns",
        "excludeSelectors",
        "allowedKeys",
        "checkAttributes",
        "settleDelay",
        "includes",
        "storePath",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["settleDelay"], 500);

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Created .i18nsweeprc.json

----- stderr -----
");

    assert!(test.root().join(".i18nsweeprc.json").exists());
    assert_config_content(&test.read_file(".i18nsweeprc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nsweeprc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command(), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: .i18nsweeprc.json already exists
");

    assert_eq!(test.read_file(".i18nsweeprc.json")?, "{}");

    Ok(())
}
