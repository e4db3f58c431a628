use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const CART_JOURNEY: &str = r#"{
    "name": "cart",
    "pages": { "/cart": "cart.html", "/home": "home.html" },
    "tests": [{ "name": "open cart", "steps": [{ "visit": "/cart" }] }]
}"#;

const HOME_JOURNEY: &str = r#"{
    "name": "home",
    "pages": { "/cart": "cart.html", "/home": "home.html" },
    "tests": [{ "name": "open home", "steps": [{ "visit": "/home" }] }]
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("home.html", "<h1>Welcome</h1>")?;
    test.write_file(
        "cart.html",
        r#"<div><span>{{cart.total}}</span><button title="$t('cart.checkout')">Pay</button></div>"#,
    )?;
    test.write_file("cart.json", CART_JOURNEY)?;
    test.write_file("home.json", HOME_JOURNEY)?;
    Ok(test)
}

#[test]
fn test_report_without_results_is_skipped() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.report_command(), @r"
success: true
exit_code: 0
----- stdout -----
note: No translation scan results were recorded, skipping translation validation

----- stderr -----
");

    Ok(())
}

#[test]
fn test_report_aggregates_separate_runs() -> Result<()> {
    let test = project()?;

    // Two independent processes, as two test files of one run would be.
    assert!(test.replay_command("cart.json").status()?.success());
    assert!(test.replay_command("home.json").status()?.success());

    assert_cmd_snapshot!(test.report_command(), @r#"
success: false
exit_code: 1
----- stdout -----
Translation summary: 2 destination(s) scanned, 1 clean, 1 with defects
  /cart (from "cart > open cart"): 2 defect(s)

✘ /cart  (from "cart > open cart")
  1. [text] <SPAN> "{{cart.total}}" at /html/body/div/span
  2. [attribute title] <BUTTON> "$t('cart.checkout')" at /html/body/div/button
✓ /home  (from "home > open home")

✘ 1 of 2 destination(s) failed translation validation

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_report_all_clean_passes() -> Result<()> {
    let test = project()?;

    assert!(test.replay_command("home.json").status()?.success());

    assert_cmd_snapshot!(test.report_command(), @r#"
success: true
exit_code: 0
----- stdout -----
Translation summary: 1 destination(s) scanned, 1 clean, 0 with defects

✓ /home  (from "home > open home")

✓ All 1 destination(s) passed translation validation

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_clear_resets_store() -> Result<()> {
    let test = project()?;

    assert!(test.replay_command("cart.json").status()?.success());
    assert!(test.replay_command("home.json").status()?.success());

    assert_cmd_snapshot!(test.clear_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Cleared 2 result(s) from ./.i18n-sweep/results.json

----- stderr -----
");

    assert_cmd_snapshot!(test.report_command(), @r"
success: true
exit_code: 0
----- stdout -----
note: No translation scan results were recorded, skipping translation validation

----- stderr -----
");

    Ok(())
}

#[test]
fn test_clear_removes_corrupt_store() -> Result<()> {
    let test = project()?;
    test.write_file(".i18n-sweep/results.json", "{ truncated")?;

    assert_cmd_snapshot!(test.report_command(), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: result store ./.i18n-sweep/results.json is corrupt: key must be a string at line 1 column 3
");

    assert_cmd_snapshot!(test.clear_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Cleared unreadable result store ./.i18n-sweep/results.json

----- stderr -----
");
    assert!(!test.root().join(".i18n-sweep/results.json").exists());

    // The store is usable again.
    assert!(test.replay_command("home.json").status()?.success());

    Ok(())
}

#[test]
fn test_store_path_flag() -> Result<()> {
    let test = project()?;

    let mut replay = test.replay_command("cart.json");
    replay.args(["--store-path", "custom/results.json"]);
    assert!(replay.status()?.success());
    assert!(test.root().join("custom/results.json").exists());

    let mut report = test.report_command();
    report.args(["--store-path", "custom/results.json"]);
    assert_cmd_snapshot!(report, @r#"
success: false
exit_code: 1
----- stdout -----
Translation summary: 1 destination(s) scanned, 0 clean, 1 with defects
  /cart (from "cart > open cart"): 2 defect(s)

✘ /cart  (from "cart > open cart")
  1. [text] <SPAN> "{{cart.total}}" at /html/body/div/span
  2. [attribute title] <BUTTON> "$t('cart.checkout')" at /html/body/div/button

✘ 1 of 1 destination(s) failed translation validation

----- stderr -----
"#);

    Ok(())
}
