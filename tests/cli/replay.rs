use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn shop() -> Result<CliTest> {
    let test = CliTest::with_file("pages/home.html", "<h1>Welcome</h1>")?;
    test.write_file("pages/cart.html", "<p>{{cart.empty}}</p>")?;
    test.write_file("pages/about.html", "<p>About us</p>")?;
    Ok(test)
}

#[test]
fn test_replay_scans_each_destination_once_per_test() -> Result<()> {
    let test = shop()?;
    test.write_file(
        "shop.json",
        r#"{
            "name": "shop",
            "pages": {
                "/home": "pages/home.html",
                "/cart": "pages/cart.html"
            },
            "tests": [
                {
                    "name": "browse",
                    "steps": [
                        { "visit": "/home" },
                        "checkpoint",
                        { "visit": "/cart" },
                        "checkpoint",
                        { "visit": "/home" }
                    ]
                },
                { "name": "idle" }
            ]
        }"#,
    )?;

    // Defects are recorded, not failed on; only `report` validates them.
    assert_cmd_snapshot!(test.replay_command("shop.json"), @r"
success: true
exit_code: 0
----- stdout -----
✓ shop > browse (scanned /home, /cart)
✓ shop > idle (no new destinations)

Ran 2 test(s): 2 passed, 0 failed
Results recorded in ./.i18n-sweep/results.json (run `report` to validate)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_replay_manual_check_fails_only_its_test() -> Result<()> {
    let test = shop()?;
    test.write_file(
        "checks.json",
        r#"{
            "pages": {
                "/cart": "pages/cart.html",
                "/about": "pages/about.html"
            },
            "tests": [
                {
                    "name": "strict cart",
                    "steps": [{ "visit": "/cart" }, { "check": { "failOnError": true, "log": false } }]
                },
                {
                    "name": "lenient cart",
                    "steps": [
                        { "visit": "/cart" },
                        { "check": { "failOnError": true, "allowedKeys": ["{{cart.empty}}"] } }
                    ]
                },
                {
                    "name": "about",
                    "steps": [{ "visit": "/about" }, { "check": { "failOnError": true } }]
                }
            ]
        }"#,
    )?;

    assert_cmd_snapshot!(test.replay_command("checks.json"), @r"
success: false
exit_code: 1
----- stdout -----
✘ strict cart (scanned /cart)
    Found 1 untranslated placeholder(s)
✓ lenient cart (scanned /cart)
✓ about (scanned /about)

Ran 3 test(s): 2 passed, 1 failed
Results recorded in ./.i18n-sweep/results.json (run `report` to validate)

----- stderr -----
");

    Ok(())
}

#[test]
fn test_replay_unknown_destination_is_an_error() -> Result<()> {
    let test = shop()?;
    test.write_file(
        "broken.json",
        r#"{ "pages": {}, "tests": [{ "name": "t", "steps": [{ "visit": "/missing" }] }] }"#,
    )?;

    assert_cmd_snapshot!(test.replay_command("broken.json"), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Test "t" visits "/missing", which has no page in the journey
"#);

    Ok(())
}

#[test]
fn test_replay_misspelled_check_option_is_an_error() -> Result<()> {
    let test = shop()?;
    test.write_file(
        "typo.json",
        r#"{
            "pages": { "/cart": "pages/cart.html" },
            "tests": [{ "name": "t", "steps": [{ "visit": "/cart" }, { "check": { "failOnErorr": true } }] }]
        }"#,
    )?;

    // serde's message carries line and column; only the lead is stable.
    insta::with_settings!({filters => vec![(r"typo\.json: .*", "typo.json: [PARSE ERROR]")]}, {
        assert_cmd_snapshot!(test.replay_command("typo.json"), @r"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Failed to parse journey file: typo.json: [PARSE ERROR]
");
    });

    assert!(!test.root().join(".i18n-sweep/results.json").exists());

    Ok(())
}
