use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_scan_clean_pages() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        "<html><body><h1>Welcome</h1><input placeholder=\"Search\"></body></html>",
    )?;
    test.write_file("about/team.htm", "<p>Our team</p>")?;

    assert_cmd_snapshot!(test.scan_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 2 page(s) - no untranslated placeholders found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_scan_reports_text_and_attribute_defects() -> Result<()> {
    let test = CliTest::with_file(
        "shop/cart.html",
        r#"<html><body>
            <div><span>{{cart.total}}</span></div>
            <input id="q" placeholder="i18n.search">
            <script>var x = "{{not.checked}}";</script>
        </body></html>"#,
    )?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
success: false
exit_code: 1
----- stdout -----
error: "{{cart.total}}"  text
  --> shop/cart.html
   = note: <SPAN> at /html/body/div/span

error: "i18n.search"  attribute:placeholder
  --> shop/cart.html
   = note: <INPUT> at //*[@id="q"]
   = hint: mark the element with data-translation-ignore if `placeholder` is intentional

✘ 2 untranslated placeholder(s) in 1 of 1 page(s)

----- stderr -----
"#);

    Ok(())
}

#[test]
fn test_scan_respects_config() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nsweeprc.json",
        r#"{
            "allowedKeys": ["{{brand}}"],
            "ignores": ["vendor/**"]
        }"#,
    )?;
    test.write_file("index.html", "<p>{{brand}}</p>")?;
    test.write_file("vendor/widget.html", "<p>{{vendor.key}}</p>")?;

    assert_cmd_snapshot!(test.scan_command(), @r"
success: true
exit_code: 0
----- stdout -----
✓ Checked 1 page(s) - no untranslated placeholders found

----- stderr -----
");

    Ok(())
}

#[test]
fn test_scan_invalid_pattern_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nsweeprc.json",
        r#"{ "patterns": [{ "regex": "([unclosed" }] }"#,
    )?;
    test.write_file("index.html", "<p>Hello</p>")?;

    // The regex crate's own diagnostic is not ours to pin down.
    insta::with_settings!({filters => vec![(r"(?s)regex parse error:.*", "[REGEX ERROR]")]}, {
        assert_cmd_snapshot!(test.scan_command(), @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Invalid matching configuration: invalid pattern "([unclosed": [REGEX ERROR]
"#);
    });

    Ok(())
}

#[test]
fn test_scan_store_feeds_report() -> Result<()> {
    let test = CliTest::with_file("a.html", "<p>{{a}}</p>")?;
    test.write_file("b.html", "<p>fine</p>")?;

    let mut scan = test.scan_command();
    scan.args(["--store", "--label", "nightly"]);
    assert_cmd_snapshot!(scan, @r#"
success: false
exit_code: 1
----- stdout -----
error: "{{a}}"  text
  --> a.html
   = note: <P> at /html/body/p

✘ 1 untranslated placeholder(s) in 1 of 2 page(s)
Recorded results to ./.i18n-sweep/results.json

----- stderr -----
"#);

    assert_cmd_snapshot!(test.report_command(), @r#"
success: false
exit_code: 1
----- stdout -----
Translation summary: 2 destination(s) scanned, 1 clean, 1 with defects
  a.html (from "nightly"): 1 defect(s)

✘ a.html  (from "nightly")
  1. [text] <P> "{{a}}" at /html/body/p
✓ b.html  (from "nightly")

✘ 1 of 2 destination(s) failed translation validation

----- stderr -----
"#);

    Ok(())
}
