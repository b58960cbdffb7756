//! Integration tests for the `check` command.

mod common;

use common::{TestFixture, compliant_pages, lines_content};
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn compliant_paper_exits_zero() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 3);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("PAPER FORMAT CHECK REPORT"))
        .stdout(predicate::str::contains("File: paper.pdf"))
        .stdout(predicate::str::contains("[PASS] page-count: Page count: 3/25"))
        .stdout(predicate::str::contains("Result: PASS"));
}

#[test]
fn over_page_limit_exits_one() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("long.pdf", 30);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] page-count: Page count: 30/25"))
        .stdout(predicate::str::contains("Result: FAIL"));
}

#[test]
fn max_pages_override_applies() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 5);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "--max-pages", "4"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Page count: 5/4"));
}

#[test]
fn forbidden_name_exits_one_and_names_page() {
    let fixture = TestFixture::new();
    let mut pages = compliant_pages(4);
    pages[2].push_str(" Analysis by John Smith");
    let refs: Vec<&str> = pages.iter().map(String::as_str).collect();
    let pdf = fixture.create_pdf("paper.pdf", &refs);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "--forbid", r"John\s+Smith"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[FAIL] forbidden-identifiers: Possible forbidden identifiers found on page(s) 3",
        ));
}

#[test]
fn missing_references_warns_but_exits_zero() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf(
        "paper.pdf",
        &[
            "Team # 2412345 Page 1 of 2 Summary Keywords: traffic",
            "Team # 2412345 Page 2 of 2 Conclusion",
        ],
    );

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("[WARN] references"))
        .stdout(predicate::str::contains("Result: PASS"));
}

#[test]
fn strict_turns_warning_into_failure() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf("paper.pdf", &["Team # 2412345 Page 1 of 1 Summary"]);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--strict"])
        .arg(&pdf)
        .assert()
        .code(1);
}

// =============================================================================
// Unreadable Input
// =============================================================================

#[test]
fn corrupt_pdf_exits_two_with_single_error_line() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_file("broken.pdf", b"definitely not a pdf");

    let output = paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("broken.pdf"));
    assert!(!stderr.contains("[PASS]"));
}

#[test]
fn missing_file_exits_two() {
    let fixture = TestFixture::new();

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "missing.pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn non_pdf_extension_exits_two() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("notes.txt", b"plain text");

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file is not a PDF"));
}

#[test]
fn invalid_forbid_pattern_exits_two() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 2);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--forbid", "(unclosed"])
        .arg(&pdf)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regex pattern"));
}

#[test]
fn undecodable_page_warns_and_exits_zero() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf_from_contents(
        "paper.pdf",
        &[
            lines_content(&["Team # 2412345 Page 1 of 2", "Summary", "Keywords: traffic"]),
            b"BT /F9 12 Tf 72 720 Td (Team # 2412345 Page 2 of 2) Tj 0 -14 Td (Authors: Z) Tj ET"
                .to_vec(),
        ],
    );

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[WARN] forbidden-identifiers: Could not fully evaluate: could not read text on page(s) 2",
        ))
        .stdout(predicate::str::contains("[PASS] forbidden-identifiers").not());
}

#[test]
fn forbidden_match_fails_despite_undecodable_page() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf_from_contents(
        "paper.pdf",
        &[
            lines_content(&["Team # 2412345 Page 1 of 2", "Summary", "Authors: Jane Doe"]),
            b"BT /F9 12 Tf 72 720 Td (References) Tj ET".to_vec(),
        ],
    );

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] forbidden-identifiers"));
}

// =============================================================================
// Page Layout
// =============================================================================

#[test]
fn headings_on_their_own_lines_are_found() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf_from_contents(
        "paper.pdf",
        &[lines_content(&[
            "Team # 2412345 Page 1 of 1",
            "Summary",
            "We model traffic.",
            "Keywords: traffic",
            "References",
            "[1] Knuth",
        ])],
    );

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS] required-sections"))
        .stdout(predicate::str::contains("[PASS] references"))
        .stdout(predicate::str::contains("Result: PASS"));
}

#[test]
fn author_line_wrapped_across_lines_fails() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_pdf_from_contents(
        "paper.pdf",
        &[lines_content(&[
            "Team # 2412345 Page 1 of 1",
            "Summary",
            "Paper written",
            "by Jane Doe",
            "References",
        ])],
    );

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[FAIL] forbidden-identifiers: Possible forbidden identifiers found on page(s) 1",
        ))
        .stdout(predicate::str::contains("[PASS] required-sections"));
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn json_output_is_parseable() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 2);

    let output = paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--format", "json"])
        .arg(&pdf)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["document"], "paper.pdf");
    assert_eq!(json["pages"], 2);
    assert_eq!(json["status"], "pass");
    assert_eq!(json["results"][0]["rule"], "page-count");
}

#[test]
fn output_file_receives_report() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 2);
    let report_path = fixture.path().join("report.txt");

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "always", "--output"])
        .arg(&report_path)
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("[PASS] page-count"));
    assert!(!report.contains('\x1b'));
}

#[test]
fn verbose_shows_details() {
    let fixture = TestFixture::new();
    let pdf = fixture.create_compliant_pdf("paper.pdf", 2);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-v"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("-> 23 pages remaining"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn local_config_is_discovered() {
    let fixture = TestFixture::new();
    fixture.create_config("[pages]\nmax = 2\n");
    let pdf = fixture.create_compliant_pdf("paper.pdf", 3);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .arg(&pdf)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Page count: 3/2"));
}

#[test]
fn disabled_rules_are_not_reported() {
    let fixture = TestFixture::new();
    let config = fixture.create_file(
        "rules.toml",
        b"[keywords]\nenabled = false\n\n[institutions]\nenabled = false\n",
    );
    let pdf = fixture.create_compliant_pdf("paper.pdf", 2);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never", "--config"])
        .arg(&config)
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("keywords").not())
        .stdout(predicate::str::contains("institution-names").not())
        .stdout(predicate::str::contains("6 rules checked"));
}

#[test]
fn invalid_config_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_config("[pages]\nmax = 0\n");
    let pdf = fixture.create_compliant_pdf("paper.pdf", 1);

    paper_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .arg(&pdf)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pages.max"));
}
