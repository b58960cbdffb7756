use super::*;

fn sample_report() -> Report {
    Report::new(
        "paper.pdf".to_string(),
        4,
        vec![
            RuleResult::pass("page-count", "Page count: 4/25").with_details("21 pages remaining"),
            RuleResult::fail(
                "forbidden-identifiers",
                "Possible forbidden identifiers found on page(s) 3",
            )
            .with_details(r"Patterns matched: John\s+Smith")
            .with_pages(vec![3]),
            RuleResult::warn("references", "No References section detected"),
        ],
    )
}

fn parse(report: &Report) -> serde_json::Value {
    let output = JsonFormatter.format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn top_level_fields() {
    let json = parse(&sample_report());
    assert_eq!(json["document"], "paper.pdf");
    assert_eq!(json["pages"], 4);
    assert_eq!(json["status"], "fail");
}

#[test]
fn summary_counts() {
    let json = parse(&sample_report());
    assert_eq!(json["summary"]["total_rules"], 3);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["warnings"], 1);
    assert_eq!(json["summary"]["failed"], 1);
}

#[test]
fn results_keep_order_and_fields() {
    let json = parse(&sample_report());
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["rule"], "page-count");
    assert_eq!(results[1]["status"], "fail");
    assert_eq!(results[1]["pages"], serde_json::json!([3]));
    assert_eq!(results[1]["details"], r"Patterns matched: John\s+Smith");
}

#[test]
fn empty_pages_and_details_are_omitted() {
    let json = parse(&sample_report());
    let references = &json["results"][2];
    assert!(references.get("pages").is_none());
    assert!(references.get("details").is_none());
}

#[test]
fn warning_only_report_passes() {
    let report = Report::new(
        "paper.pdf".to_string(),
        1,
        vec![RuleResult::warn("keywords", "No Keywords detected")],
    );
    assert_eq!(parse(&report)["status"], "pass");
}
