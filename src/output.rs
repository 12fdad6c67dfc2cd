//! Display text for scan outcomes.
//!
//! The caller owns the display surface; this module only produces the text.

use std::fmt::Write;

use crate::config::{
    LABEL_DNS, LABEL_DOMAIN, LABEL_REACHABILITY, LABEL_RISK_LEVEL, LABEL_RISK_SCORE,
    LABEL_TRUST_STATUS, LABEL_URL_TYPE, LABEL_VERDICT, LABEL_WHOIS, NOT_REACHABLE_TEXT,
    REACHABLE_TEXT,
};
use crate::error_handling::ScanError;
use crate::models::ScanReport;

/// Width of the label column in the result header.
const LABEL_WIDTH: usize = 12;

/// Renders a scan result into the fixed multi-line template.
///
/// Order: domain, trust status, URL type, risk level, risk score,
/// reachability (only when the backend sent it), verdict, then the WHOIS and
/// DNS summaries as separate blocks.
pub fn render_report(report: &ScanReport) -> String {
    let mut out = String::new();
    push_field(&mut out, LABEL_DOMAIN, &report.domain);
    push_field(&mut out, LABEL_TRUST_STATUS, &report.trust_status);
    push_field(&mut out, LABEL_URL_TYPE, &report.url_type);
    push_field(&mut out, LABEL_RISK_LEVEL, &report.risk_level);
    push_field(&mut out, LABEL_RISK_SCORE, &report.risk_score);
    if let Some(reachable) = report.reachable {
        let text = if reachable {
            REACHABLE_TEXT
        } else {
            NOT_REACHABLE_TEXT
        };
        push_field(&mut out, LABEL_REACHABILITY, &text);
    }
    push_field(&mut out, LABEL_VERDICT, &report.verdict);

    // Writing to a String cannot fail
    let _ = write!(
        out,
        "\n{LABEL_WHOIS}:\n{}\n\n{LABEL_DNS}:\n{}",
        report.whois_summary, report.dns_summary
    );
    out
}

/// Renders either outcome of a scan; errors become their user-facing message.
pub fn render_outcome(outcome: &Result<ScanReport, ScanError>) -> String {
    match outcome {
        Ok(report) => render_report(report),
        Err(e) => e.to_string(),
    }
}

fn push_field(out: &mut String, label: &str, value: &dyn std::fmt::Display) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$} : {value}");
}
