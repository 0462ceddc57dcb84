//! CSV export of the risk register.

use std::io;

use bankability_core::QuantificationPolicy;
use chrono::NaiveDate;
use csv::Writer;

use crate::error::RegisterError;
use crate::filter::DateRange;
use crate::risk::Risk;

const DATE_FORMAT: &str = "%Y-%m-%d";

const HEADER: [&str; 14] = [
    "Title",
    "Category",
    "Stage",
    "Owner",
    "Date Identified",
    "Likelihood",
    "Impact Cost ($)",
    "Risk Score",
    "Risk Level",
    "Contingency ($)",
    "Mitigation Plan",
    "Mitigation Status",
    "Residual Likelihood",
    "Residual Impact Cost ($)",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Append a `Comments` column, one `author: content` entry per line.
    pub include_comments: bool,
    /// Only export risks identified inside this window.
    pub date_range: Option<DateRange>,
}

/// Default download name, e.g. `risk-register-2026-10-16.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("risk-register-{}.csv", date.format(DATE_FORMAT))
}

/// Write `risks` as CSV with a header row. Returns the number of data rows.
pub fn export_csv<'a, W: io::Write>(
    risks: impl IntoIterator<Item = &'a Risk>,
    policy: &QuantificationPolicy,
    options: &ExportOptions,
    writer: W,
) -> Result<usize, RegisterError> {
    let mut wtr = Writer::from_writer(writer);

    let mut header: Vec<&str> = HEADER.to_vec();
    if options.include_comments {
        header.push("Comments");
    }
    wtr.write_record(&header)?;

    let mut rows = 0;
    for risk in risks {
        if options
            .date_range
            .is_some_and(|r| !r.contains(risk.date_identified()))
        {
            continue;
        }
        let assessment = risk.assessment();
        let mitigation = risk.mitigation();
        let mut record = vec![
            risk.title().to_string(),
            risk.category().to_string(),
            risk.stage().to_string(),
            risk.owner().to_string(),
            risk.date_identified().format(DATE_FORMAT).to_string(),
            assessment.likelihood().to_string(),
            assessment.impact_cost().to_string(),
            assessment.risk_score().to_string(),
            assessment.level(policy).to_string(),
            assessment.contingency().to_string(),
            mitigation.description.clone(),
            mitigation.status.to_string(),
            mitigation.residual_likelihood.to_string(),
            mitigation.residual_impact_cost.to_string(),
        ];
        if options.include_comments {
            let comments: Vec<String> = risk
                .comments()
                .iter()
                .map(|c| format!("{}: {}", c.author, c.content))
                .collect();
            record.push(comments.join("\n"));
        }
        wtr.write_record(&record)?;
        rows += 1;
    }

    wtr.flush()?;
    tracing::debug!(rows, include_comments = options.include_comments, "risk register exported");
    Ok(rows)
}
