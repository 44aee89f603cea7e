//! Per-scenario metrics and tabular reports.

use std::fmt;
use std::io::{self, Write};

use crate::metrics::EntityFilter;

use super::scenario::{Scenario, ScenarioKey};

/// Column names of the CSV report, in order.
pub const CSV_HEADER: [&str; 8] = [
    "req",
    "ucid",
    "entities",
    "actors",
    "actors_explicit",
    "interactions",
    "pureinteractions",
    "consecutive",
];

/// All metrics of one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "export", derive(serde::Serialize))]
pub struct ScenarioMetrics {
    pub entities: usize,
    pub actors: usize,
    pub explicit: usize,
    pub actors_explicit: usize,
    pub interactions: usize,
    /// Interactions between an actor and a participant.
    pub user_level_interactions: usize,
    pub consecutive_interactions: usize,
}

impl ScenarioMetrics {
    pub fn of(scenario: &Scenario) -> Self {
        Self {
            entities: scenario.entity_count(EntityFilter::ALL),
            actors: scenario.entity_count(EntityFilter::ACTORS),
            explicit: scenario.entity_count(EntityFilter::EXPLICIT),
            actors_explicit: scenario.entity_count(EntityFilter::EXPLICIT_ACTORS),
            interactions: scenario.interaction_count(false),
            user_level_interactions: scenario.interaction_count(true),
            consecutive_interactions: scenario.consecutive_interaction_count(),
        }
    }
}

impl fmt::Display for ScenarioMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            " - {} entities ({} actors, {} explicit)",
            self.entities, self.actors, self.explicit
        )?;
        write!(
            f,
            " - {} interactions ({} user-system level, {} consecutive)",
            self.interactions, self.user_level_interactions, self.consecutive_interactions
        )
    }
}

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "export", derive(serde::Serialize))]
pub struct ReportRow {
    pub req: String,
    pub ucid: String,
    #[cfg_attr(feature = "export", serde(flatten))]
    pub metrics: ScenarioMetrics,
}

/// Metrics of many scenarios, one row each, ordered by `(req, ucid)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn from_scenarios<'a>(scenarios: impl IntoIterator<Item = &'a Scenario>) -> Self {
        let mut rows: Vec<ReportRow> = scenarios
            .into_iter()
            .map(|scenario| {
                let ScenarioKey { req, ucid } = scenario.key().clone();
                ReportRow {
                    req,
                    ucid,
                    metrics: scenario.metrics(),
                }
            })
            .collect();
        rows.sort_by(|a, b| (&a.req, &a.ucid).cmp(&(&b.req, &b.ucid)));
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the report as CSV with a header line.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        for record in self.csv_records() {
            writeln!(out, "{record}")?;
        }
        Ok(())
    }

    pub fn to_csv_string(&self) -> String {
        self.csv_records().fold(String::new(), |mut csv, record| {
            csv.push_str(&record);
            csv.push('\n');
            csv
        })
    }

    /// CSV header followed by one record per row, without line terminators.
    fn csv_records(&self) -> impl Iterator<Item = String> + '_ {
        let rows = self.rows.iter().map(|row| {
            let m = &row.metrics;
            format!(
                "{},{},{},{},{},{},{},{}",
                csv_field(&row.req),
                csv_field(&row.ucid),
                m.entities,
                m.actors,
                m.actors_explicit,
                m.interactions,
                m.user_level_interactions,
                m.consecutive_interactions
            )
        });
        std::iter::once(CSV_HEADER.join(",")).chain(rows)
    }

    /// Serialize the rows as a JSON array.
    #[cfg(feature = "export")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}

/// Quote a CSV field if it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\"")).into()
    } else {
        value.into()
    }
}
