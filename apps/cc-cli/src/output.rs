//! Rendering of calculation results as text, CSV or JSON.

use cc_chem::Sample;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned plain-text table
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    /// Decimals shown in text output only.
    #[serde(skip)]
    pub decimals: usize,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: f64, decimals: usize) -> Self {
        Self {
            label: label.into(),
            value,
            decimals,
        }
    }
}

/// Result of one command, ready to render.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Metrics {
        title: String,
        metrics: Vec<Metric>,
    },
    Table {
        title: String,
        columns: [&'static str; 2],
        rows: Vec<Sample>,
    },
}

impl Report {
    pub fn row_count(&self) -> usize {
        match self {
            Report::Metrics { metrics, .. } => metrics.len(),
            Report::Table { rows, .. } => rows.len(),
        }
    }

    pub fn render(&self, format: Format) -> CliResult<String> {
        match format {
            Format::Table => Ok(self.render_text()),
            Format::Csv => Ok(self.render_csv()),
            Format::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_text(&self) -> String {
        match self {
            Report::Metrics { title, metrics } => {
                let mut out = format!("{title}\n");
                let width = metrics.iter().map(|m| m.label.len()).max().unwrap_or(0);
                for m in metrics {
                    out.push_str(&format!(
                        "  {:<width$}  {:.prec$}\n",
                        m.label,
                        m.value,
                        width = width,
                        prec = m.decimals
                    ));
                }
                out
            }
            Report::Table {
                title,
                columns,
                rows,
            } => {
                let cells: Vec<(String, String)> =
                    rows.iter().map(|(x, y)| (x.to_string(), y.to_string())).collect();
                let w0 = cells
                    .iter()
                    .map(|c| c.0.len())
                    .chain([columns[0].chars().count()])
                    .max()
                    .unwrap_or(0);
                let w1 = cells
                    .iter()
                    .map(|c| c.1.len())
                    .chain([columns[1].chars().count()])
                    .max()
                    .unwrap_or(0);

                let mut out = format!("{title}\n");
                out.push_str(&format!("  {:>w0$}  {:>w1$}\n", columns[0], columns[1]));
                for (x, y) in &cells {
                    out.push_str(&format!("  {x:>w0$}  {y:>w1$}\n"));
                }
                if rows.is_empty() {
                    out.push_str("  (no rows)\n");
                }
                out
            }
        }
    }

    fn render_csv(&self) -> String {
        match self {
            Report::Metrics { metrics, .. } => {
                let mut out = String::from("quantity,value\n");
                for m in metrics {
                    out.push_str(&format!("{},{}\n", csv_field(&m.label), m.value));
                }
                out
            }
            Report::Table { columns, rows, .. } => {
                let mut out = format!("{},{}\n", csv_field(columns[0]), csv_field(columns[1]));
                for (x, y) in rows {
                    out.push_str(&format!("{x},{y}\n"));
                }
                out
            }
        }
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Report {
        Report::Table {
            title: "Celsius to Fahrenheit".to_string(),
            columns: ["Celsius (°C)", "Fahrenheit (°F)"],
            rows: vec![(0.0, 32.0), (5.0, 41.0), (10.0, 50.0)],
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = table().render(Format::Csv).unwrap();
        assert_eq!(csv, "Celsius (°C),Fahrenheit (°F)\n0,32\n5,41\n10,50\n");
    }

    #[test]
    fn text_table_is_right_aligned() {
        let text = table().render(Format::Table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Celsius to Fahrenheit");
        assert_eq!(lines.len(), 5);
        assert!(lines[4].ends_with("50"));
        assert!(lines[2].contains("0") && lines[2].ends_with("32"));
    }

    #[test]
    fn empty_table_says_so() {
        let report = Report::Table {
            title: "t".to_string(),
            columns: ["a", "b"],
            rows: vec![],
        };
        assert!(report.render(Format::Table).unwrap().contains("(no rows)"));
        assert_eq!(report.render(Format::Csv).unwrap(), "a,b\n");
        assert_eq!(report.row_count(), 0);
    }

    #[test]
    fn metrics_text_uses_requested_decimals() {
        let report = Report::Metrics {
            title: "Tank".to_string(),
            metrics: vec![
                Metric::new("Full volume (L)", 3078.7608, 2),
                Metric::new("Liquid height (m)", 1.6, 3),
            ],
        };
        let text = report.render(Format::Table).unwrap();
        assert!(text.contains("3078.76"));
        assert!(text.contains("1.600"));
        assert_eq!(report.row_count(), 2);
    }

    #[test]
    fn json_is_tagged() {
        let json = table().render(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "table");
        assert_eq!(value["rows"][1][1], 41.0);
        assert_eq!(value["columns"][0], "Celsius (°C)");
    }

    #[test]
    fn csv_fields_with_commas_are_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
