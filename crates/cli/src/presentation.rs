//! Text report rendering

use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use benchsum_core::domain::{FactTable, RecordSet, RunRecord};

pub const SYSTEM_INFO_TITLE: &str = "SYSTEM INFORMATION";
pub const RESULTS_TITLE: &str = "BENCHMARK RESULTS (Grouped by Operations)";

#[derive(Tabled)]
struct RunRow {
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Operations")]
    operations: String,
    #[tabled(rename = "Gage")]
    gage: String,
    #[tabled(rename = "MPI Runtime (s)")]
    primary: String,
    #[tabled(rename = "Troute Runtime (s)")]
    secondary: String,
    #[tabled(rename = "Total Runtime (s)")]
    total: String,
}

impl From<&RunRecord> for RunRow {
    fn from(record: &RunRecord) -> Self {
        let [duration, operations, gage, primary, secondary, total] = record.to_row();
        Self {
            duration,
            operations,
            gage,
            primary,
            secondary,
            total,
        }
    }
}

/// `=== TITLE ===`, highlighted when stdout is a terminal
pub fn heading(title: &str) -> String {
    format!("=== {} ===", title).cyan().bold().to_string()
}

/// One `key: value` line per fact, in insertion order
pub fn system_info_lines(facts: &FactTable) -> Vec<String> {
    facts
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect()
}

/// Borderless table of runs in report order
pub fn results_table(records: &RecordSet) -> String {
    let rows: Vec<RunRow> = records.iter().map(RunRow::from).collect();
    Table::new(rows)
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

pub fn print_system_info(facts: &FactTable) {
    println!();
    println!("{}", heading(SYSTEM_INFO_TITLE));
    for line in system_info_lines(facts) {
        println!("{}", line);
    }
}

pub fn print_results(records: &RecordSet) {
    println!();
    println!("{}", heading(RESULTS_TITLE));
    println!();
    println!("{}", results_table(records));
}
