//! Plain-text rendering of a plan

use std::fmt::Write;

use malplan_core::strategy::Strategy;

use crate::format::{format_count, format_currency, format_currency_short, format_ratio};
use crate::plan::Plan;

fn render_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    text_columns: usize,
) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i < text_columns {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    line.join("  ").trim_end().to_string()
}

/// Left-align the first `text_columns` columns, right-align the rest
fn render_table(headers: &[&str], rows: &[Vec<String>], text_columns: usize) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&render_row(headers.iter().copied(), &widths, text_columns));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row.iter().map(String::as_str), &widths, text_columns));
        out.push('\n');
    }
    out
}

/// Per-region metrics with a totals row
pub fn render_strategy(strategy: &Strategy) -> String {
    let headers = [
        "Region",
        "Intervention",
        "Cost",
        "Cases averted",
        "Population",
        "Cost/person",
        "Averted/person",
        "Cost/case averted",
    ];

    let mut rows: Vec<Vec<String>> = strategy
        .regions
        .iter()
        .map(|m| {
            vec![
                m.region.clone(),
                m.scenario.label().to_string(),
                format_currency_short(m.cost),
                format_count(m.cases_averted),
                format_count(m.population),
                format_currency(m.cost_per_person),
                format_ratio(m.cases_averted_per_person, 4),
                format_currency(m.cost_per_case_averted),
            ]
        })
        .collect();

    rows.push(vec![
        "Total".to_string(),
        String::new(),
        format_currency_short(strategy.total_cost),
        format_count(strategy.total_cases_averted),
        String::new(),
        String::new(),
        String::new(),
        format_currency(strategy.overall_cost_per_case_averted),
    ]);

    render_table(&headers, &rows, 2)
}

/// Summary header followed by the strategy table
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", plan.project);
    let _ = writeln!(
        out,
        "Sweep: {} to {} over {} points",
        format_currency_short(plan.bounds.min_threshold),
        format_currency_short(plan.bounds.max_threshold),
        plan.bounds.points
    );
    let _ = writeln!(
        out,
        "Selected threshold: {}",
        format_currency_short(plan.strategy.result.cost_threshold)
    );
    if !plan.excluded_regions.is_empty() {
        let _ = writeln!(out, "Excluded (no case data): {}", plan.excluded_regions.join(", "));
    }
    out.push('\n');
    out.push_str(&render_strategy(&plan.strategy));
    out
}
