use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::present::format;
use crate::present::table::{render_table, Column};
use crate::present::Labels;
use crate::report::{Comparison, DailyNet, GroupShare};
use crate::types::Period;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    GroupedBar,
    StackedBar,
    Pie,
    /// Nested rectangles: series are the outer level, points the inner.
    Treemap
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
    /// Compact value label, e.g. `1.2M`.
    pub label: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<ChartPoint>
}

/// Renderer-agnostic description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// File stem used when the spec is written to disk.
    pub name: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub series: Vec<Series>
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The chart's data as a text table, one column per series.
    pub fn to_table(&self) -> Vec<String> {
        let mut categories: Vec<&str> = Vec::new();

        for point in self.series.iter().flat_map(|series| series.points.iter()) {
            if !categories.contains(&point.x.as_str()) {
                categories.push(&point.x);
            }
        }

        let mut columns = vec![Column::left(self.x_title.clone())];
        columns.extend(self.series.iter().map(|series| Column::right(series.name.clone())));

        let rows = categories.iter()
            .map(|category| {
                let mut row = vec![category.to_string()];

                row.extend(self.series.iter().map(|series| {
                    series.points.iter()
                        .find(|point| point.x == *category)
                        .map(|point| point.label.clone())
                        .unwrap_or_default()
                }));

                row
            })
            .collect::<Vec<_>>();

        let mut output = vec![self.title.clone()];
        output.extend(render_table(&columns, &rows));
        output
    }
}

fn point(x: impl Into<String>, y: Decimal) -> ChartPoint {
    ChartPoint {
        x: x.into(),
        y: y.to_f64().unwrap_or_default(),
        label: format::compact(y)
    }
}

pub fn daily_net_chart(days: &[DailyNet], labels: &Labels) -> ChartSpec {
    let series = Period::ALL.iter()
        .map(|period| Series {
            name: period.to_string(),
            points: days.iter()
                .filter(|day| day.period == *period)
                .map(|day| point(day.date.format("%Y-%m-%d").to_string(), day.net))
                .collect()
        })
        .collect();

    ChartSpec {
        name: "daily_net".to_string(),
        kind: ChartKind::Line,
        title: format!("{} ({})", labels.chart_daily, labels.comparison()),
        x_title: labels.transaction_date.to_string(),
        y_title: labels.net_axis(),
        legend_title: labels.legend_period.to_string(),
        series
    }
}

/// Grouped bars with one series per period.
pub fn comparison_chart(name: &str, title: String, x_title: &str, rows: &[Comparison], labels: &Labels) -> ChartSpec {
    let series = Period::ALL.iter()
        .map(|period| Series {
            name: period.to_string(),
            points: rows.iter()
                .map(|row| point(row.key.clone(), row.net.get(*period)))
                .collect()
        })
        .collect();

    ChartSpec {
        name: name.to_string(),
        kind: ChartKind::GroupedBar,
        title,
        x_title: x_title.to_string(),
        y_title: labels.net_axis(),
        legend_title: labels.legend_period.to_string(),
        series
    }
}

/// Stacked bars: one bar per period, one segment per group label.
pub fn revenue_mix_chart(rows: &[Comparison], labels: &Labels) -> ChartSpec {
    let series = rows.iter()
        .map(|row| Series {
            name: row.key.clone(),
            points: Period::ALL.iter()
                .map(|period| point(period.to_string(), row.net.get(*period)))
                .collect()
        })
        .collect();

    ChartSpec {
        name: "revenue_mix".to_string(),
        kind: ChartKind::StackedBar,
        title: format!("{} - {}", labels.chart_mix, labels.comparison()),
        x_title: labels.legend_period.to_string(),
        y_title: labels.net_axis(),
        legend_title: labels.group.to_string(),
        series
    }
}

pub fn group_pie_chart(shares: &[GroupShare], period: Period, labels: &Labels) -> ChartSpec {
    ChartSpec {
        name: format!("group_mix_{period}"),
        kind: ChartKind::Pie,
        title: format!("{} - {}", labels.chart_pie, labels.period(period)),
        x_title: labels.group.to_string(),
        y_title: labels.net_axis(),
        legend_title: labels.group.to_string(),
        series: vec![Series {
            name: labels.period(period),
            points: shares.iter().map(|share| point(share.label.clone(), share.net)).collect()
        }]
    }
}

/// Treemap of net by period, then by group label.
pub fn group_treemap_chart(rows: &[Comparison], labels: &Labels) -> ChartSpec {
    let series = Period::ALL.iter()
        .map(|period| Series {
            name: period.to_string(),
            points: rows.iter()
                .filter(|row| !row.net.get(*period).is_zero())
                .map(|row| point(row.key.clone(), row.net.get(*period)))
                .collect()
        })
        .collect();

    ChartSpec {
        name: "group_treemap".to_string(),
        kind: ChartKind::Treemap,
        title: format!("{} ({})", labels.chart_treemap, labels.comparison()),
        x_title: labels.group.to_string(),
        y_title: labels.net_axis(),
        legend_title: labels.legend_period.to_string(),
        series
    }
}
