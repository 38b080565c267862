use clap::ValueEnum;

use crate::models::TransactionTable;
use crate::present::chart::{
    comparison_chart, daily_net_chart, group_pie_chart, group_treemap_chart, revenue_mix_chart, ChartSpec
};
use crate::present::table::{key_value_rows, render_table, Column};
use crate::present::{format, Labels, Locale};
use crate::report::{self, Comparison, GuestRanking};
use crate::types::Period;

/// One tab of the report.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum View {
    Overview,
    Country,
    Group,
    Room,
    Detail,
    All
}

impl View {
    pub fn tabs(self) -> Vec<View> {
        match self {
            View::All => vec![View::Overview, View::Country, View::Group, View::Room, View::Detail],
            view => vec![view]
        }
    }
}

/// Renders the views of an already filtered table.
pub struct Dashboard<'a> {
    table: &'a TransactionTable,
    labels: &'static Labels,
    top_n: usize,
    exclude_room_codes: bool
}

impl<'a> Dashboard<'a> {
    pub fn new(table: &'a TransactionTable, locale: Locale, top_n: usize, exclude_room_codes: bool) -> Self {
        Self {
            table,
            labels: locale.labels(),
            top_n,
            exclude_room_codes
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Title line plus the active filters.
    pub fn header(&self, countries: &[String]) -> Vec<String> {
        let labels = self.labels;
        let selection = if countries.is_empty() {
            labels.filter_all.to_string()
        } else {
            countries.join(", ")
        };

        let mut output = vec![format!("{} - {}", labels.page_title, labels.comparison())];
        output.extend(key_value_rows(&[
            (labels.filter_top_n.to_string(), self.top_n.to_string()),
            (labels.filter_countries.to_string(), selection),
        ]));
        output
    }

    pub fn charts(&self, view: View) -> Vec<ChartSpec> {
        let labels = self.labels;
        let table = self.table;
        let top_n = self.top_n;

        view.tabs().into_iter().flat_map(|tab| match tab {
            View::Overview => vec![daily_net_chart(&report::daily_net(table), labels)],
            View::Country => vec![comparison_chart(
                "net_by_country",
                format!("{} (Top {top_n}) - {}", labels.chart_country, labels.comparison()),
                labels.country,
                &report::net_by_country(table, top_n),
                labels
            )],
            View::Group => vec![
                comparison_chart(
                    "net_by_group",
                    format!("{} - {}", labels.chart_group, labels.comparison()),
                    labels.group,
                    &report::net_by_group(table),
                    labels
                ),
                revenue_mix_chart(&report::revenue_mix(table), labels),
                group_pie_chart(&report::group_mix(table, Period::Jan2025), Period::Jan2025, labels),
                group_pie_chart(&report::group_mix(table, Period::Jan2026), Period::Jan2026, labels),
                group_treemap_chart(&report::net_by_group(table), labels),
            ],
            View::Room => vec![comparison_chart(
                "net_by_room_type",
                format!("{} - {}", labels.chart_room, labels.comparison()),
                labels.room_type,
                &report::net_by_room_type(table, top_n, self.exclude_room_codes),
                labels
            )],
            View::Detail => vec![comparison_chart(
                "top_descriptions",
                format!("Top {top_n} {} - {}", labels.chart_descriptions, labels.comparison()),
                labels.description,
                &report::top_descriptions(table, top_n),
                labels
            )],
            View::All => Vec::new()
        }).collect()
    }

    pub fn top_guests(&self) -> GuestRanking {
        report::top_guests(self.table, self.top_n)
    }

    /// Text rendering of `view`: charts as data tables followed by the view's tables.
    pub fn render(&self, view: View) -> Vec<String> {
        let mut output = Vec::new();

        for tab in view.tabs() {
            output.push(String::new());
            output.push(format!("== {} ==", self.tab_title(tab)));

            if tab == View::Overview {
                output.extend(self.kpi_lines());
            }

            for chart in self.charts(tab) {
                output.push(String::new());
                output.extend(chart.to_table());
            }

            match tab {
                View::Country => {
                    output.push(String::new());
                    output.extend(self.comparison_table(self.labels.country, &report::country_table(self.table, self.top_n)));
                }
                View::Room => {
                    output.push(String::new());
                    output.extend(self.comparison_table(self.labels.room_type, &report::room_table(self.table, self.top_n)));
                }
                View::Detail => {
                    output.push(String::new());
                    output.extend(self.guest_table(&self.top_guests()));
                }
                _ => {}
            }
        }

        output
    }

    fn tab_title(&self, view: View) -> &'static str {
        match view {
            View::Overview | View::All => self.labels.tab_overview,
            View::Country => self.labels.tab_country,
            View::Group => self.labels.tab_group,
            View::Room => self.labels.tab_room,
            View::Detail => self.labels.tab_detail
        }
    }

    fn kpi_lines(&self) -> Vec<String> {
        let labels = self.labels;
        let kpis = report::kpis(self.table);
        let earlier = labels.period(Period::Jan2025);
        let later = labels.period(Period::Jan2026);
        let delta = |value| format::change(value, labels.undefined);

        key_value_rows(&[
            (
                format!("{} {earlier} ({})", labels.net, labels.currency),
                format::amount(kpis.net.jan_2025)
            ),
            (
                format!("{} {later} ({})", labels.net, labels.currency),
                format!("{}  {}", format::amount(kpis.net.jan_2026), delta(kpis.net.change()))
            ),
            (
                format!("{} {earlier}", labels.transactions),
                format::count(kpis.transactions.jan_2025)
            ),
            (
                format!("{} {later}", labels.transactions),
                format!("{}  {}", format::count(kpis.transactions.jan_2026), delta(kpis.transactions.change()))
            ),
            (
                format!("{} {earlier} vs {later}", labels.unique_guests),
                format!(
                    "{} -> {}  {}",
                    format::count(kpis.guests.jan_2025),
                    format::count(kpis.guests.jan_2026),
                    delta(kpis.guests.change())
                )
            ),
        ])
    }

    fn comparison_table(&self, key_title: &str, rows: &[Comparison]) -> Vec<String> {
        let labels = self.labels;
        let columns = [
            Column::left(key_title),
            Column::right(labels.net_column(Period::Jan2025)),
            Column::right(labels.net_column(Period::Jan2026)),
            Column::right(labels.change),
        ];

        let cells = rows.iter()
            .map(|row| vec![
                row.key.clone(),
                format::amount(row.net.jan_2025),
                format::amount(row.net.jan_2026),
                format::change(row.change(), ""),
            ])
            .collect::<Vec<_>>();

        render_table(&columns, &cells)
    }

    fn guest_table(&self, ranking: &GuestRanking) -> Vec<String> {
        let labels = self.labels;
        let columns = [
            Column::left(labels.guest),
            Column::right(labels.net_column(Period::Jan2025)),
            Column::right(labels.net_column(Period::Jan2026)),
        ];

        let cells = ranking.rows.iter()
            .map(|row| vec![
                row.key.clone(),
                format::amount(row.net.jan_2025),
                format::amount(row.net.jan_2026),
            ])
            .collect::<Vec<_>>();

        let mut output = vec![labels.top_guests.to_string()];
        output.extend(render_table(&columns, &cells));
        output
    }
}
