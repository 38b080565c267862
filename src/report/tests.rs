use super::aggregate::{compare_by, top_n_by_total};
use super::{
    country_table, daily_net, group_mix, kpis, net_by_country, net_by_group, net_by_room_type, revenue_mix,
    room_table, top_descriptions, top_guests, PeriodPair
};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::fixtures::{create_transaction, TransactionExt};
use crate::models::{RoomColumn, Transaction, TransactionTable};
use crate::types::Period;

fn create_table(records: Vec<Transaction>) -> TransactionTable {
    TransactionTable::new(records, RoomColumn::RoomType)
}

fn net(value: i64) -> Decimal {
    Decimal::from(value)
}

#[test]
fn test_kpis_compare_totals_counts_and_distinct_guests() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 1000, "N/A"),
        create_transaction(Period::Jan2026, 2, 2000, "VN").with_first_name(Some("Binh")),
        create_transaction(Period::Jan2026, 3, 0, "VN").with_first_name(Some(" Binh ")),
        create_transaction(Period::Jan2026, 4, 0, "VN").with_first_name(Some("  ")),
        create_transaction(Period::Jan2026, 5, 0, "VN").with_first_name(None),
    ]);

    let kpis = kpis(&table);

    assert_eq!(kpis.net, PeriodPair { jan_2025: net(1000), jan_2026: net(2000) });
    assert_eq!(kpis.net.change(), Some(net(100)));
    assert_eq!(kpis.transactions, PeriodPair { jan_2025: 1, jan_2026: 4 });
    assert_eq!(kpis.transactions.change(), Some(net(300)));
    assert_eq!(kpis.guests, PeriodPair { jan_2025: 1, jan_2026: 1 });
    assert_eq!(kpis.guests.change(), Some(Decimal::ZERO));
}

#[test]
fn test_kpis_leave_change_undefined_without_baseline() {
    let table = create_table(vec![create_transaction(Period::Jan2026, 2, 2000, "VN")]);
    let kpis = kpis(&table);

    assert!(kpis.net.change().is_none());
    assert!(kpis.transactions.change().is_none());
    assert!(kpis.guests.change().is_none());
}

#[test]
fn test_daily_net_sums_per_date_and_period() -> Result<()> {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 2, 100, "VN"),
        create_transaction(Period::Jan2025, 2, 50, "KR"),
        create_transaction(Period::Jan2026, 2, 300, "VN"),
        create_transaction(Period::Jan2025, 1, 10, "VN"),
    ]);

    let days = daily_net(&table);
    let first = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or_else(|| anyhow!("Invalid date"))?;
    let second = NaiveDate::from_ymd_opt(2025, 1, 2).ok_or_else(|| anyhow!("Invalid date"))?;

    assert_eq!(days.len(), 3);
    assert_eq!((days[0].date, days[0].period, days[0].net), (first, Period::Jan2025, net(10)));
    assert_eq!((days[1].date, days[1].period, days[1].net), (second, Period::Jan2025, net(150)));
    assert_eq!(days[2].period, Period::Jan2026);
    assert_eq!(days[2].net, net(300));

    Ok(())
}

#[test]
fn test_top_n_keeps_highest_combined_totals() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 500, "VN"),
        create_transaction(Period::Jan2026, 1, 100, "VN"),
        create_transaction(Period::Jan2025, 1, 50, "KR"),
        create_transaction(Period::Jan2026, 1, 700, "KR"),
        create_transaction(Period::Jan2025, 1, 300, "AU"),
        create_transaction(Period::Jan2026, 1, 10, "US"),
    ]);

    let rows = net_by_country(&table, 2);
    let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();

    assert_eq!(keys, vec!["KR", "VN"]);
    assert_eq!(rows[0].net, PeriodPair { jan_2025: net(50), jan_2026: net(700) });
}

#[test]
fn test_top_n_never_exceeds_limit_and_dominates_excluded_categories() {
    let mut records = Vec::new();

    for (index, country) in ["AU", "CN", "DE", "FR", "JP", "KR", "US", "VN"].iter().enumerate() {
        let amount = ((index as i64 * 37) % 11) * 100;
        records.push(create_transaction(Period::Jan2025, 1, amount, country));
        records.push(create_transaction(Period::Jan2026, 2, 900 - amount, country).with_group(20));
        records.push(create_transaction(Period::Jan2026, 3, amount * 2, country));
    }

    let table = create_table(records);
    let everything = compare_by(table.records(), |record| Some(record.country.clone()));

    for top_n in 0..=10 {
        let kept = top_n_by_total(everything.clone(), top_n);
        let kept_keys: Vec<&String> = kept.iter().map(|row| &row.key).collect();

        assert!(kept.len() <= top_n);

        let lowest_kept = kept.iter().map(|row| row.net.total()).min();
        let highest_excluded = everything.iter()
            .filter(|row| !kept_keys.contains(&&row.key))
            .map(|row| row.net.total())
            .max();

        if let (Some(lowest_kept), Some(highest_excluded)) = (lowest_kept, highest_excluded) {
            assert!(lowest_kept >= highest_excluded);
        }
    }
}

#[test]
fn test_aggregations_are_idempotent() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 500, "VN").with_description("Spa"),
        create_transaction(Period::Jan2026, 1, 500, "KR").with_description("Dinner"),
        create_transaction(Period::Jan2026, 2, 500, "JP").with_description("Spa"),
    ]);

    assert_eq!(net_by_country(&table, 5), net_by_country(&table, 5));
    assert_eq!(top_descriptions(&table, 5), top_descriptions(&table, 5));
    assert_eq!(top_guests(&table, 5), top_guests(&table, 5));
    assert_eq!(daily_net(&table), daily_net(&table));
    assert_eq!(kpis(&table), kpis(&table));
}

#[test]
fn test_group_views_use_label_map_and_mix_exclusions() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 1000, "VN").with_group(10),
        create_transaction(Period::Jan2025, 1, 100, "VN").with_group(70),
        create_transaction(Period::Jan2026, 1, 400, "VN").with_group(20),
        create_transaction(Period::Jan2026, 1, 80, "VN").with_group(60),
        create_transaction(Period::Jan2026, 1, 5, "VN").with_group(999),
    ]);

    let groups = net_by_group(&table);
    let labels: Vec<&str> = groups.iter().map(|row| row.key.as_str()).collect();

    assert_eq!(labels, vec!["999", "F&B", "Room", "Service", "VAT"]);

    let mix = revenue_mix(&table);
    let mix_labels: Vec<&str> = mix.iter().map(|row| row.key.as_str()).collect();

    assert_eq!(mix_labels, vec!["999", "F&B", "Room"]);

    let pie_2025 = group_mix(&table, Period::Jan2025);

    assert_eq!(pie_2025.len(), 2);
    assert!(pie_2025.iter().any(|share| share.label == "VAT" && share.net == net(100)));
    assert!(group_mix(&table, Period::Jan2026).iter().all(|share| share.label != "Room"));
}

#[test]
fn test_room_chart_skips_blank_and_excluded_codes() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 900, "VN").with_room_type("PF"),
        create_transaction(Period::Jan2025, 1, 800, "VN").with_room_type("PM"),
        create_transaction(Period::Jan2025, 1, 700, "VN").with_room_type(""),
        create_transaction(Period::Jan2026, 1, 600, "VN").with_room_type("SUP"),
        create_transaction(Period::Jan2026, 1, 500, "VN").with_room_type("DLX"),
    ]);

    let excluded: Vec<String> = net_by_room_type(&table, 10, true).into_iter().map(|row| row.key).collect();
    let included: Vec<String> = net_by_room_type(&table, 10, false).into_iter().map(|row| row.key).collect();

    assert_eq!(excluded, vec!["SUP", "DLX"]);
    assert_eq!(included, vec!["PF", "PM", "SUP", "DLX"]);

    let table_rows = room_table(&table, 10);

    assert_eq!(table_rows.len(), 5);
    assert_eq!(table_rows[0].key, "SUP");
}

#[test]
fn test_country_table_ranks_by_latest_period_with_double_limit() {
    let mut records = Vec::new();

    for (index, country) in ["AU", "CN", "DE", "FR", "JP", "KR", "US"].iter().enumerate() {
        records.push(create_transaction(Period::Jan2026, 1, (index as i64 + 1) * 100, country));
        records.push(create_transaction(Period::Jan2025, 1, 10_000, country));
    }

    let rows = country_table(&create_table(records), 3);

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].key, "US");
    assert_eq!(rows[5].key, "CN");
}

#[test]
fn test_top_guests_distinguish_country_and_rank_by_latest_period() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 5000, "VN").with_first_name(Some("Anna")),
        create_transaction(Period::Jan2026, 1, 100, "VN").with_first_name(Some("Anna")),
        create_transaction(Period::Jan2026, 1, 300, "AU").with_first_name(Some("Anna")),
        create_transaction(Period::Jan2026, 1, 200, "KR").with_first_name(Some("Minh")),
    ]);

    let ranking = top_guests(&table, 2);
    let keys: Vec<&str> = ranking.rows.iter().map(|row| row.key.as_str()).collect();

    assert_eq!(ranking.sort_period, Period::Jan2026);
    assert_eq!(keys, vec!["Anna (AU)", "Minh (KR)"]);
}

#[test]
fn test_top_guests_fall_back_to_earlier_period_when_latest_is_absent() {
    let table = create_table(vec![
        create_transaction(Period::Jan2025, 1, 100, "VN").with_first_name(Some("Anna")),
        create_transaction(Period::Jan2025, 1, 300, "VN").with_first_name(Some("Binh")),
    ]);

    let ranking = top_guests(&table, 5);

    assert_eq!(ranking.sort_period, Period::Jan2025);
    assert_eq!(ranking.rows[0].key, "Binh (VN)");
}

#[test]
fn test_top_descriptions_skip_missing_descriptions() {
    let mut missing = create_transaction(Period::Jan2026, 1, 9000, "VN");
    missing.description = None;

    let table = create_table(vec![
        missing,
        create_transaction(Period::Jan2025, 1, 100, "VN").with_description("Laundry"),
        create_transaction(Period::Jan2026, 1, 400, "VN").with_description("Dinner"),
    ]);

    let rows = top_descriptions(&table, 5);
    let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();

    assert_eq!(keys, vec!["Dinner", "Laundry"]);
}

#[test]
fn test_overflowing_sums_clamp_instead_of_panicking() -> Result<()> {
    let huge = crate::types::parse_amount("5e28").ok_or_else(|| anyhow!("5e28 did not parse"))?;
    let mut first = create_transaction(Period::Jan2025, 1, 0, "VN");
    first.net_amount = huge;
    let mut second = create_transaction(Period::Jan2025, 2, 0, "VN");
    second.net_amount = huge;
    let mut third = create_transaction(Period::Jan2026, 2, 0, "VN");
    third.net_amount = huge;

    let table = create_table(vec![first, second, third]);

    let kpis = kpis(&table);
    assert_eq!(kpis.net.jan_2025, Decimal::MAX);
    assert_eq!(kpis.net.jan_2026, huge);
    assert_eq!(kpis.transactions.jan_2025, 2);

    let countries = net_by_country(&table, 5);
    assert_eq!(countries[0].net.total(), Decimal::MAX);

    let days = daily_net(&table);
    assert_eq!(days.len(), 3);
    assert!(days.iter().all(|day| day.net == huge));

    Ok(())
}
