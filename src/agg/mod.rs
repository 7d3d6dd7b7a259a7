//! Aggregation over the canonical numeric columns.
//!
//! Responsibilities:
//!
//! - bucket rows by a [`GroupKey`] and compute `{sum, mean, count}`
//! - define a deterministic group order per key kind
//! - exclude rows whose key is missing (e.g. unparseable Date when keying
//!   by month) from that aggregation only
//!
//! No fitting or ranking logic here; the analytics functions build on top.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;

use crate::domain::{Dataset, GroupKey, GroupRow, GroupStats, Metric, MonthlyPoint, Record};

/// Fixed display order for day-of-week grouping.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Fixed display order for month-name grouping.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Group the dataset by `key` and summarize `metric` per group.
///
/// Groups come back in the key's defined order: chronological for dates,
/// fixed calendar order for weekday/month names, lexicographic otherwise.
/// Rows with a missing key or metric value are excluded; empty groups are
/// omitted rather than reported with a zero mean.
pub fn group_by(ds: &Dataset, key: GroupKey, metric: Metric) -> Vec<GroupRow> {
    // The BTreeMap key is (ordinal, label): the ordinal carries chronological
    // or calendar order, and is 0 for lexicographic key kinds.
    let mut acc: BTreeMap<(i64, String), (f64, usize)> = BTreeMap::new();

    for record in &ds.records {
        let Some(sort_key) = sort_key(record, key) else {
            continue;
        };
        let Some(value) = metric_value(record, metric) else {
            continue;
        };
        let entry = acc.entry(sort_key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    acc.into_iter()
        .map(|((_, label), (sum, count))| GroupRow {
            key: label,
            stats: GroupStats {
                sum,
                mean: sum / count as f64,
                count,
            },
        })
        .collect()
}

/// Monthly Sales totals in chronological order.
///
/// This is the shared input of the growth and forecast analytics; rows with
/// a missing date contribute nothing.
pub fn monthly_totals(ds: &Dataset) -> Vec<MonthlyPoint> {
    let mut acc: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in &ds.records {
        if let Some(date) = record.date {
            *acc.entry((date.year(), date.month())).or_insert(0.0) += record.sales;
        }
    }
    acc.into_iter()
        .map(|((year, month), total)| MonthlyPoint { year, month, total })
        .collect()
}

/// Number of distinct valid dates in the dataset.
pub fn distinct_dates(ds: &Dataset) -> usize {
    ds.records
        .iter()
        .filter_map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Number of distinct region values in the dataset.
pub fn distinct_regions(ds: &Dataset) -> usize {
    distinct_strings(ds, |r| r.region.as_deref())
}

/// Number of distinct category values in the dataset.
pub fn distinct_categories(ds: &Dataset) -> usize {
    distinct_strings(ds, |r| r.category.as_deref())
}

fn distinct_strings<'a>(ds: &'a Dataset, get: impl Fn(&'a Record) -> Option<&'a str>) -> usize {
    ds.records
        .iter()
        .filter_map(get)
        .collect::<BTreeSet<_>>()
        .len()
}

fn metric_value(record: &Record, metric: Metric) -> Option<f64> {
    match metric {
        Metric::Sales => Some(record.sales),
        Metric::Profit => record.profit,
    }
}

fn sort_key(record: &Record, key: GroupKey) -> Option<(i64, String)> {
    match key {
        GroupKey::Month => {
            let date = record.date?;
            let ordinal = i64::from(date.year()) * 12 + i64::from(date.month0());
            Some((ordinal, format!("{:04}-{:02}", date.year(), date.month())))
        }
        GroupKey::Day => {
            let date = record.date?;
            Some((i64::from(date.num_days_from_ce()), date.to_string()))
        }
        GroupKey::Region => record.region.as_ref().map(|r| (0, r.clone())),
        GroupKey::Category => record.category.as_ref().map(|c| (0, c.clone())),
        GroupKey::RegionCategory => {
            let region = record.region.as_ref()?;
            let category = record.category.as_ref()?;
            Some((0, format!("{region} / {category}")))
        }
        GroupKey::Weekday => {
            let date = record.date?;
            let idx = date.weekday().num_days_from_monday() as usize;
            Some((idx as i64, WEEKDAY_NAMES[idx].to_string()))
        }
        GroupKey::MonthName => {
            let date = record.date?;
            let idx = date.month0() as usize;
            Some((idx as i64, MONTH_NAMES[idx].to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnSet, Record};
    use chrono::NaiveDate;

    fn record(date: Option<(i32, u32, u32)>, region: &str, sales: f64) -> Record {
        Record {
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            sales,
            region: Some(region.to_string()),
            category: None,
            product: None,
            profit: None,
            extras: Vec::new(),
        }
    }

    fn dataset(records: Vec<Record>) -> Dataset {
        Dataset {
            columns: ColumnSet {
                date: true,
                sales: true,
                region: true,
                ..ColumnSet::default()
            },
            records,
        }
    }

    #[test]
    fn groups_by_region_with_sum_mean_count() {
        let ds = dataset(vec![
            record(None, "North", 100.0),
            record(None, "South", 50.0),
            record(None, "North", 300.0),
        ]);

        let rows = group_by(&ds, GroupKey::Region, Metric::Sales);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "North");
        assert_eq!(rows[0].stats.count, 2);
        assert!((rows[0].stats.sum - 400.0).abs() < 1e-9);
        assert!((rows[0].stats.mean - 200.0).abs() < 1e-9);
        assert_eq!(rows[1].key, "South");
    }

    #[test]
    fn month_groups_are_chronological() {
        let ds = dataset(vec![
            record(Some((2024, 3, 1)), "North", 1.0),
            record(Some((2023, 12, 15)), "North", 2.0),
            record(Some((2024, 1, 2)), "North", 3.0),
        ]);

        let rows = group_by(&ds, GroupKey::Month, Metric::Sales);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-03"]);

        let days = group_by(&ds, GroupKey::Day, Metric::Sales);
        let keys: Vec<&str> = days.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2023-12-15", "2024-01-02", "2024-03-01"]);
    }

    #[test]
    fn missing_date_excluded_from_date_keys_only() {
        let ds = dataset(vec![
            record(Some((2024, 1, 1)), "North", 10.0),
            record(None, "North", 5.0),
        ]);

        let by_month = group_by(&ds, GroupKey::Month, Metric::Sales);
        assert_eq!(by_month.len(), 1);
        assert!((by_month[0].stats.sum - 10.0).abs() < 1e-9);

        // The dateless row still participates in non-date aggregations.
        let by_region = group_by(&ds, GroupKey::Region, Metric::Sales);
        assert_eq!(by_region[0].stats.count, 2);
        assert!((by_region[0].stats.sum - 15.0).abs() < 1e-9);
    }

    #[test]
    fn group_sums_conserve_total() {
        let ds = dataset(vec![
            record(Some((2024, 1, 1)), "North", 10.0),
            record(Some((2024, 1, 8)), "South", 20.0),
            record(Some((2024, 2, 1)), "East", 30.0),
        ]);
        let total: f64 = ds.records.iter().map(|r| r.sales).sum();

        for key in [GroupKey::Month, GroupKey::Region, GroupKey::Weekday] {
            let grouped: f64 = group_by(&ds, key, Metric::Sales)
                .iter()
                .map(|r| r.stats.sum)
                .sum();
            assert!((grouped - total).abs() < 1e-9);
        }
    }

    #[test]
    fn weekday_groups_use_fixed_order() {
        // 2024-01-01 is a Monday; 2024-01-07 a Sunday; 2024-01-03 a Wednesday.
        let ds = dataset(vec![
            record(Some((2024, 1, 7)), "North", 1.0),
            record(Some((2024, 1, 3)), "North", 2.0),
            record(Some((2024, 1, 1)), "North", 3.0),
        ]);

        let rows = group_by(&ds, GroupKey::Weekday, Metric::Sales);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Monday", "Wednesday", "Sunday"]);
    }

    #[test]
    fn monthly_totals_accumulate_per_month() {
        let ds = dataset(vec![
            record(Some((2024, 1, 1)), "North", 100.0),
            record(Some((2024, 1, 20)), "North", 50.0),
            record(Some((2024, 2, 1)), "North", 70.0),
            record(None, "North", 999.0),
        ]);

        let monthly = monthly_totals(&ds);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].label(), "2024-01");
        assert!((monthly[0].total - 150.0).abs() < 1e-9);
        assert!((monthly[1].total - 70.0).abs() < 1e-9);
    }

    #[test]
    fn profit_metric_skips_rows_without_profit() {
        let mut ds = dataset(vec![
            record(None, "North", 100.0),
            record(None, "North", 200.0),
        ]);
        ds.columns.profit = true;
        ds.records[0].profit = Some(20.0);

        let rows = group_by(&ds, GroupKey::Region, Metric::Profit);
        assert_eq!(rows[0].stats.count, 1);
        assert!((rows[0].stats.sum - 20.0).abs() < 1e-9);
    }

    #[test]
    fn region_category_pairs_and_month_names() {
        let mut ds = dataset(vec![
            record(Some((2024, 2, 1)), "North", 10.0),
            record(Some((2024, 1, 1)), "North", 20.0),
        ]);
        ds.columns.category = true;
        ds.records[0].category = Some("Food".to_string());
        ds.records[1].category = Some("Books".to_string());

        let pairs = group_by(&ds, GroupKey::RegionCategory, Metric::Sales);
        let keys: Vec<&str> = pairs.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["North / Books", "North / Food"]);

        let months = group_by(&ds, GroupKey::MonthName, Metric::Sales);
        let keys: Vec<&str> = months.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["January", "February"]);
    }

    #[test]
    fn distinct_counts() {
        let ds = dataset(vec![
            record(Some((2024, 1, 1)), "North", 1.0),
            record(Some((2024, 1, 1)), "South", 1.0),
            record(Some((2024, 1, 2)), "North", 1.0),
        ]);
        assert_eq!(distinct_dates(&ds), 2);
        assert_eq!(distinct_regions(&ds), 2);
        assert_eq!(distinct_categories(&ds), 0);
    }
}
