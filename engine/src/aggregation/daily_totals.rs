use shared::models::{DailyTotal, Record};
use shared::utils::parse_decimal_prefix;

/// Hours as a number, read from the leading decimal of the text ("3h" is 3).
/// Text that does not start with a number becomes NaN and poisons the day's
/// total instead of failing the run.
pub fn parse_hours(hours: &str) -> f64 {
    parse_decimal_prefix(hours).unwrap_or(f64::NAN)
}

/// Distinct dates in the order they first appear.
pub fn get_days(records: &[Record]) -> Vec<String> {
    let mut days: Vec<String> = Vec::new();
    for record in records {
        if !days.iter().any(|d| d == &record.date) {
            days.push(record.date.clone());
        }
    }
    days
}

pub fn get_hours(records: &[Record], date: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| parse_hours(&r.hours))
        .sum()
}

pub fn get_hours_by_date(records: &[Record]) -> Vec<DailyTotal> {
    get_days(records)
        .into_iter()
        .map(|date| {
            let hours = get_hours(records, &date);
            DailyTotal { date, hours }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Acme", "2024-01-09", "2"),
            Record::new("Acme", "2024-01-03", "1,25"),
            Record::new("Acme", "2024-01-09", "0.5"),
            Record::new("Acme", "2024-01-04", "7,5"),
            Record::new("Acme", "2024-01-03", "4"),
        ]
    }

    #[test]
    fn test_get_days_first_occurrence_order() {
        assert_eq!(get_days(&sample_records()), vec!["2024-01-09", "2024-01-03", "2024-01-04"]);
    }

    #[test]
    fn test_get_days_no_duplicates() {
        let days = get_days(&sample_records());
        for (i, day) in days.iter().enumerate() {
            assert!(!days[i + 1..].contains(day), "duplicate day {}", day);
        }
    }

    #[test]
    fn test_get_days_empty() {
        assert!(get_days(&[]).is_empty());
    }

    #[test]
    fn test_get_hours_mixed_separators() {
        let records = sample_records();
        assert_eq!(get_hours(&records, "2024-01-03"), 5.25);
        assert_eq!(get_hours(&records, "2024-01-09"), 2.5);
        assert_eq!(get_hours(&records, "2024-01-31"), 0.0);
    }

    #[test]
    fn test_get_hours_by_date() {
        let totals = get_hours_by_date(&sample_records());
        assert_eq!(
            totals,
            vec![
                DailyTotal { date: "2024-01-09".to_string(), hours: 2.5 },
                DailyTotal { date: "2024-01-03".to_string(), hours: 5.25 },
                DailyTotal { date: "2024-01-04".to_string(), hours: 7.5 },
            ]
        );
    }

    #[test]
    fn test_total_is_preserved_across_grouping() {
        let records = sample_records();
        let expected: f64 = records.iter().map(|r| parse_hours(&r.hours)).sum();
        let grouped: f64 = get_hours_by_date(&records).iter().map(|d| d.hours).sum();
        assert!((expected - grouped).abs() < 1e-9, "{} != {}", expected, grouped);
    }

    #[test]
    fn test_parse_hours_reads_leading_number() {
        assert_eq!(parse_hours("3h"), 3.0);
        assert_eq!(parse_hours("2 h"), 2.0);
        assert_eq!(parse_hours("1,5,0"), 1.5);
        assert!(parse_hours("inf").is_nan());
        assert!(parse_hours("two").is_nan());
    }

    #[test]
    fn test_hours_with_units_are_summed() {
        let records = vec![
            Record::new("Acme", "2024-01-05", "3h"),
            Record::new("Acme", "2024-01-05", "1,5 h"),
        ];
        assert_eq!(get_hours(&records, "2024-01-05"), 4.5);
    }

    #[test]
    fn test_non_numeric_hours_become_nan() {
        let records = vec![
            Record::new("Acme", "2024-01-05", "2"),
            Record::new("Acme", "2024-01-05", "two"),
            Record::new("Acme", "2024-01-06", "3"),
        ];
        let totals = get_hours_by_date(&records);
        assert!(totals[0].hours.is_nan());
        assert_eq!(totals[1].hours, 3.0);
    }
}
