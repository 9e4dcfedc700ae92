use serde::Serialize;

use crate::models::AppliedRecord;

/// One bucket of a dashboard chart: a field value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCount {
    pub value: String,
    pub count: usize,
}

/// Frequency counts of a selected string field across the full record set,
/// sorted by count descending. Ties keep first-occurrence order (the sort is
/// stable and buckets are created in scan order). Values are compared as-is:
/// "Mumbai" and "mumbai" are distinct buckets.
pub fn count_by_field<'a, F>(records: &'a [AppliedRecord], selector: F) -> Vec<FieldCount>
where
    F: Fn(&'a AppliedRecord) -> &'a str,
{
    let mut buckets: Vec<FieldCount> = Vec::new();
    for record in records {
        let value = selector(record);
        match buckets.iter_mut().find(|b| b.value == value) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(FieldCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// "Top Roles" chart dataset.
pub fn top_roles(records: &[AppliedRecord]) -> Vec<FieldCount> {
    count_by_field(records, |r| r.job_title.as_str())
}

/// "Applications by City" chart dataset.
pub fn by_location(records: &[AppliedRecord]) -> Vec<FieldCount> {
    count_by_field(records, |r| r.location.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, location: &str) -> AppliedRecord {
        AppliedRecord {
            applied_on: "01-Jan-2026 09:00 AM".to_string(),
            company: "Acme".to_string(),
            job_title: title.to_string(),
            location: location.to_string(),
            keyword: String::new(),
        }
    }

    fn counts(buckets: &[FieldCount]) -> Vec<(&str, usize)> {
        buckets.iter().map(|b| (b.value.as_str(), b.count)).collect()
    }

    #[test]
    fn test_counts_sorted_descending() {
        let records = [rec("A", "x"), rec("A", "x"), rec("B", "x")];
        assert_eq!(counts(&top_roles(&records)), [("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let records = [rec("A", "x"), rec("B", "x")];
        assert_eq!(counts(&top_roles(&records)), [("A", 1), ("B", 1)]);
    }

    #[test]
    fn test_lower_count_first_seen_sorts_after_higher() {
        let records = [rec("B", "x"), rec("A", "x"), rec("A", "x")];
        assert_eq!(counts(&top_roles(&records)), [("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_no_case_normalization() {
        let records = [rec("x", "Mumbai"), rec("x", "mumbai")];
        assert_eq!(
            counts(&by_location(&records)),
            [("Mumbai", 1), ("mumbai", 1)]
        );
    }

    #[test]
    fn test_empty_records_yield_no_buckets() {
        assert!(top_roles(&[]).is_empty());
    }
}
