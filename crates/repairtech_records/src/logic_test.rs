#[cfg(test)]
mod tests {
    use crate::logic::{filter_and_sort, ListQuery, SortKey};
    use chrono::{TimeZone, Utc};
    use repairtech_core::{RepairRecord, RepairStatus};

    fn record(id: &str, brand: &str, status: RepairStatus, day: u32) -> RepairRecord {
        let at = Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap();
        RepairRecord {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            ticket_number: Some(format!("RT-202506{:02}-0001", day)),
            customer_name: "Juan Pérez".to_string(),
            customer_email: "juan@ejemplo.com".to_string(),
            customer_phone: None,
            brand: brand.to_string(),
            model: "Generic".to_string(),
            serial_number: None,
            issue_description: "La pantalla parpadea al encender".to_string(),
            status,
            technician_notes: None,
            estimated_cost: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn sample_records() -> Vec<RepairRecord> {
        vec![
            record("a", "Dell", RepairStatus::Pending, 1),
            record("b", "Lenovo", RepairStatus::Completed, 3),
            record("c", "Apple", RepairStatus::InProgress, 2),
        ]
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let sorted = filter_and_sort(sample_records(), &ListQuery::default());
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_oldest_sort() {
        let query = ListQuery {
            sort: SortKey::Oldest,
            ..Default::default()
        };
        let sorted = filter_and_sort(sample_records(), &query);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn test_brand_sort_is_case_insensitive() {
        let mut records = sample_records();
        records[0].brand = "dell".to_string();
        let query = ListQuery {
            sort: SortKey::Brand,
            ..Default::default()
        };
        let sorted = filter_and_sort(records, &query);
        let brands: Vec<&str> = sorted.iter().map(|r| r.brand.as_str()).collect();
        assert_eq!(brands, ["Apple", "dell", "Lenovo"]);
    }

    #[test]
    fn test_search_matches_across_fields() {
        // By ticket fragment, case-insensitive.
        let query = ListQuery {
            search: Some("rt-20250602".to_string()),
            ..Default::default()
        };
        let found = filter_and_sort(sample_records(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c");

        // By issue description.
        let query = ListQuery {
            search: Some("parpadea".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(sample_records(), &query).len(), 3);

        // No match.
        let query = ListQuery {
            search: Some("toshiba".to_string()),
            ..Default::default()
        };
        assert!(filter_and_sort(sample_records(), &query).is_empty());
    }

    #[test]
    fn test_blank_search_is_a_no_op() {
        let query = ListQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(sample_records(), &query).len(), 3);
    }

    #[test]
    fn test_status_filter() {
        let query = ListQuery {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        let found = filter_and_sort(sample_records(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");

        let query = ListQuery {
            status: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(sample_records(), &query).len(), 3);

        // Unknown filter values match nothing.
        let query = ListQuery {
            status: Some("exploded".to_string()),
            ..Default::default()
        };
        assert!(filter_and_sort(sample_records(), &query).is_empty());
    }

    #[test]
    fn test_search_and_status_compose() {
        let query = ListQuery {
            search: Some("lenovo".to_string()),
            status: Some("completed".to_string()),
            sort: SortKey::Newest,
        };
        let found = filter_and_sort(sample_records(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");
    }
}
