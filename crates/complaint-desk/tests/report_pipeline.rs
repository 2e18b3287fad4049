use chrono::NaiveDate;
use complaint_desk::session::Session;
use complaint_desk::workflows::report::{
    ComplaintRecord, ComplaintStatus, ComplaintType, FilterState, Location, ReportEngine, SortKey,
    UserAlert,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn record(id: i64, kind: &str, location: &str, status: i64, on: NaiveDate) -> ComplaintRecord {
    ComplaintRecord {
        id,
        complaint_type: kind.to_string(),
        location: location.to_string(),
        details: format!("details for {id}"),
        status,
        complaint_date: on,
    }
}

fn two_plumbing_complaints() -> Vec<ComplaintRecord> {
    vec![
        record(1, "Plumber", "Hall-1", 0, date(2024, 1, 10)),
        record(2, "Plumber", "Hall-3", 2, date(2024, 2, 1)),
    ]
}

fn campus_listing() -> Vec<ComplaintRecord> {
    vec![
        record(10, "Electricity", "Hall-4", 3, date(2024, 5, 2)),
        record(11, "Internet", "CC1", 0, date(2024, 4, 18)),
        record(12, "Garbage", "hall-4", 2, date(2024, 4, 30)),
        record(13, "Dustbin", "NR2", 1, date(2024, 3, 9)),
        record(14, "electricity", "HALL-4", 0, date(2024, 5, 20)),
        record(15, "Other", "LHTC", 2, date(2024, 1, 1)),
    ]
}

fn engine(records: Vec<ComplaintRecord>) -> ReportEngine {
    ReportEngine::with_records(Session::new("warden", "supervisor", "token"), records)
}

fn ids(records: &[ComplaintRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn worked_example_location_status_and_sort() {
    let mut engine = engine(two_plumbing_complaints());

    let view = engine
        .update_filters(|filters| filters.location = Some(Location::Hall1))
        .expect("location filter");
    assert_eq!(ids(view), vec![1]);

    let view = engine
        .set_filters(FilterState {
            status: Some(ComplaintStatus::Resolved),
            ..FilterState::default()
        })
        .expect("status filter");
    assert_eq!(ids(view), vec![2]);

    let view = engine
        .set_filters(FilterState {
            sort_by: Some(SortKey::MostRecent),
            ..FilterState::default()
        })
        .expect("sort");
    assert_eq!(ids(view), vec![2, 1]);
}

#[test]
fn location_filter_is_exact_partition() {
    let listing = campus_listing();
    let mut engine = engine(listing.clone());
    let view = engine
        .update_filters(|filters| filters.location = Some(Location::Hall4))
        .expect("location filter")
        .to_vec();

    assert!(view
        .iter()
        .all(|record| record.location.eq_ignore_ascii_case("Hall-4")));
    let excluded: Vec<&ComplaintRecord> = listing
        .iter()
        .filter(|record| !view.contains(record))
        .collect();
    assert!(excluded
        .iter()
        .all(|record| !record.location.eq_ignore_ascii_case("Hall-4")));
    assert_eq!(ids(&view), vec![10, 12, 14]);
}

#[test]
fn view_is_always_a_subset_of_the_listing() {
    let listing = campus_listing();
    let mut engine = engine(listing.clone());
    engine
        .set_filters(FilterState {
            start_date: Some(date(2024, 4, 1)),
            end_date: Some(date(2024, 5, 2)),
            sort_by: Some(SortKey::Status),
            ..FilterState::default()
        })
        .expect("filters apply");

    assert!(engine.view().iter().all(|record| listing.contains(record)));
    assert!(engine
        .view()
        .iter()
        .all(|record| record.complaint_date >= date(2024, 4, 1)
            && record.complaint_date <= date(2024, 5, 2)));
    assert_eq!(ids(engine.view()), vec![11, 12, 10]);
}

#[test]
fn recent_and_older_sorts_are_reverses_for_distinct_dates() {
    let mut engine = engine(campus_listing());
    let recent = engine
        .update_filters(|filters| filters.sort_by = Some(SortKey::MostRecent))
        .expect("recent")
        .to_vec();
    let mut older = engine
        .update_filters(|filters| filters.sort_by = Some(SortKey::MostOlder))
        .expect("older")
        .to_vec();
    older.reverse();
    assert_eq!(ids(&recent), ids(&older));
}

#[test]
fn rejected_range_leaves_view_and_raises_alert() {
    let mut engine = engine(campus_listing());
    engine
        .update_filters(|filters| filters.complaint_type = Some(ComplaintType::Electricity))
        .expect("type filter");
    let before = engine.view().to_vec();

    let result = engine.update_filters(|filters| {
        filters.start_date = Some(date(2024, 6, 1));
        filters.end_date = Some(date(2024, 5, 1));
    });

    assert!(result.is_err());
    assert_eq!(engine.view(), before.as_slice());
    assert_eq!(engine.alerts(), &[UserAlert::InvalidDateRange]);
}

#[test]
fn export_row_count_matches_view() {
    let mut engine = engine(campus_listing());
    engine
        .update_filters(|filters| filters.status = Some(ComplaintStatus::Pending))
        .expect("status filter");

    let document = engine
        .export(date(2024, 6, 1).and_hms_opt(8, 30, 0).unwrap())
        .expect("export");
    assert_eq!(document.row_count(), engine.view().len());

    let mut lines = document.body.lines();
    assert_eq!(lines.next(), Some("Complaint Report"));
    assert_eq!(lines.next(), Some("Date of Generation: 6/1/2024 8:30:00 AM"));
    assert_eq!(lines.next(), Some("Generated by: warden"));
    assert_eq!(lines.next(), Some("Status: Pending"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(
        lines.next(),
        Some("Complaint Type,Location,Status,Date,Details")
    );
}

#[test]
fn export_round_trips_through_csv_reader() {
    let mut listing = two_plumbing_complaints();
    listing[0].details = "Tap leaks, \"urgently\"\nsecond line".to_string();
    let engine = engine(listing);

    let document = engine
        .export(date(2024, 6, 1).and_hms_opt(8, 30, 0).unwrap())
        .expect("export");
    let table = document
        .body
        .split_once("\n\n")
        .map(|(_, table)| table.to_string())
        .expect("blank separator present");

    let mut reader = csv::Reader::from_reader(table.as_bytes());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Complaint Type", "Location", "Status", "Date", "Details"]
    );
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows.len(), 2);
    assert_eq!(document.row_count(), engine.view().len());
    assert_eq!(&rows[0][4], "Tap leaks, \"urgently\"\nsecond line");
    assert_eq!(&rows[1][2], "Resolved");
}

#[test]
fn reserved_status_code_renders_and_exports_as_pending() {
    let engine = engine(campus_listing());
    let view = engine.render();
    let reserved = view
        .cards
        .iter()
        .find(|card| card.id == 13)
        .expect("reserved status card");
    assert_eq!(reserved.status_label, "Pending");

    let document = engine
        .export(date(2024, 6, 1).and_hms_opt(8, 30, 0).unwrap())
        .expect("export");
    assert!(document.body.contains("Dustbin,NR2,Pending,3/9/2024,details for 13"));
}
