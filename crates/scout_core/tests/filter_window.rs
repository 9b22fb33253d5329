use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use scout_core::{filter_recent, DateWindowFilter, JobRecord, ScrapeWindow};

fn init_logging() {
    scout_logging::initialize_for_tests();
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
}

fn posted_days_ago(title: &str, days: u64) -> JobRecord {
    let date = now().date_naive().checked_sub_days(Days::new(days)).unwrap();
    JobRecord::new(title, "Acme", date, format!("https://example.com/{title}"))
}

#[test]
fn record_ten_days_old_depends_on_window() {
    init_logging();
    let record = posted_days_ago("ten", 10);

    let wide = filter_recent(vec![record.clone()], ScrapeWindow::days(14), now());
    assert_eq!(wide, vec![record.clone()]);

    let narrow = filter_recent(vec![record], ScrapeWindow::days(5), now());
    assert!(narrow.is_empty());
}

#[test]
fn boundary_day_is_excluded_after_midnight() {
    init_logging();
    let filter = DateWindowFilter::new(ScrapeWindow::days(7), now());
    assert_eq!(
        filter.cutoff(),
        Utc.with_ymd_and_hms(2024, 3, 8, 14, 30, 0).unwrap()
    );
    assert!(filter.retains(&posted_days_ago("inside", 6)));
    assert!(!filter.retains(&posted_days_ago("edge", 7)));
    assert!(!filter.retains(&posted_days_ago("stale", 8)));
}

#[test]
fn thirty_day_window_drops_posting_from_thirty_days_before_noon() {
    init_logging();
    let noon = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let edge = JobRecord::new(
        "edge",
        "Acme",
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
        "https://example.com/edge",
    );
    assert!(filter_recent(vec![edge], ScrapeWindow::days(30), noon).is_empty());
}

#[test]
fn boundary_day_is_kept_when_run_at_midnight() {
    init_logging();
    let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let edge = JobRecord::new(
        "edge",
        "Acme",
        NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        "https://example.com/edge",
    );
    let filter = DateWindowFilter::new(ScrapeWindow::days(7), midnight);
    assert!(filter.retains(&edge));
}

#[test]
fn future_dates_are_retained() {
    init_logging();
    let future = JobRecord::new(
        "future",
        "Acme",
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        "https://example.com/future",
    );
    let kept = filter_recent(vec![future.clone()], ScrapeWindow::days(0), now());
    assert_eq!(kept, vec![future]);
}

#[test]
fn filter_preserves_input_order_of_survivors() {
    init_logging();
    let records = vec![
        posted_days_ago("a", 1),
        posted_days_ago("old", 40),
        posted_days_ago("b", 3),
        posted_days_ago("older", 90),
        posted_days_ago("c", 0),
    ];
    let kept = filter_recent(records, ScrapeWindow::default(), now());
    let titles: Vec<_> = kept.iter().map(JobRecord::title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn empty_input_yields_empty_output() {
    init_logging();
    assert!(filter_recent(Vec::new(), ScrapeWindow::days(3), now()).is_empty());
}

#[test]
fn huge_window_keeps_everything() {
    init_logging();
    let ancient = JobRecord::new(
        "ancient",
        "Acme",
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        "https://example.com/ancient",
    );
    let kept = filter_recent(vec![ancient], ScrapeWindow::days(u32::MAX), now());
    assert_eq!(kept.len(), 1);
}

#[test]
fn posted_label_is_iso_date() {
    let record = JobRecord::new(
        "t",
        "c",
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        "https://example.com",
    );
    assert_eq!(record.posted_label(), "2024-01-05");
}
