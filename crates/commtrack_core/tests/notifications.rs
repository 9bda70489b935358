use chrono::{DateTime, Duration, TimeZone, Utc};
use commtrack_core::{aggregate_notifications, Communication, CommunicationType, Company};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

fn comm_days_ago(company_id: &str, days: i64) -> Communication {
    Communication::new(company_id, CommunicationType::LinkedInMessage, now() - Duration::days(days))
}

#[test]
fn companies_are_bucketed_in_collection_order() {
    let companies = vec![
        Company::with_id("a", "Alpha", 7),
        Company::with_id("b", "Beta", 7),
        Company::with_id("c", "Gamma", 7),
        Company::with_id("d", "Delta", 14),
        Company::with_id("e", "Epsilon", 7),
    ];
    let comms = vec![
        comm_days_ago("c", 9),
        comm_days_ago("a", 8),
        comm_days_ago("b", 7),
        comm_days_ago("d", 3),
        comm_days_ago("e", 7),
    ];

    let summary = aggregate_notifications(&companies, &comms, now());
    let overdue: Vec<&str> = summary.overdue.iter().map(|e| e.company_id.as_str()).collect();
    let due_today: Vec<&str> = summary.due_today.iter().map(|e| e.company_id.as_str()).collect();

    assert_eq!(overdue, ["a", "c"]);
    assert_eq!(due_today, ["b", "e"]);
    assert_eq!(summary.total_count(), 4);
    assert_eq!(summary.overdue[0].due_date, now() - Duration::days(1));
    assert_eq!(summary.overdue[0].company_name, "Alpha");
}

#[test]
fn companies_without_history_are_never_notified() {
    let companies = vec![Company::with_id("a", "Alpha", 1), Company::with_id("b", "Beta", 1)];
    let comms = vec![comm_days_ago("ghost", 100)];

    let summary = aggregate_notifications(&companies, &comms, now());
    assert!(summary.is_empty());
    assert_eq!(summary.total_count(), 0);
}

#[test]
fn future_dated_communication_is_upcoming() {
    let companies = vec![Company::with_id("a", "Alpha", 7)];
    let comms = vec![comm_days_ago("a", -3)];

    assert!(aggregate_notifications(&companies, &comms, now()).is_empty());
}
