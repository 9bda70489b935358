use chrono::{DateTime, Duration, TimeZone, Utc};
use commtrack_core::status::{latest_communication, next_due_as_of};
use commtrack_core::{compute_due_status, Communication, CommunicationType, Company, DueStatus};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn comm_days_ago(company_id: &str, days: i64) -> Communication {
    Communication::new(company_id, CommunicationType::Email, now() - Duration::days(days))
}

#[test]
fn company_without_history_is_no_history() {
    let company = Company::with_id("c1", "Acme", 7);
    let other = vec![comm_days_ago("c2", 30)];

    let due = compute_due_status(&company, &other, now());
    assert_eq!(due.status, DueStatus::NoHistory);
    assert_eq!(due.last_communication_date, None);
    assert_eq!(due.next_due_date, None);
}

#[test]
fn periodicity_seven_classifies_eight_seven_and_two_days_ago() {
    let company = Company::with_id("c1", "Acme", 7);

    let overdue = compute_due_status(&company, &[comm_days_ago("c1", 8)], now());
    assert_eq!(overdue.status, DueStatus::Overdue);

    let due_today = compute_due_status(&company, &[comm_days_ago("c1", 7)], now());
    assert_eq!(due_today.status, DueStatus::DueToday);

    let upcoming = compute_due_status(&company, &[comm_days_ago("c1", 2)], now());
    assert_eq!(upcoming.status, DueStatus::Upcoming);
}

#[test]
fn most_recent_communication_drives_next_due() {
    let company = Company::with_id("c1", "Acme", 7);
    let comms = vec![comm_days_ago("c1", 5), comm_days_ago("c1", 10)];

    let due = compute_due_status(&company, &comms, now());
    assert_eq!(due.last_communication_date, Some(now() - Duration::days(5)));
    assert_eq!(due.next_due_date, Some(now() + Duration::days(2)));
    assert_eq!(due.status, DueStatus::Upcoming);
}

#[test]
fn next_due_is_exactly_last_plus_periodicity() {
    for periodicity in [1_u32, 7, 14, 30, 365] {
        let company = Company::with_id("c1", "Acme", periodicity);
        let last = Utc.with_ymd_and_hms(2024, 3, 9, 23, 45, 10).unwrap();
        let comms = vec![Communication::new("c1", CommunicationType::PhoneCall, last)];

        let due = compute_due_status(&company, &comms, now());
        assert_eq!(
            due.next_due_date,
            Some(last + Duration::days(i64::from(periodicity)))
        );
    }
}

#[test]
fn equal_dates_pick_latest_insertion() {
    let company = Company::with_id("c1", "Acme", 7);
    let date = now() - Duration::days(1);
    let first = Communication::new("c1", CommunicationType::Email, date);
    let second = Communication::new("c1", CommunicationType::PhoneCall, date);
    let comms = vec![first, second.clone()];

    let latest = latest_communication(&company, &comms).unwrap();
    assert_eq!(latest.id, second.id);
}

#[test]
fn due_today_holds_for_whole_calendar_day() {
    let company = Company::with_id("c1", "Acme", 1);
    let comms = vec![Communication::new(
        "c1",
        CommunicationType::Email,
        Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap(),
    )];

    let early = Utc.with_ymd_and_hms(2024, 3, 15, 0, 1, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
    assert_eq!(compute_due_status(&company, &comms, early).status, DueStatus::DueToday);
    assert_eq!(compute_due_status(&company, &comms, late).status, DueStatus::DueToday);
}

#[test]
fn next_due_as_of_ignores_later_communications() {
    let company = Company::with_id("c1", "Acme", 7);
    let comms = vec![comm_days_ago("c1", 20), comm_days_ago("c1", 1)];
    let day = (now() - Duration::days(10)).date_naive();

    let next_due = next_due_as_of(&company, &comms, day).unwrap();
    assert_eq!(next_due, now() - Duration::days(13));
    assert_eq!(next_due_as_of(&company, &comms, (now() - Duration::days(30)).date_naive()), None);
}

#[test]
fn periodicity_past_calendar_range_stays_upcoming() {
    let company = Company::with_id("c1", "Acme", u32::MAX);
    let comms = vec![Communication::new("c1", CommunicationType::Email, now())];

    let due = compute_due_status(&company, &comms, now());
    assert_eq!(due.status, DueStatus::Upcoming);
    assert_eq!(due.last_communication_date, Some(now()));
    assert_eq!(due.next_due_date, None);
    assert_eq!(next_due_as_of(&company, &comms, now().date_naive()), None);
}
