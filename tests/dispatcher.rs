use std::io::Cursor;

use cinema_booking::config::{AppConfig, CatalogConfig, Config};
use cinema_booking::controllers::{MenuChoice, Session};
use cinema_booking::AppState;

fn test_config() -> Config {
    Config {
        app: AppConfig {
            name: "Test Cinema".to_string(),
            rust_log: "cinema_booking=debug".to_string(),
            color: false,
        },
        catalog: CatalogConfig::default(),
    }
}

fn run_script(script: &str) -> (AppState, String) {
    let state = AppState::new(test_config()).expect("default catalog must seed");
    let mut session = Session::new(state, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    session.run().expect("in-memory I/O cannot fail");

    let (state, output) = session.into_parts();
    (state, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn lists_screenings_in_showtime_order() {
    let (_, output) = run_script("1\n0\n");

    let hello = output.find("  Hello, Love, Again - 1:00 PM").expect("first screening listed");
    let moana = output.find("  Moana 2 - 2:30 PM").expect("second screening listed");
    let wicked = output.find("  The Wicked - 5:00 PM").expect("third screening listed");
    assert!(hello < moana && moana < wicked);
    assert!(output.contains("Thank you for visiting Test Cinema. Goodbye!"));
}

#[test]
fn seat_operations_require_a_selection() {
    let (_, output) = run_script("3\n4\n0\n");
    assert_eq!(output.matches("Please select a screening first.").count(), 2);
}

#[test]
fn book_and_cancel_through_the_menu() {
    let script = "2\nMoana 2\n4\n4\n4\n4\n5\n4\n5\n4\n3\n0\n";
    let (state, output) = run_script(script);

    assert!(output.contains("You selected: Moana 2"));
    assert!(output.contains("will start at 2:30 PM."));
    assert!(output.contains("Seat 4 successfully booked."));
    assert!(output.contains("Seat 4 is already booked."));
    assert!(output.contains("Booking for Seat 4 successfully canceled and seat deleted."));
    assert!(output.contains("Seat 4 does not exist."));
    assert!(output.contains("  Seat 3 (Available)"));
    assert!(!output.contains("  Seat 4 ("));

    let seats = state.catalog.get("Moana 2").expect("screening exists");
    assert_eq!(seats.len(), 9);
    assert_eq!(state.current.as_deref(), Some("Moana 2"));
}

#[test]
fn unknown_screening_clears_selection() {
    let (state, output) = run_script("2\nMoana 2\n2\nDune\n0\n");

    assert!(output.contains("Invalid screening selection. Please try again."));
    assert!(state.current.is_none());
}

#[test]
fn priority_requests_are_served_oldest_first() {
    let script = "6\nA\n10\n6\nB\n30\n6\nC\n20\n8\n7\n7\n7\n7\n0\n";
    let (state, output) = run_script(script);

    let listed = output.find("Pending requests:").expect("requests listed");
    let b = output.find("Processing request for B (Age: 30)").expect("B served");
    let c = output.find("Processing request for C (Age: 20)").expect("C served");
    let a = output.find("Processing request for A (Age: 10)").expect("A served");
    assert!(listed < b && b < c && c < a);
    assert!(output.contains("No pending requests."));
    assert!(state.requests.is_empty());
}

#[test]
fn invalid_input_is_reported_and_menu_continues() {
    let (_, output) = run_script("banana\n42\n6\nZed\nold\n2\nThe Wicked\n4\nten\n0\n");

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert!(output.contains("Invalid age."));
    assert!(output.contains("Invalid seat number."));
    assert!(output.contains("Thank you for visiting Test Cinema. Goodbye!"));
}

#[test]
fn added_screening_joins_schedule_and_catalog() {
    let script = "11\nDune\n9:15 AM\n11\nDune\n10:00\n12\n12\n0\n";
    let (state, output) = run_script(script);

    assert!(output.contains("Screening 'Dune' scheduled at 9:15 AM with 10 seats."));
    assert!(output.contains("Screening Dune already exists."));
    assert!(output.contains("Now showing: Dune (9:15 AM)"));
    assert!(output.contains("Now showing: Hello, Love, Again (1:00 PM)"));
    assert!(state.catalog.contains("Dune"));
    assert_eq!(state.schedule.len(), 2);
}

#[test]
fn seats_can_be_added_and_deleted() {
    let script = "2\nThe Wicked\n9\n11\n9\n11\n10\n1\n10\n1\n0\n";
    let (state, output) = run_script(script);

    assert!(output.contains("Seat 11 successfully added."));
    assert!(output.contains("Seat 11 already exists."));
    assert!(output.contains("Seat 1 successfully deleted."));
    assert!(output.contains("Seat 1 does not exist."));

    let ids: Vec<u32> = state
        .catalog
        .get("The Wicked")
        .expect("screening exists")
        .iter()
        .map(|seat| seat.id)
        .collect();
    assert_eq!(ids, (2..=11).collect::<Vec<_>>());
}

#[test]
fn end_of_input_exits_cleanly() {
    let (_, output) = run_script("1\n");
    assert!(output.contains("Goodbye!"));
}

#[test]
fn menu_numbers_map_to_choices() {
    assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::BookSeat));
    assert_eq!(MenuChoice::parse("12"), Some(MenuChoice::StartNextScreening));
    assert_eq!(MenuChoice::parse("13"), None);
    assert_eq!(MenuChoice::parse("-1"), None);
}
