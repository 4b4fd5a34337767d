use std::time::Duration;

use super::FlightSearch;
use crate::models::Flight;
use crate::search::SortBy;

const DELAY: Duration = Duration::from_millis(150);

fn flight(id: &str, number: &str, airport: &str) -> Flight {
    Flight {
        flight_identifier: id.to_string(),
        flight_number: number.to_string(),
        airport: airport.to_string(),
        date: "2022-11-27".to_string(),
        expected_time: "10:00".to_string(),
        original_time: "10:00".to_string(),
        url: format!("/en/departures/flight/{id}/"),
        score: "50.0".to_string(),
    }
}

fn fixture() -> Vec<Flight> {
    vec![
        flight("lon1", "BA123", "London Heathrow"),
        flight("lon2", "KL456", "London Gatwick"),
        flight("par1", "AF789", "Paris Charles de Gaulle"),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_result_published_after_delay() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);
    let mut rx = engine.results();

    engine.request("London", SortBy::ByDate);

    // Nothing is published while the timer is still pending.
    tokio::time::sleep(DELAY / 2).await;
    assert!(!rx.has_changed().unwrap());

    tokio::time::sleep(DELAY).await;
    assert!(rx.has_changed().unwrap());
    let result = rx.borrow_and_update().clone();
    assert_eq!(result.flights.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_to_final_query() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);
    let mut rx = engine.results();

    // Rapid keystrokes within one debounce window.
    for query in ["Lon", "Lond", "Londo", "London"] {
        engine.request(query, SortBy::ByDate);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!rx.has_changed().unwrap());
    }

    tokio::time::sleep(DELAY * 2).await;
    assert!(rx.has_changed().unwrap());
    let result = rx.borrow_and_update().clone();
    assert_eq!(result.flights.len(), 2);
    assert!(result
        .flights
        .iter()
        .all(|f| f.airport.starts_with("London")));

    // Exactly one result for the burst; the superseded timers never fire.
    tokio::time::sleep(DELAY * 4).await;
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_short_query_clears_synchronously() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);

    engine.request("London", SortBy::ByDate);
    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(engine.latest().flights.len(), 2);

    // Below the threshold: cleared immediately, no timer involved.
    let mut rx = engine.results();
    rx.borrow_and_update();
    engine.request("zz", SortBy::ByDate);
    assert!(rx.has_changed().unwrap());
    assert!(engine.latest().is_empty());
    assert!(engine.latest().by_date.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_query_clears_synchronously() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);

    engine.request("London", SortBy::ByDate);
    tokio::time::sleep(DELAY * 2).await;
    assert!(!engine.latest().is_empty());

    engine.request("", SortBy::ByDate);
    assert!(engine.latest().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_short_query_cancels_pending_timer() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);
    let mut rx = engine.results();

    engine.request("London", SortBy::ByDate);
    tokio::time::sleep(DELAY / 2).await;
    engine.request("zz", SortBy::ByDate);

    // The synchronous clear is the only publication; the cancelled timer
    // must not surface its result afterwards.
    rx.borrow_and_update();
    tokio::time::sleep(DELAY * 4).await;
    assert!(!rx.has_changed().unwrap());
    assert!(engine.latest().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_pending_is_idempotent() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);
    let mut rx = engine.results();

    engine.request("London", SortBy::ByDate);
    engine.cancel_pending();
    engine.cancel_pending();

    tokio::time::sleep(DELAY * 4).await;
    assert!(!rx.has_changed().unwrap());
    assert!(engine.latest().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sort_mode_change_supersedes_pending_request() {
    let engine = FlightSearch::with_delay(fixture(), DELAY);
    let mut rx = engine.results();

    engine.request("London", SortBy::ByDate);
    tokio::time::sleep(DELAY / 2).await;
    engine.request("London", SortBy::ByExpectedTime);

    tokio::time::sleep(DELAY * 2).await;
    assert!(rx.has_changed().unwrap());
    let result = rx.borrow_and_update().clone();
    // Expected-time ordering carries no grouping, proving the second request
    // is the one that landed.
    assert_eq!(result.flights.len(), 2);
    assert!(result.by_date.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_rapid_requests_never_surface_stale_results() {
    let engine = FlightSearch::with_delay(fixture(), Duration::from_millis(1));
    let mut rx = engine.results();

    // Back-to-back requests leave almost no gap between the superseded
    // timer and its replacement; across many rounds on a multi-threaded
    // runtime, a superseded timer that slipped past its abort must still
    // never overwrite the newer result.
    for _ in 0..50 {
        engine.request("Paris", SortBy::ByDate);
        engine.request("London", SortBy::ByDate);
        tokio::time::sleep(Duration::from_millis(20)).await;

        let result = rx.borrow_and_update().clone();
        assert_eq!(result.flights.len(), 2, "stale result was published");
        assert!(result
            .flights
            .iter()
            .all(|f| f.airport.starts_with("London")));
    }
}

#[tokio::test(start_paused = true)]
async fn test_date_sort_publishes_grouping() {
    let mut flights = fixture();
    flights.push(flight("lon3", "BA999", "London Heathrow"));
    flights[0].date = "2022-11-28".to_string();

    let engine = FlightSearch::with_delay(flights, DELAY);
    engine.request("London", SortBy::ByDate);
    tokio::time::sleep(DELAY * 2).await;

    let result = engine.latest();
    assert_eq!(result.flights.len(), 3);
    assert_eq!(result.by_date.len(), 2);
    let grouped: usize = result.by_date.values().map(Vec::len).sum();
    assert_eq!(grouped, result.flights.len());
}
