use std::cmp::Reverse;

use chrono::Utc;
use priority_queue::PriorityQueue;
use serde::Serialize;
use tracing::{info, warn};

use crate::structures::{BookingRequest, Metric, NetworkGraph};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub id: u32,
    pub name: String,
    pub from: u32,
    pub to: u32,
    pub fastest_time: i64,
    pub cheapest_cost: i64,
    pub fastest_path: Vec<u32>,
    pub cheapest_path: Vec<u32>,
}

#[derive(Debug)]
pub enum ProcessOutcome {
    Empty,
    NoRoute(BookingRequest),
    Confirmed(Confirmation),
}

pub struct BookingLedger {
    // Min-heap on (submitted_at, id), so the oldest request comes out first
    // and equal timestamps fall back to submission order.
    pending: PriorityQueue<BookingRequest, Reverse<(i64, u32)>>,
    completed: Vec<BookingRequest>,
    next_id: u32,
}

impl BookingLedger {
    pub fn new() -> BookingLedger {
        BookingLedger {
            pending: PriorityQueue::new(),
            completed: Vec::new(),
            next_id: 1,
        }
    }

    /// No validation of origin/destination here, that happens on processing.
    pub fn submit(&mut self, passenger_name: &str, from: u32, to: u32) -> u32 {
        self.enqueue(passenger_name, from, to, Utc::now().timestamp())
    }

    fn enqueue(&mut self, passenger_name: &str, from: u32, to: u32, submitted_at: i64) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let request = BookingRequest {
            id,
            passenger_name: passenger_name.to_string(),
            from,
            to,
            submitted_at,
            processed: false,
        };
        self.pending.push(request, Reverse((submitted_at, id)));

        info!(id, "added booking, waiting for confirmation");
        id
    }

    /// Dequeues the oldest pending request and resolves it against the
    /// network. An unroutable request is dropped, not re-queued.
    pub fn process_next(&mut self, graph: &NetworkGraph) -> ProcessOutcome {
        let mut request = match self.pending.pop() {
            Some((request, _)) => request,
            None => return ProcessOutcome::Empty,
        };

        let fastest = graph.find_shortest_path(request.from, request.to, Metric::Time);
        if !fastest.is_reachable() {
            warn!(id = request.id, "no route available, booking dropped");
            return ProcessOutcome::NoRoute(request);
        }
        let cheapest = graph.find_shortest_path(request.from, request.to, Metric::Cost);

        request.processed = true;
        self.completed.push(request.clone());
        info!(id = request.id, "booking confirmed");

        ProcessOutcome::Confirmed(Confirmation {
            id: request.id,
            name: request.passenger_name,
            from: request.from,
            to: request.to,
            fastest_time: fastest.total_weight,
            cheapest_cost: cheapest.total_weight,
            fastest_path: fastest.path,
            cheapest_path: cheapest.path,
        })
    }

    pub fn list_pending(&self) -> Vec<BookingRequest> {
        let mut pending: Vec<BookingRequest> =
            self.pending.iter().map(|(request, _)| request.clone()).collect();
        pending.sort_by_key(|r| (r.submitted_at, r.id));
        pending
    }

    pub fn list_completed(&self) -> &[BookingRequest] {
        &self.completed
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> NetworkGraph {
        let mut g = NetworkGraph::new();
        g.add_station(0, "Delhi");
        g.add_station(1, "Agra");
        g.add_station(2, "Jaipur");
        g.add_station(3, "Mumbai");
        g.add_station(4, "Pune");
        g.add_station(5, "Goa");

        g.add_route(0, 1, 120, 500, true);
        g.add_route(0, 2, 180, 700, true);
        g.add_route(1, 2, 150, 600, true);
        g.add_route(1, 3, 480, 1500, true);
        g.add_route(2, 3, 540, 1200, true);
        g.add_route(3, 4, 90, 300, true);
        g.add_route(3, 5, 360, 1000, true);
        g.add_route(4, 5, 270, 800, true);
        g
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        assert_eq!(ledger.submit("Asha", 0, 5), 1);
        assert_eq!(ledger.submit("Ravi", 1, 4), 2);
        ledger.process_next(&g);
        assert_eq!(ledger.submit("Meera", 2, 3), 3);
    }

    #[test]
    fn processes_oldest_first() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        ledger.enqueue("Late", 0, 5, 300);
        ledger.enqueue("Early", 1, 3, 100);
        ledger.enqueue("Middle", 2, 4, 200);

        match ledger.process_next(&g) {
            ProcessOutcome::Confirmed(c) => assert_eq!(c.name, "Early"),
            other => panic!("expected confirmation, got {other:?}"),
        }
        match ledger.process_next(&g) {
            ProcessOutcome::Confirmed(c) => assert_eq!(c.name, "Middle"),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn equal_timestamps_fall_back_to_submission_order() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        ledger.enqueue("First", 0, 1, 100);
        ledger.enqueue("Second", 0, 2, 100);
        ledger.enqueue("Third", 0, 3, 100);

        let names: Vec<String> = ledger
            .list_pending()
            .into_iter()
            .map(|r| r.passenger_name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);

        match ledger.process_next(&g) {
            ProcessOutcome::Confirmed(c) => assert_eq!(c.id, 1),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn empty_queue_changes_nothing() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        assert!(matches!(ledger.process_next(&g), ProcessOutcome::Empty));
        assert_eq!(ledger.pending_count(), 0);
        assert!(ledger.list_completed().is_empty());
        assert_eq!(ledger.submit("Asha", 0, 5), 1);
    }

    #[test]
    fn unroutable_booking_is_dropped() {
        let mut g = fixture();
        g.add_station(9, "Shimla");
        let mut ledger = BookingLedger::new();

        ledger.submit("Asha", 0, 9);

        match ledger.process_next(&g) {
            ProcessOutcome::NoRoute(request) => {
                assert_eq!(request.id, 1);
                assert!(!request.processed);
            }
            other => panic!("expected no route, got {other:?}"),
        }
        assert_eq!(ledger.pending_count(), 0);
        assert!(ledger.list_completed().is_empty());
    }

    #[test]
    fn confirmation_carries_both_plans() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        ledger.submit("Asha", 0, 5);

        let confirmation = match ledger.process_next(&g) {
            ProcessOutcome::Confirmed(c) => c,
            other => panic!("expected confirmation, got {other:?}"),
        };
        assert_eq!(confirmation.id, 1);
        assert_eq!(confirmation.name, "Asha");
        assert_eq!(confirmation.fastest_time, 960);
        assert_eq!(confirmation.cheapest_cost, 2900);
        assert_eq!(confirmation.fastest_path, vec![0, 1, 3, 5]);
        assert_eq!(confirmation.cheapest_path, vec![0, 2, 3, 5]);

        let completed = ledger.list_completed();
        assert_eq!(completed.len(), 1);
        assert!(completed[0].processed);
    }

    #[test]
    fn list_pending_does_not_drain() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        ledger.enqueue("B", 0, 5, 200);
        ledger.enqueue("A", 1, 3, 100);

        let ids: Vec<u32> = ledger.list_pending().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(ledger.pending_count(), 2);

        match ledger.process_next(&g) {
            ProcessOutcome::Confirmed(c) => assert_eq!(c.id, 2),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn completed_keeps_processing_order() {
        let g = fixture();
        let mut ledger = BookingLedger::new();

        ledger.enqueue("Second", 0, 5, 200);
        ledger.enqueue("First", 1, 3, 100);

        ledger.process_next(&g);
        ledger.process_next(&g);

        let names: Vec<&str> = ledger
            .list_completed()
            .iter()
            .map(|r| r.passenger_name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
