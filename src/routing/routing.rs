use serde::Serialize;

use crate::structures::{Metric, NetworkGraph};

pub struct RouteQuery {
    pub from: u32,
    pub to: u32,
}

/// Combined answer for one origin/destination pair. Either side is `-1` with
/// an empty path when the destination is unreachable under that metric.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub fastest_time: i64,
    pub cheapest_cost: i64,
    pub fastest_path: Vec<u32>,
    pub cheapest_path: Vec<u32>,
}

pub fn route(graph: &NetworkGraph, query: &RouteQuery) -> RoutePlan {
    let fastest = graph.find_shortest_path(query.from, query.to, Metric::Time);
    let cheapest = graph.find_shortest_path(query.from, query.to, Metric::Cost);

    RoutePlan {
        fastest_time: fastest.total_weight,
        cheapest_cost: cheapest.total_weight,
        fastest_path: fastest.path,
        cheapest_path: cheapest.path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_combines_both_metrics() {
        let mut g = NetworkGraph::new();
        g.add_station(0, "A");
        g.add_station(1, "B");
        g.add_station(2, "C");
        // Fast but expensive direct hop, slow but cheap detour.
        g.add_route(0, 2, 10, 900, true);
        g.add_route(0, 1, 50, 100, true);
        g.add_route(1, 2, 50, 100, true);

        let plan = route(&g, &RouteQuery { from: 0, to: 2 });
        assert_eq!(plan.fastest_time, 10);
        assert_eq!(plan.fastest_path, vec![0, 2]);
        assert_eq!(plan.cheapest_cost, 200);
        assert_eq!(plan.cheapest_path, vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_pair_yields_sentinels() {
        let mut g = NetworkGraph::new();
        g.add_station(0, "A");
        g.add_station(1, "B");

        let plan = route(&g, &RouteQuery { from: 0, to: 1 });
        assert_eq!(plan.fastest_time, -1);
        assert_eq!(plan.cheapest_cost, -1);
        assert!(plan.fastest_path.is_empty());
        assert!(plan.cheapest_path.is_empty());
    }
}
