use tracing::info;

use crate::structures::{NetworkConfig, NetworkGraph};

pub fn build_network(config: &NetworkConfig) -> NetworkGraph {
    let mut graph = NetworkGraph::new();

    for station in &config.stations {
        graph.add_station(station.id, &station.name);
    }
    for route in &config.routes {
        graph.add_route(
            route.from,
            route.to,
            route.time,
            route.cost,
            route.is_bidirectional(),
        );
    }

    info!(
        stations = graph.station_count(),
        routes = config.routes.len(),
        "network built"
    );
    graph
}
