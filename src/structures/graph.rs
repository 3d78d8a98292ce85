use std::{cmp::Reverse, collections::HashMap};

use priority_queue::PriorityQueue;

use crate::structures::{Edge, Station};

/// Weight dimension used to evaluate a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Time,
    Cost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub path: Vec<u32>,
    pub total_weight: i64,
}

impl PathResult {
    pub fn unreachable() -> PathResult {
        PathResult {
            path: Vec::new(),
            total_weight: -1,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.total_weight >= 0
    }
}

pub struct NetworkGraph {
    stations: HashMap<u32, Station>,
    adjacency: HashMap<u32, Vec<Edge>>,
}

impl NetworkGraph {
    pub fn new() -> NetworkGraph {
        NetworkGraph {
            stations: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Last write wins on a duplicate id.
    pub fn add_station(&mut self, id: u32, name: &str) {
        self.stations.insert(
            id,
            Station {
                id,
                name: name.to_string(),
            },
        );
    }

    pub fn add_route(&mut self, src: u32, dest: u32, time: u32, cost: u32, bidirectional: bool) {
        self.insert_edge(src, dest, time, cost);
        if bidirectional {
            self.insert_edge(dest, src, time, cost);
        }
    }

    fn insert_edge(&mut self, from: u32, to: u32, time: u32, cost: u32) {
        let edges = self.adjacency.entry(from).or_default();

        // Skip parallel edges towards the same destination.
        if edges.iter().any(|e| e.destination == to) {
            return;
        }

        edges.push(Edge {
            destination: to,
            time,
            cost,
        });
    }

    pub fn get_station(&self, id: u32) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn all_stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = self.stations.values().cloned().collect();
        stations.sort_by_key(|s| s.id);
        stations
    }

    /// Dijkstra over the weight dimension picked by `metric`. Ids outside the
    /// station set yield the unreachable result rather than an error.
    pub fn find_shortest_path(&self, src: u32, dest: u32, metric: Metric) -> PathResult {
        if !self.stations.contains_key(&src) || !self.stations.contains_key(&dest) {
            return PathResult::unreachable();
        }

        let mut pq = PriorityQueue::<u32, Reverse<u64>>::new();
        let mut dist = HashMap::<u32, u64>::new();
        let mut parent = HashMap::<u32, u32>::new();

        dist.insert(src, 0);
        pq.push(src, Reverse(0));

        while let Some((u, Reverse(d))) = pq.pop() {
            // Stale entry, a better distance was already settled.
            if d > dist.get(&u).copied().unwrap_or(u64::MAX) {
                continue;
            }
            if u == dest {
                break;
            }

            if let Some(neighbors) = self.adjacency.get(&u) {
                for edge in neighbors {
                    let weight = match metric {
                        Metric::Time => edge.time as u64,
                        Metric::Cost => edge.cost as u64,
                    };
                    let candidate = d + weight;

                    if candidate < dist.get(&edge.destination).copied().unwrap_or(u64::MAX) {
                        dist.insert(edge.destination, candidate);
                        parent.insert(edge.destination, u);
                        pq.push(edge.destination, Reverse(candidate));
                    }
                }
            }
        }

        let total = match dist.get(&dest) {
            Some(total) => *total,
            None => return PathResult::unreachable(),
        };

        let mut path = vec![dest];
        let mut current = dest;
        while let Some(&previous) = parent.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        PathResult {
            path,
            total_weight: total as i64,
        }
    }
}
