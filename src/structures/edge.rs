#[derive(Debug, Clone)]
pub struct Edge {
    pub destination: u32,
    pub time: u32,
    pub cost: u32,
}
