use std::hash::{Hash, Hasher};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub id: u32,
    #[serde(rename = "name")]
    pub passenger_name: String,
    pub from: u32,
    pub to: u32,
    #[serde(rename = "timestamp")]
    pub submitted_at: i64,
    pub processed: bool,
}

// Identity is the booking id.
impl PartialEq for BookingRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BookingRequest {}

impl Hash for BookingRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
