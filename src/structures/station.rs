use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
}
