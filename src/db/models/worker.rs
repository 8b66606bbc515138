use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub area: String,
}

impl Worker {
    pub fn new(id: &str, name: &str, area: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            area: area.to_string(),
        }
    }
}
