use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ViewRevisionQuery {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewRevisionResponse {
    pub path: String,
    pub revision: u64,
}
