use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
