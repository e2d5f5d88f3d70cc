//! JSON test vector loader for record decoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    #[serde(default)]
    pub allow_unknown_fields: bool,
    pub body: BodyData,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    #[serde(default)]
    pub contains: Option<String>,
    /// Text the client-facing message must not leak.
    #[serde(default)]
    pub excludes: Option<String>,
}

/// Request body, either raw text (to express malformed or concatenated JSON)
/// or a JSON value serialized as-is.
#[derive(Debug, Deserialize)]
#[serde(tag = "encoding", content = "data", rename_all = "lowercase")]
pub enum BodyData {
    Raw(String),
    Json(serde_json::Value),
}

impl BodyData {
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            BodyData::Raw(s) => s.as_bytes().to_vec(),
            BodyData::Json(v) => serde_json::to_vec(v).expect("vector body must serialize"),
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = std::fs::read_to_string(format!("tests/vectors/{name}"))
        .unwrap_or_else(|e| panic!("missing vector {name}: {e}"));
    serde_json::from_str(&s).unwrap_or_else(|e| panic!("bad vector {name}: {e}"))
}
