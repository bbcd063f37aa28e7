use serde::Deserialize;

/// Body of a position update. `id` is optional; the adapter falls back to
/// the caller's network origin when it is absent or empty.
#[derive(Deserialize)]
pub(super) struct UpdateRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
