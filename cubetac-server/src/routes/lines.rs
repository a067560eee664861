//! Line catalog endpoint
//!
//! Renderers fetch the catalogs once and use the indices to highlight
//! winning lines; the triples here are index-compatible with everything
//! the game endpoints return.

use axum::Json;
use cubetac_core::{Line, CROSS_LINES, LAYER_LINES};
use serde::Serialize;

#[derive(Serialize)]
pub struct LinesResponse {
    pub layer_lines: Vec<Vec<Line>>,
    pub cross_lines: Vec<Line>,
}

pub async fn get_lines() -> Json<LinesResponse> {
    Json(LinesResponse {
        layer_lines: LAYER_LINES.iter().map(|layer| layer.to_vec()).collect(),
        cross_lines: CROSS_LINES.to_vec(),
    })
}
