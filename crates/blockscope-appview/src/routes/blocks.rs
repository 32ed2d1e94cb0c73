use axum::extract::{Path, State};
use axum::Json;
use blockscope_enrichment::normalize_identifier;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::BlocksResponse;

/// List the accounts blocking `identifier` (a handle or DID)
pub async fn get_blocks(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<BlocksResponse>, AppError> {
    let identifier = normalize_identifier(&identifier);
    if identifier.is_empty() {
        return Err(AppError::BadRequest("identifier is required".into()));
    }

    let result = state.pipeline.run(identifier).await?;

    Ok(Json(BlocksResponse::from(&result)))
}
