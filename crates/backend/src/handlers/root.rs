use axum::Json;
use contracts::shared::api::ApiInfo;

/// GET /api/
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo::resort())
}
