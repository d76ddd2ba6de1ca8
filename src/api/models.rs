use serde::{Deserialize, Serialize};

/// GET /api/recipes query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeParams {
    #[serde(default)]
    pub name: String,
}

/// POST /api/suggest/ingredients body
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientsRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// POST /api/suggest/preferences body
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesRequest {
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Catalog statistics
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_cocktails: usize,
    pub distinct_tags: usize,
    pub distinct_ingredients: usize,
    pub distinct_categories: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub catalog: String,
    pub cocktails: usize,
    pub dataset: String,
}
