use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashSet;
use tracing::debug;

use crate::{
    api::models::*,
    catalog::Catalog,
    config::Settings,
    retriever::normalize_ingredient,
    tools::{tool_definitions, ToolDefinition, ToolResponse, ToolService},
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tools: ToolService,
    pub settings: Settings,
}

/// GET /api/recipes?name= - Look up one cocktail by name
pub async fn get_recipe(
    State(state): State<AppState>,
    Query(params): Query<RecipeParams>,
) -> Result<Json<ToolResponse>> {
    debug!("Recipe request: {:?}", params);

    Ok(Json(state.tools.get_cocktail_recipe(&params.name)?))
}

/// POST /api/suggest/ingredients - Suggest cocktails from available ingredients
pub async fn suggest_by_ingredients(
    State(state): State<AppState>,
    Json(request): Json<IngredientsRequest>,
) -> Result<Json<ToolResponse>> {
    debug!("Ingredient suggestion request: {:?}", request);

    Ok(Json(state.tools.suggest_by_ingredients(&request.ingredients)?))
}

/// POST /api/suggest/preferences - Suggest cocktails carrying all given tags
pub async fn suggest_by_preference(
    State(state): State<AppState>,
    Json(request): Json<PreferencesRequest>,
) -> Result<Json<ToolResponse>> {
    debug!("Preference suggestion request: {:?}", request);

    Ok(Json(state.tools.suggest_by_preference(&request.preferences)?))
}

/// GET /api/tools - List the tool catalog
pub async fn list_tools() -> Json<Vec<ToolDefinition>> {
    Json(tool_definitions())
}

/// Count distinct tags, normalized ingredients and categories in a catalog
pub fn catalog_stats(catalog: &Catalog) -> Stats {
    let mut tags = HashSet::new();
    let mut ingredients = HashSet::new();
    let mut categories = HashSet::new();

    for recipe in catalog {
        tags.extend(recipe.tags().iter().map(|t| t.to_lowercase()));
        ingredients.extend(
            recipe
                .ingredients()
                .iter()
                .map(|i| normalize_ingredient(&i.name)),
        );
        if let Some(category) = &recipe.category {
            categories.insert(category.to_lowercase());
        }
    }

    Stats {
        total_cocktails: catalog.len(),
        distinct_tags: tags.len(),
        distinct_ingredients: ingredients.len(),
        distinct_categories: categories.len(),
    }
}

/// GET /api/stats - Catalog statistics
pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    debug!("Get stats request");

    Json(catalog_stats(state.tools.retriever().catalog()))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let retriever = state.tools.retriever();
    let ready = retriever.is_loaded();

    Json(ReadinessResponse {
        ready,
        catalog: if ready { "ok" } else { "not loaded" }.to_string(),
        cocktails: retriever.len(),
        dataset: state.settings.dataset.path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_stats() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "Mojito", "category": "Cocktail", "tags": ["Classic"],
                 "ingredients": [{"name": "Light Rum"}, {"name": "Lime"}]},
                {"name": "Daiquiri", "category": "cocktail", "tags": ["classic", "Sour"],
                 "ingredients": [{"name": "Rum"}, {"name": "Lime Juice"}]}
            ]"#,
        )
        .unwrap();

        let stats = catalog_stats(&catalog);
        assert_eq!(stats.total_cocktails, 2);
        assert_eq!(stats.distinct_tags, 2);
        // light rum, lime, rum
        assert_eq!(stats.distinct_ingredients, 3);
        assert_eq!(stats.distinct_categories, 1);
    }
}
