// Tool layer: turns retriever results into assistant-facing envelopes

pub mod definitions;
pub mod models;

pub use definitions::{tool_definitions, ToolDefinition};
pub use models::{PartialMatchSummary, PerfectMatchSummary, ToolPayload, ToolResponse};

use crate::error::{Error, Result};
use crate::retriever::Retriever;
use crate::utils::{join_display, validation};
use models::{IngredientsArgs, PreferencesArgs, RecipeArgs};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const DATABASE_NOT_LOADED: &str = "Server Error: The cocktail database is not loaded.";

/// Dispatches tool calls against a shared retriever
#[derive(Debug, Clone)]
pub struct ToolService {
    retriever: Arc<Retriever>,
    max_list_items: usize,
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| Error::Validation(format!("Invalid arguments for {tool}: {e}")))
}

impl ToolService {
    pub fn new(retriever: Arc<Retriever>, max_list_items: usize) -> Self {
        Self {
            retriever,
            max_list_items,
        }
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    /// Invoke a tool by name with JSON arguments
    pub fn call(&self, name: &str, arguments: Value) -> Result<ToolResponse> {
        match name {
            definitions::GET_COCKTAIL_RECIPE => {
                let args: RecipeArgs = parse_args(name, arguments)?;
                self.get_cocktail_recipe(&args.cocktail_name)
            }
            definitions::SUGGEST_BY_INGREDIENTS => {
                let args: IngredientsArgs = parse_args(name, arguments)?;
                self.suggest_by_ingredients(&args.ingredients)
            }
            definitions::SUGGEST_BY_PREFERENCE => {
                let args: PreferencesArgs = parse_args(name, arguments)?;
                self.suggest_by_preference(&args.preferences)
            }
            _ => Err(Error::NotFound(format!("Unknown tool: {name}"))),
        }
    }

    pub fn get_cocktail_recipe(&self, cocktail_name: &str) -> Result<ToolResponse> {
        if !self.retriever.is_loaded() {
            return Ok(ToolResponse::error(DATABASE_NOT_LOADED));
        }

        info!("Tool [get_cocktail_recipe] called with query: {}", cocktail_name);

        Ok(match self.retriever.find_by_name(&cocktail_name) {
            Some(data) => ToolResponse::Success(ToolPayload::Recipe { data }),
            None => ToolResponse::error(format!(
                "Sorry, I could not find a cocktail named '{cocktail_name}'."
            )),
        })
    }

    pub fn suggest_by_ingredients(&self, ingredients: &[String]) -> Result<ToolResponse> {
        if !self.retriever.is_loaded() {
            return Ok(ToolResponse::error(DATABASE_NOT_LOADED));
        }

        let ingredients = validation::clean_list("ingredients", ingredients, self.max_list_items)?;
        info!(
            "Tool [suggest_cocktails_by_ingredients] called with ingredients: {:?}",
            ingredients
        );

        let results = self.retriever.find_by_ingredients(ingredients.as_slice());
        if results.is_empty() {
            return Ok(ToolResponse::error(format!(
                "Sorry, I couldn't find any cocktails matching the ingredients: {}.",
                join_display(&ingredients)
            )));
        }

        Ok(ToolResponse::Success(ToolPayload::SuggestionByIngredient {
            perfect_matches: results.perfect.iter().map(Into::into).collect(),
            partial_matches: results.partial.iter().map(Into::into).collect(),
        }))
    }

    pub fn suggest_by_preference(&self, preferences: &[String]) -> Result<ToolResponse> {
        if !self.retriever.is_loaded() {
            return Ok(ToolResponse::error(DATABASE_NOT_LOADED));
        }

        let preferences = validation::clean_list("preferences", preferences, self.max_list_items)?;
        info!(
            "Tool [suggest_cocktails_by_preference] called with tags: {:?}",
            preferences
        );

        let data = self.retriever.find_by_tags(preferences.as_slice());
        if data.is_empty() {
            return Ok(ToolResponse::error(format!(
                "Sorry, I couldn't find any cocktails matching the preferences: {}.",
                join_display(&preferences)
            )));
        }

        Ok(ToolResponse::Success(ToolPayload::SuggestionByPreference {
            count: data.len(),
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    const GET_RECIPE: &str = definitions::GET_COCKTAIL_RECIPE;
    const SUGGEST_BY_PREF: &str = definitions::SUGGEST_BY_PREFERENCE;

    const DATASET: &str = r#"[
        {
            "name": "Mojito",
            "category": "Cocktail",
            "glass": "Highball glass",
            "tags": ["Classic", "IBA"],
            "ingredients": [
                {"name": "Light Rum", "measure": "2 oz"},
                {"name": "Lime", "measure": "1"},
                {"name": "Sugar", "measure": "2 tsp"},
                {"name": "Mint", "measure": null}
            ]
        },
        {
            "name": "Daiquiri",
            "tags": ["Classic", "Sour"],
            "ingredients": [
                {"name": "Rum", "measure": "1 1/2 oz"},
                {"name": "Lime Juice", "measure": "1/2 oz"},
                {"name": "Powdered Sugar", "measure": "1 tsp"}
            ]
        }
    ]"#;

    fn service() -> ToolService {
        let catalog = Catalog::from_json_str(DATASET).unwrap();
        ToolService::new(Arc::new(Retriever::new(catalog)), 10)
    }

    fn unloaded() -> ToolService {
        ToolService::new(Arc::new(Retriever::empty()), 10)
    }

    #[test]
    fn test_get_recipe() {
        let response = service()
            .call(GET_RECIPE, json!({"cocktail_name": "mojito"}))
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["type"], "recipe");
        assert_eq!(value["data"]["name"], "Mojito");
        assert_eq!(value["data"]["ingredients"][3], "Mint");
    }

    #[test]
    fn test_get_recipe_not_found() {
        let response = service().get_cocktail_recipe("Negroni").unwrap();
        assert_eq!(
            response,
            ToolResponse::error("Sorry, I could not find a cocktail named 'Negroni'.")
        );
    }

    #[test]
    fn test_suggest_by_ingredients() {
        let ingredients = vec!["Rum".to_string(), "Lime".to_string(), "Sugar".to_string()];
        let response = service().suggest_by_ingredients(&ingredients).unwrap();

        match response {
            ToolResponse::Success(ToolPayload::SuggestionByIngredient {
                perfect_matches,
                partial_matches,
            }) => {
                assert_eq!(perfect_matches.len(), 1);
                assert_eq!(perfect_matches[0].name, "Daiquiri");
                assert_eq!(
                    perfect_matches[0].all_ingredients_in_recipe,
                    vec!["1 1/2 oz Rum", "1/2 oz Lime Juice", "1 tsp Powdered Sugar"]
                );

                assert_eq!(partial_matches.len(), 1);
                assert_eq!(partial_matches[0].name, "Mojito");
                assert_eq!(partial_matches[0].missing_ingredients_count, 0);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_suggest_by_ingredients_none() {
        let response = service()
            .suggest_by_ingredients(&["Gin".to_string(), "Tonic".to_string()])
            .unwrap();
        assert_eq!(
            response,
            ToolResponse::error(
                "Sorry, I couldn't find any cocktails matching the ingredients: Gin, Tonic."
            )
        );
    }

    #[test]
    fn test_suggest_by_preference() {
        let response = service()
            .call(SUGGEST_BY_PREF, json!({"preferences": ["classic"]}))
            .unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "suggestion_by_preference");
        assert_eq!(value["count"], 2);

        let response = service()
            .suggest_by_preference(&["Classic".to_string(), "Tiki".to_string()])
            .unwrap();
        assert!(!response.is_success());
    }

    #[test]
    fn test_database_not_loaded() {
        let service = unloaded();
        let expected = ToolResponse::error(DATABASE_NOT_LOADED);

        assert_eq!(service.get_cocktail_recipe("Mojito").unwrap(), expected);
        assert_eq!(
            service.suggest_by_ingredients(&["Rum".to_string()]).unwrap(),
            expected
        );
        assert_eq!(
            service.suggest_by_preference(&["Classic".to_string()]).unwrap(),
            expected
        );
    }

    #[test]
    fn test_bad_calls() {
        let service = service();
        assert!(matches!(
            service.call("make_drink", json!({})),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            service.call(GET_RECIPE, json!({"name": "Mojito"})),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_get_recipe_name_is_not_trimmed() {
        let service = service();
        assert_eq!(
            service.get_cocktail_recipe(" Mojito").unwrap(),
            ToolResponse::error("Sorry, I could not find a cocktail named ' Mojito'.")
        );

        // Empty query is a substring of every name
        let value = serde_json::to_value(service.get_cocktail_recipe("").unwrap()).unwrap();
        assert_eq!(value["data"]["name"], "Mojito");
    }
}
