// Tool catalog advertised to the assistant
use serde::Serialize;
use serde_json::{json, Value};

pub const GET_COCKTAIL_RECIPE: &str = "get_cocktail_recipe";
pub const SUGGEST_BY_INGREDIENTS: &str = "suggest_cocktails_by_ingredients";
pub const SUGGEST_BY_PREFERENCE: &str = "suggest_cocktails_by_preference";

pub const SERVER_NAME: &str = "CocktailRAGAssistant";

/// Conversational policy handed to the assistant on `initialize`
pub const SERVER_INSTRUCTIONS: &str = "\
You are a bartender assistant. Your sole task is to answer user questions
EXCLUSIVELY using the provided tools.

RULES:
1. NEVER answer based on your own built-in knowledge.
2. ALWAYS analyze the user's query and match it to one of the available tools.
3. ALWAYS ask the user for permission (\"May I use tool X to...\") before executing a tool.
4. If the user asks for a recipe or ingredients, you MUST use a tool.
5. If no tool matches the query, reply: \"Sorry, I cannot help with this query as I do not have the appropriate tool.\"
6. Always respond in English.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

fn string_list_schema(property: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            property: {
                "type": "array",
                "items": { "type": "string" },
                "description": description,
            }
        },
        "required": [property],
    })
}

/// All tools, in the order they are listed
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_COCKTAIL_RECIPE,
            description: "Gets the recipe and details for one specific cocktail by its name. \
                          Use this tool if the user asks for a specific cocktail recipe.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "cocktail_name": {
                        "type": "string",
                        "description": "The name of the cocktail to search for (e.g., \"Mojito\", \"Old Fashioned\").",
                    }
                },
                "required": ["cocktail_name"],
            }),
        },
        ToolDefinition {
            name: SUGGEST_BY_INGREDIENTS,
            description: "Suggests cocktails based on a list of ingredients the user HAS.",
            input_schema: string_list_schema(
                "ingredients",
                "A list of ingredient names (e.g., [\"Rum\", \"Lime\", \"Mint\", \"Sugar\"]).",
            ),
        },
        ToolDefinition {
            name: SUGGEST_BY_PREFERENCE,
            description: "Suggest cocktails matching a list of tags or preferences \
                          (e.g., \"Classic\", \"Sour\"). The cocktail must match ALL provided preferences.",
            input_schema: string_list_schema(
                "preferences",
                "A list of tags (e.g., \"Classic\", \"IBA\").",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions() {
        let tools = tool_definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![GET_COCKTAIL_RECIPE, SUGGEST_BY_INGREDIENTS, SUGGEST_BY_PREFERENCE]
        );

        let value = serde_json::to_value(&tools[1]).unwrap();
        assert_eq!(value["inputSchema"]["required"][0], "ingredients");
        assert_eq!(
            value["inputSchema"]["properties"]["ingredients"]["type"],
            "array"
        );
    }
}
