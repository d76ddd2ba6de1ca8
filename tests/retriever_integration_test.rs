use cocktail_rag::{Catalog, LoadOutcome, MatchType, Retriever};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cocktail_dataset.json")
}

fn retriever() -> Retriever {
    let content = include_str!("fixtures/cocktail_dataset.json");
    Retriever::new(Catalog::from_json_str(content).expect("Fixture should parse"))
}

#[test]
fn test_load_fixture_from_disk() {
    let outcome = Catalog::load(fixture_path()).expect("Fixture should be readable");
    assert!(outcome.is_loaded());

    let retriever = Retriever::load(fixture_path()).unwrap();
    assert_eq!(retriever.len(), 10);
    assert!(retriever.is_loaded());
}

#[test]
fn test_missing_dataset_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cocktail_dataset.json");

    assert!(matches!(
        Catalog::load(&path).unwrap(),
        LoadOutcome::Failed(_)
    ));

    let retriever = Retriever::load(&path).unwrap();
    assert!(!retriever.is_loaded());
    assert!(retriever.find_by_name("Mojito").is_none());
    assert!(retriever.find_by_ingredients(&["Rum"]).is_empty());
    assert!(retriever.find_by_tags(&["Classic"]).is_empty());
}

#[test]
fn test_find_by_name() {
    let retriever = retriever();

    let martini = retriever.find_by_name("martini").unwrap();
    assert_eq!(martini.name, "Martini");
    assert_eq!(
        martini.ingredients,
        vec!["1 2/3 oz Gin", "1/3 oz Dry Vermouth", "1 Olive"]
    );

    assert_eq!(retriever.find_by_name("libre").unwrap().name, "Cuba Libre");
    assert_eq!(retriever.find_by_name("SOUR").unwrap().name, "Whiskey Sour");
    assert!(retriever.find_by_name("Negroni").is_none());
}

#[test]
fn test_simplified_recipe_formatting() {
    let mojito = retriever().find_by_name("Mojito").unwrap();

    assert_eq!(mojito.glass.as_deref(), Some("Highball glass"));
    assert_eq!(
        mojito.ingredients,
        vec![
            "2-3 oz Light rum",
            "Juice of 1 Lime",
            "2 tsp Sugar",
            "2-4 Mint",
            "Soda water"
        ]
    );

    let pink = retriever().find_by_name("Pink Lemonade").unwrap();
    assert!(pink.tags.is_empty());
}

#[test]
fn test_rum_lime_sugar() {
    let result = retriever().find_by_ingredients(&["Rum", "Lime", "Sugar"]);

    assert!(result.perfect.is_empty());

    let names: Vec<&str> = result
        .partial
        .iter()
        .map(|m| m.cocktail.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Mojito", "Daiquiri", "Bacardi Cocktail", "Cuba Libre", "Margarita"]
    );

    let counts: Vec<usize> = result.partial.iter().map(|m| m.match_count).collect();
    assert_eq!(counts, vec![3, 3, 2, 2, 1]);

    let mojito = &result.partial[0];
    assert!(mojito
        .matched_ingredients
        .contains(&"rum (as light rum)".to_string()));
    assert_eq!(mojito.total_ingredients_in_cocktail, 5);

    let cuba_libre = &result.partial[3];
    assert_eq!(cuba_libre.matched_ingredients, vec!["lime", "rum"]);
}

#[test]
fn test_perfect_and_partial_buckets() {
    let result = retriever().find_by_ingredients(&["Light Rum", "Lime Juice"]);

    let perfect: Vec<&str> = result
        .perfect
        .iter()
        .map(|m| m.cocktail.name.as_str())
        .collect();
    assert_eq!(perfect, vec!["Mojito", "Daiquiri", "Bacardi Cocktail"]);
    assert!(result
        .perfect
        .iter()
        .all(|m| m.match_type == MatchType::Perfect && m.match_count == 2));

    let partial: Vec<&str> = result
        .partial
        .iter()
        .map(|m| m.cocktail.name.as_str())
        .collect();
    assert_eq!(partial, vec!["Margarita", "Cuba Libre"]);
}

#[test]
fn test_lemon_family_stays_distinct() {
    let retriever = retriever();

    let lemon = retriever.find_by_ingredients(&["lemon juice"]);
    assert_eq!(lemon.perfect.len(), 1);
    assert_eq!(lemon.perfect[0].cocktail.name, "Whiskey Sour");

    let lemonade = retriever.find_by_ingredients(&["Lemonade"]);
    assert_eq!(lemonade.perfect.len(), 1);
    assert_eq!(lemonade.perfect[0].cocktail.name, "Pink Lemonade");
}

#[test]
fn test_find_by_tags() {
    let retriever = retriever();

    let classic: Vec<String> = retriever
        .find_by_tags(&["classic"])
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        classic,
        vec![
            "Daiquiri",
            "Martini",
            "Old Fashioned",
            "Whiskey Sour",
            "Bacardi Cocktail"
        ]
    );

    let sour: Vec<String> = retriever
        .find_by_tags(&["Classic", "Sour"])
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(sour, vec!["Whiskey Sour", "Bacardi Cocktail"]);

    assert!(retriever.find_by_tags(&["Classic", "Tiki"]).is_empty());
}
