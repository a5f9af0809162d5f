use crate::core::registry::Registry;
use crate::domain::model::{Entry, IngredientAmount, Recipe, RecipeSummary};
use crate::utils::error::{CookbookError, Result};
use std::collections::{BTreeMap, HashSet};

/// Base ingredient name to total quantity.
pub type BaseIngredients = BTreeMap<String, u64>;

/// Resolves `recipe_name` down to base ingredients and totals its cook time.
pub fn summarize(registry: &Registry, recipe_name: &str) -> Result<RecipeSummary> {
    let recipe = registry
        .lookup(recipe_name)
        .and_then(Entry::as_recipe)
        .ok_or_else(|| CookbookError::RecipeNotFoundError {
            name: recipe_name.to_string(),
        })?;

    let base = expand(registry, recipe, 1)?;
    let cook_time = total_cook_time(registry, recipe_name, &base)?;

    tracing::debug!(
        "Summarized '{}': {} base ingredients, cook time {}",
        recipe_name,
        base.len(),
        cook_time
    );

    Ok(RecipeSummary {
        name: recipe_name.to_string(),
        cook_time,
        ingredients: base
            .into_iter()
            .map(|(name, quantity)| IngredientAmount { name, quantity })
            .collect(),
    })
}

/// Flattens `recipe`, with every requirement multiplied by `scale`.
///
/// Nesting is walked with an explicit stack of frames, so recipe depth is
/// bounded by heap, not by the thread stack.
pub fn expand<'a>(registry: &'a Registry, recipe: &'a Recipe, scale: u64) -> Result<BaseIngredients> {
    let mut base = BaseIngredients::new();
    let mut path = ExpansionPath::default();
    path.push(recipe, scale);

    while let Some(frame) = path.frames.last_mut() {
        let current = frame.recipe;
        let Some(item) = current.required_items.get(frame.next) else {
            path.pop();
            continue;
        };
        frame.next += 1;
        let scale = frame.scale;

        let entry = registry.lookup(&item.name).ok_or_else(|| {
            CookbookError::UnresolvedReferenceError {
                recipe: current.name.clone(),
                missing: item.name.clone(),
            }
        })?;

        let quantity = item.quantity.checked_mul(scale).ok_or_else(|| {
            CookbookError::QuantityOverflowError {
                recipe: current.name.clone(),
            }
        })?;

        match entry {
            Entry::Ingredient(ingredient) => {
                let total = base.entry(ingredient.name.clone()).or_insert(0);
                *total = total.checked_add(quantity).ok_or_else(|| {
                    CookbookError::QuantityOverflowError {
                        recipe: current.name.clone(),
                    }
                })?;
            }
            Entry::Recipe(sub_recipe) => {
                if path.contains(&sub_recipe.name) {
                    return Err(path.cycle_error(&sub_recipe.name));
                }
                path.push(sub_recipe, quantity);
            }
        }
    }

    Ok(base)
}

/// Ingredients with no registry entry contribute nothing.
fn total_cook_time(registry: &Registry, recipe_name: &str, base: &BaseIngredients) -> Result<u64> {
    base.iter().try_fold(0u64, |total, (name, quantity)| {
        let prep_time = registry
            .lookup(name)
            .and_then(Entry::as_ingredient)
            .map_or(0, |ingredient| ingredient.prep_time);
        quantity
            .checked_mul(prep_time)
            .and_then(|time| total.checked_add(time))
            .ok_or_else(|| CookbookError::QuantityOverflowError {
                recipe: recipe_name.to_string(),
            })
    })
}

struct Frame<'a> {
    recipe: &'a Recipe,
    scale: u64,
    // Index of the next requirement to resolve.
    next: usize,
}

/// Recipes currently being expanded, root first. Revisiting one is a cycle.
#[derive(Default)]
struct ExpansionPath<'a> {
    frames: Vec<Frame<'a>>,
    names: HashSet<&'a str>,
}

impl<'a> ExpansionPath<'a> {
    fn push(&mut self, recipe: &'a Recipe, scale: u64) {
        self.names.insert(&recipe.name);
        self.frames.push(Frame {
            recipe,
            scale,
            next: 0,
        });
    }

    fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.names.remove(frame.recipe.name.as_str());
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn cycle_error(&self, name: &str) -> CookbookError {
        let start = self
            .frames
            .iter()
            .position(|frame| frame.recipe.name == name)
            .unwrap_or(0);
        let mut cycle: Vec<String> = self.frames[start..]
            .iter()
            .map(|frame| frame.recipe.name.clone())
            .collect();
        cycle.push(name.to_string());

        CookbookError::CyclicRecipeError {
            recipe: name.to_string(),
            cycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Ingredient, RequiredItem};

    fn ingredient(name: &str, prep_time: u64) -> Entry {
        Entry::Ingredient(Ingredient {
            name: name.to_string(),
            prep_time,
        })
    }

    fn recipe(name: &str, items: &[(&str, u64)]) -> Entry {
        Entry::Recipe(Recipe {
            name: name.to_string(),
            required_items: items
                .iter()
                .map(|(name, quantity)| RequiredItem {
                    name: name.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        })
    }

    fn registry_with(entries: Vec<Entry>) -> Registry {
        let mut registry = Registry::new();
        for entry in entries {
            registry.insert(entry).unwrap();
        }
        registry
    }

    fn cake_registry() -> Registry {
        registry_with(vec![
            ingredient("Egg", 2),
            ingredient("Flour", 1),
            recipe("Dough", &[("Flour", 2)]),
            recipe("Cake", &[("Dough", 1), ("Egg", 3)]),
        ])
    }

    #[test]
    fn test_summarize_cake() {
        let summary = summarize(&cake_registry(), "Cake").unwrap();

        assert_eq!(summary.name, "Cake");
        assert_eq!(summary.cook_time, 8);
        assert_eq!(summary.quantity_of("Flour"), Some(2));
        assert_eq!(summary.quantity_of("Egg"), Some(3));
        assert_eq!(summary.ingredients.len(), 2);
    }

    #[test]
    fn test_nested_quantities_multiply() {
        let registry = registry_with(vec![
            ingredient("Beef", 5),
            ingredient("Egg", 3),
            ingredient("Pasta", 2),
            recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
            recipe("Spaghetti", &[("Meatball", 3), ("Pasta", 1)]),
        ]);

        let summary = summarize(&registry, "Spaghetti").unwrap();

        assert_eq!(summary.quantity_of("Beef"), Some(6));
        assert_eq!(summary.quantity_of("Egg"), Some(3));
        assert_eq!(summary.quantity_of("Pasta"), Some(1));
        assert_eq!(summary.cook_time, 6 * 5 + 3 * 3 + 2);
    }

    #[test]
    fn test_same_ingredient_via_two_branches_is_summed() {
        let registry = registry_with(vec![
            ingredient("Egg", 1),
            recipe("Batter", &[("Egg", 2)]),
            recipe("Glaze", &[("Egg", 1)]),
            recipe("Donut", &[("Batter", 2), ("Glaze", 1), ("Egg", 1)]),
        ]);

        let summary = summarize(&registry, "Donut").unwrap();
        assert_eq!(summary.quantity_of("Egg"), Some(6));
        assert_eq!(summary.cook_time, 6);
    }

    #[test]
    fn test_shared_sub_recipe_is_not_a_cycle() {
        let registry = registry_with(vec![
            ingredient("Flour", 1),
            recipe("Dough", &[("Flour", 1)]),
            recipe("Base", &[("Dough", 1)]),
            recipe("Pizza", &[("Dough", 1), ("Base", 1)]),
        ]);

        let summary = summarize(&registry, "Pizza").unwrap();
        assert_eq!(summary.quantity_of("Flour"), Some(2));
    }

    #[test]
    fn test_empty_recipe_has_no_ingredients() {
        let registry = registry_with(vec![recipe("Air", &[])]);

        let summary = summarize(&registry, "Air").unwrap();
        assert!(summary.ingredients.is_empty());
        assert_eq!(summary.cook_time, 0);
    }

    #[test]
    fn test_summarize_unknown_or_ingredient_is_not_found() {
        let registry = cake_registry();

        for name in ["Pie", "Egg", "cake"] {
            let err = summarize(&registry, name).unwrap_err();
            assert_eq!(err.kind(), "RecipeNotFoundError", "name: {}", name);
        }
    }

    #[test]
    fn test_missing_reference_detected_in_any_position() {
        let registry = registry_with(vec![
            ingredient("Egg", 1),
            ingredient("Milk", 1),
            recipe("Custard", &[("Egg", 1), ("Vanilla", 1), ("Milk", 1)]),
        ]);

        let err = summarize(&registry, "Custard").unwrap_err();
        assert!(matches!(
            err,
            CookbookError::UnresolvedReferenceError { ref recipe, ref missing }
                if recipe == "Custard" && missing == "Vanilla"
        ));
    }

    #[test]
    fn test_missing_reference_in_sub_recipe_names_sub_recipe() {
        let registry = registry_with(vec![
            recipe("Sauce", &[("Tomato", 2)]),
            recipe("Pasta Dish", &[("Sauce", 1)]),
        ]);

        let err = summarize(&registry, "Pasta Dish").unwrap_err();
        assert!(matches!(
            err,
            CookbookError::UnresolvedReferenceError { ref recipe, ref missing }
                if recipe == "Sauce" && missing == "Tomato"
        ));
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let registry = registry_with(vec![recipe("Ouroboros", &[("Ouroboros", 1)])]);

        let err = summarize(&registry, "Ouroboros").unwrap_err();
        assert!(matches!(
            err,
            CookbookError::CyclicRecipeError { ref cycle, .. }
                if cycle == &vec!["Ouroboros".to_string(), "Ouroboros".to_string()]
        ));
    }

    #[test]
    fn test_transitive_cycle_reports_path() {
        let registry = registry_with(vec![
            ingredient("Egg", 1),
            recipe("Chicken", &[("Egg", 1), ("Omelette", 1)]),
            recipe("Omelette", &[("Chicken", 1)]),
            recipe("Brunch", &[("Omelette", 1)]),
        ]);

        let err = summarize(&registry, "Brunch").unwrap_err();
        match err {
            CookbookError::CyclicRecipeError { recipe, cycle } => {
                assert_eq!(recipe, "Omelette");
                assert_eq!(cycle, vec!["Omelette", "Chicken", "Omelette"]);
            }
            other => panic!("expected cycle error, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_scales_quantities() {
        let registry = cake_registry();
        let cake = registry.lookup("Cake").and_then(Entry::as_recipe).unwrap();

        let base = expand(&registry, cake, 4).unwrap();
        assert_eq!(base.get("Flour"), Some(&8));
        assert_eq!(base.get("Egg"), Some(&12));
    }

    #[test]
    fn test_overflow_is_reported() {
        let registry = registry_with(vec![
            ingredient("Salt", 1),
            recipe("Pinch", &[("Salt", u64::MAX)]),
            recipe("Mountain", &[("Pinch", 2)]),
        ]);

        let err = summarize(&registry, "Mountain").unwrap_err();
        assert_eq!(err.kind(), "QuantityOverflowError");
    }

    #[test]
    fn test_zero_prep_time_ingredient_still_listed() {
        let registry = registry_with(vec![
            ingredient("Water", 0),
            recipe("Ice", &[("Water", 3)]),
        ]);

        let summary = summarize(&registry, "Ice").unwrap();
        assert_eq!(summary.quantity_of("Water"), Some(3));
        assert_eq!(summary.cook_time, 0);
    }

    fn deep_chain(depth: usize) -> Registry {
        let mut registry = Registry::new();
        registry.insert(ingredient("Base", 1)).unwrap();
        let mut below = "Base".to_string();
        for level in 0..depth {
            let name = format!("Layer {}", level);
            registry.insert(recipe(&name, &[(below.as_str(), 1)])).unwrap();
            below = name;
        }
        registry
    }

    #[test]
    fn test_deep_recipe_chain_does_not_exhaust_stack() {
        let registry = deep_chain(10_000);

        let summary = summarize(&registry, "Layer 9999").unwrap();
        assert_eq!(summary.quantity_of("Base"), Some(1));
        assert_eq!(summary.cook_time, 1);
    }

    #[test]
    fn test_deep_cycle_is_reported() {
        let mut registry = deep_chain(10_000);
        registry
            .insert(recipe("Top", &[("Layer 9999", 1), ("Top", 1)]))
            .unwrap();

        let err = summarize(&registry, "Top").unwrap_err();
        assert!(matches!(
            err,
            CookbookError::CyclicRecipeError { ref cycle, .. }
                if cycle == &vec!["Top".to_string(), "Top".to_string()]
        ));
    }
}
