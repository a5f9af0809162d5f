use crate::domain::model::{Entry, Ingredient, Recipe, RequiredItem};
use crate::utils::error::{CookbookError, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;

const TYPE_FIELD: &str = "type";
const NAME_FIELD: &str = "name";
const COOK_TIME_FIELDS: [&str; 2] = ["cookTime", "prepTime"];
const REQUIRED_ITEMS_FIELDS: [&str; 2] = ["requiredItems", "requirements"];

/// Turns an untyped `/entry` payload into a typed [`Entry`].
///
/// Only the shape of the payload is checked here. Name uniqueness across
/// the cookbook is enforced by the registry on insert.
pub fn entry_from_payload(payload: &Value) -> Result<Entry> {
    let fields = payload
        .as_object()
        .ok_or(CookbookError::InvalidPayloadError)?;

    match fields.get(TYPE_FIELD).and_then(Value::as_str) {
        Some("ingredient") => {
            let prep_time = cook_time(fields)?;
            let name = entry_name(fields)?;
            Ok(Entry::Ingredient(Ingredient { name, prep_time }))
        }
        Some("recipe") => {
            let required_items = required_items(fields)?;
            let name = entry_name(fields)?;
            Ok(Entry::Recipe(Recipe {
                name,
                required_items,
            }))
        }
        other => Err(CookbookError::InvalidTypeError {
            found: other
                .map(str::to_string)
                .or_else(|| fields.get(TYPE_FIELD).map(Value::to_string)),
        }),
    }
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| fields.get(*key))
}

fn entry_name(fields: &Map<String, Value>) -> Result<String> {
    match fields.get(NAME_FIELD).and_then(Value::as_str) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(CookbookError::InvalidNameError),
    }
}

fn cook_time(fields: &Map<String, Value>) -> Result<u64> {
    let value = first_present(fields, &COOK_TIME_FIELDS).ok_or_else(|| {
        CookbookError::InvalidCookTimeError {
            reason: "cookTime is missing".to_string(),
        }
    })?;

    if let Some(time) = value.as_u64() {
        return Ok(time);
    }

    let reason = match value.as_i64() {
        Some(_) => "cookTime must be greater than or equal to 0",
        None => "cookTime is not an integer",
    };
    Err(CookbookError::InvalidCookTimeError {
        reason: reason.to_string(),
    })
}

fn required_items(fields: &Map<String, Value>) -> Result<Vec<RequiredItem>> {
    let items = first_present(fields, &REQUIRED_ITEMS_FIELDS)
        .ok_or_else(|| invalid_item("the requiredItems list is missing"))?
        .as_array()
        .ok_or_else(|| invalid_item("requiredItems is not a list"))?;

    let mut seen = HashSet::new();
    let mut required = Vec::with_capacity(items.len());

    for item in items {
        let item = item
            .as_object()
            .ok_or_else(|| invalid_item("every required item must be an object"))?;

        let name = item
            .get(NAME_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_item("a required item name is not a string"))?;

        let quantity = item.get("quantity").ok_or_else(|| {
            invalid_item(&format!("required item '{}' has no quantity", name))
        })?;
        let quantity = match quantity.as_u64() {
            Some(quantity) => quantity,
            None if quantity.is_i64() => {
                return Err(invalid_item(&format!(
                    "required item '{}' has a negative quantity",
                    name
                )))
            }
            None => {
                return Err(invalid_item(&format!(
                    "required item '{}' has a quantity which is not an integer",
                    name
                )))
            }
        };

        if !seen.insert(name) {
            return Err(CookbookError::DuplicateRequiredItemError {
                name: name.to_string(),
            });
        }

        required.push(RequiredItem {
            name: name.to_string(),
            quantity,
        });
    }

    Ok(required)
}

fn invalid_item(reason: &str) -> CookbookError {
    CookbookError::InvalidRequiredItemError {
        reason: reason.to_string(),
    }
}
