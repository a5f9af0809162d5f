use crate::core::entry::entry_from_payload;
use crate::core::registry::Registry;
use crate::core::summary;
use crate::domain::model::{Entry, RecipeSummary};
use crate::utils::error::Result;
use serde_json::Value;
use std::path::Path;
use tokio::sync::RwLock;

/// Process-wide cookbook shared by all request handlers.
#[derive(Debug, Default)]
pub struct Cookbook {
    registry: RwLock<Registry>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `payload` and stores the resulting entry.
    ///
    /// The duplicate-name check and the insert happen under one write lock;
    /// a rejected payload never touches the registry.
    pub async fn create_entry(&self, payload: &Value) -> Result<Entry> {
        let entry = entry_from_payload(payload)?;
        let mut registry = self.registry.write().await;
        registry.insert(entry.clone())?;

        tracing::info!("Added {} '{}'", entry_kind(&entry), entry.name());
        Ok(entry)
    }

    pub async fn summarize(&self, recipe_name: &str) -> Result<RecipeSummary> {
        let registry = self.registry.read().await;
        summary::summarize(&registry, recipe_name)
    }

    pub async fn lookup(&self, name: &str) -> Option<Entry> {
        self.registry.read().await.lookup(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.registry.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }

    /// Loads a JSON array of entry payloads, in order, through the same
    /// validation as `/entry`. Stops at the first rejected entry.
    pub async fn load_seed_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let payloads: Vec<Value> = serde_json::from_str(&content)?;

        for (index, payload) in payloads.iter().enumerate() {
            self.create_entry(payload).await.map_err(|e| {
                tracing::error!("Seed entry #{} rejected: {}", index, e);
                e
            })?;
        }

        tracing::info!(
            "🌱 Seeded {} entries from {}",
            payloads.len(),
            path.as_ref().display()
        );
        Ok(payloads.len())
    }
}

fn entry_kind(entry: &Entry) -> &'static str {
    match entry {
        Entry::Ingredient(_) => "ingredient",
        Entry::Recipe(_) => "recipe",
    }
}

impl From<Registry> for Cookbook {
    fn from(registry: Registry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }
}
