//! First-run defaults: a small model registry and a starter tag list.
//!
//! Seeding only fills empty tables, so it is safe to call on every startup.

use crate::models::model::CreateModel;
use crate::repositories::{ModelRepo, TagRepo};
use crate::DbPool;

/// Models registered on first run: `(id, name, provider, context_window, max_output_tokens)`.
pub const DEFAULT_MODELS: &[(&str, &str, &str, i64, i64)] = &[
    ("gpt-4o", "GPT-4o", "OpenAI", 128_000, 4096),
    ("claude-3-sonnet", "Claude 3 Sonnet", "Anthropic", 200_000, 4096),
    ("gpt-4o-mini", "GPT-4o Mini", "OpenAI", 128_000, 4096),
    ("llama3-8b-8192", "Llama 3 8B", "Meta", 8192, 4096),
];

/// Tags available before the user creates any.
pub const DEFAULT_TAGS: &[&str] = &[
    "Writing",
    "Coding",
    "Productivity",
    "Research",
    "Education",
    "Business",
    "Marketing",
    "Data Analysis",
    "Design",
    "Personal",
    "Cooking",
    "Creativity",
];

/// How many rows [`seed_defaults`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub models: usize,
    pub tags: usize,
}

/// Insert the default models and tags into whichever tables are empty.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();
    let mut tx = crate::begin_write(pool).await?;

    if ModelRepo::count(&mut *tx).await? == 0 {
        for &(id, name, provider, context_window, max_output_tokens) in DEFAULT_MODELS {
            let input = CreateModel {
                name: name.to_string(),
                provider: provider.to_string(),
                context_window,
                max_output_tokens: Some(max_output_tokens),
                is_active: Some(true),
            };
            ModelRepo::create_with_id(&mut *tx, id, &input).await?;
            report.models += 1;
        }
    }

    if TagRepo::count(&mut *tx).await? == 0 {
        for name in DEFAULT_TAGS {
            TagRepo::create_or_get(&mut *tx, name).await?;
            report.tags += 1;
        }
    }

    tx.commit().await?;

    if report.models > 0 || report.tags > 0 {
        tracing::info!(models = report.models, tags = report.tags, "Seeded default data");
    }
    Ok(report)
}
