use std::collections::HashMap;

use anyhow::{Context, Result};
use reply_assistant::storage::FeedbackStore;

/// `feedback stats` — record count, model breakdown, recent choices.
pub fn stats(recent: usize) -> Result<()> {
    let config = super::bootstrap();
    let store = super::feedback_store(&config);
    let records = store
        .read_all()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    println!("Feedback log: {}", store.path().display());
    println!("Records:      {:>5}", records.len());
    if records.is_empty() {
        return Ok(());
    }

    let with_context = records.iter().filter(|r| !r.context_messages.is_empty()).count();
    println!("With context: {:>5}", with_context);

    let mut by_model: HashMap<&str, usize> = HashMap::new();
    for r in &records {
        *by_model.entry(r.model.as_str()).or_default() += 1;
    }
    let mut models: Vec<_> = by_model.into_iter().collect();
    models.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    println!();
    println!("By model:");
    for (model, count) in models {
        println!("  {:<24} {:>5}", model, count);
    }

    if recent > 0 {
        println!();
        println!("Recent choices:");
        for r in records.iter().rev().take(recent) {
            println!("  {}  {}", r.timestamp, r.chosen);
        }
    }
    Ok(())
}
