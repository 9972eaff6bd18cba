use anyhow::Result;
use reply_assistant::intelligence::style_learner::{StyleLearner, StyleRefresh};
use reply_assistant::storage::ProfileStore;

/// `profile show` — print the stored profile document.
pub fn show() -> Result<()> {
    let config = super::bootstrap();
    let store = super::profile_store(&config);
    match store.load() {
        Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
        None => println!("No style profile yet ({})", store.path().display()),
    }
    Ok(())
}

/// `profile rebuild` — recompute from the feedback log and persist.
pub fn rebuild() -> Result<()> {
    let config = super::bootstrap();
    let feedback = super::feedback_store(&config);
    let mut profiles = super::profile_store(&config);
    let mut learner = StyleLearner::new(config.style.clone(), config.locale);

    match learner.refresh(&feedback, &mut profiles)? {
        StyleRefresh::Disabled => println!("Style learning is disabled in config"),
        StyleRefresh::Insufficient { records } => println!(
            "Not enough feedback: {} of {} records",
            records, config.style.min_feedback
        ),
        StyleRefresh::Updated { sample_count } => {
            println!("Style profile rebuilt from {} samples", sample_count);
            if let Some(profile) = learner.profile() {
                println!("{}", profile.instruction);
            }
        }
        StyleRefresh::Restored { found } => println!(
            "Feedback log unreadable; {}",
            if found { "kept stored profile" } else { "no stored profile" }
        ),
    }
    Ok(())
}
