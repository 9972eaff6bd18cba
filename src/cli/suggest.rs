use std::time::Duration;

use anyhow::{bail, Result};
use reply_assistant::engine::EngineEvent;

/// `suggest <text>` — one cycle against the configured model, no clipboard polling.
pub fn run(text: &str, no_style: bool) -> Result<()> {
    let mut config = super::bootstrap();
    if no_style {
        config.style.enabled = false;
    }
    let timeout = Duration::from_secs(u64::from(config.model.timeout_secs) + 5);
    let mut engine = super::build_engine(config);

    let mut events = engine.ingest(text);
    events.extend(engine.wait_for_generation(timeout));

    for event in &events {
        match event {
            EngineEvent::Rejected(verdict) => bail!("Message rejected: {}", verdict.as_str()),
            EngineEvent::SelfMessageIgnored => bail!("Message looks like your own, nothing to answer"),
            EngineEvent::MissingApiKey | EngineEvent::GenerationFailed { .. } => {
                bail!("{}", engine.status())
            }
            _ => {}
        }
    }

    if engine.state().is_generating() {
        bail!("Timed out after {}s", timeout.as_secs());
    }
    for (i, s) in engine.suggestions().iter().enumerate() {
        println!("{}. {}", i + 1, s);
    }
    Ok(())
}
