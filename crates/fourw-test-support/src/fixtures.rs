//! Catalog documents used across the workspace's tests.
//!
//! Correct answers follow a pattern so assertions can name them without
//! parsing: scenario `n` answers `"who n"`, `"what n"`, and so on; story `n`
//! answers `"story who n"`, etc.

use serde_json::{Value, json};

fn scenario(n: u32) -> Value {
    json!({
        "id": n,
        "text": format!("Scenario {n}"),
        "who": format!("who {n}"),
        "what": format!("what {n}"),
        "when": format!("when {n}"),
        "why": format!("why {n}"),
        "incorrect": {
            "who": [format!("wrong who {n}a"), format!("wrong who {n}b")],
            "what": [format!("wrong what {n}")],
            "when": [format!("wrong when {n}")],
            "why": [format!("wrong why {n}")]
        }
    })
}

fn story(n: u32) -> Value {
    json!({
        "id": format!("story-{n}"),
        "text": format!("Story {n}"),
        "who": format!("story who {n}"),
        "what": format!("story what {n}"),
        "when": format!("story when {n}"),
        "why": format!("story why {n}")
    })
}

/// `scenarios` scenarios followed by `stories` distractor-less stories.
#[must_use]
pub fn catalog_json(scenarios: u32, stories: u32) -> String {
    json!({
        "scenarios": (1..=scenarios).map(scenario).collect::<Vec<_>>(),
        "stories": (1..=stories).map(story).collect::<Vec<_>>()
    })
    .to_string()
}

/// Two scenarios with distractors and no stories.
#[must_use]
pub fn two_scenarios_json() -> String {
    catalog_json(2, 0)
}

/// A single scenario with distractors and no stories.
#[must_use]
pub fn single_scenario_json() -> String {
    catalog_json(1, 0)
}

/// One scenario and one story, written as YAML.
#[must_use]
pub fn yaml_catalog() -> String {
    "\
scenarios:
  - id: 1
    text: Scenario 1
    who: who 1
    what: what 1
    when: when 1
    why: why 1
    incorrect:
      who: [wrong who 1a]
stories:
  - id: story-1
    text: Story 1
    who: story who 1
    what: story what 1
    when: story when 1
    why: story why 1
"
    .to_owned()
}
