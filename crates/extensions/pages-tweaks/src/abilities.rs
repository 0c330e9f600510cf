//! Pruning of fully trained abilities from the training select.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

static OPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<option[^>]*value="([^"]*)"[^>]*>([^<]*)</option>"#).expect("static pattern")
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));

/// An option like `Strength 10/10` is fully trained: exactly two numbers in
/// the label, and they match.
pub fn is_fully_trained(label: &str) -> bool {
    let numbers: Vec<&str> = NUMBER_RE.find_iter(label).map(|m| m.as_str()).collect();
    matches!(numbers.as_slice(), [current, max] if current == max)
}

/// Removes maxed-out abilities from the training selection so the list only
/// offers something left to train.
pub struct TrainedAbilityTrim;

#[async_trait]
impl PageHandler for TrainedAbilityTrim {
    fn id(&self) -> &str {
        "trained_ability_trim"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        for caps in OPTION_RE.captures_iter(ctx.page().html()) {
            if is_fully_trained(&caps[2]) {
                ctx.emit(DomPatch::RemoveNode {
                    target: format!(r#"option[value="{}"]"#, &caps[1]),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "abilities_tests.rs"]
mod tests;
