//! Multi-attack guard for combat pages.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{DisableTrigger, DomPatch, HandlerError, PageContext, PageHandler};

/// Every attack-ish button label seen in the wild. Mashing any of them can
/// trip the game's multi-attack error page.
const ATTACK_LABELS: [&str; 4] = ["Attack", "Attack Target", "Attack Again", "Hunt Again"];

static INPUT_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<input[^>]*>").expect("static pattern"));

static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"type="([^"]*)""#).expect("static pattern"));

/// Disables attack buttons after their first activation. Submit buttons are
/// disabled when their form submits, plain buttons after their own click
/// handler runs; disabling a submit button before submission would drop it
/// from the form data.
pub struct MultiAttackGuard;

#[async_trait]
impl PageHandler for MultiAttackGuard {
    fn id(&self) -> &str {
        "multi_attack_guard"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        for tag in INPUT_TAG_RE.find_iter(ctx.page().html()) {
            let tag = tag.as_str();
            let Some(label) = ATTACK_LABELS
                .iter()
                .find(|label| tag.contains(&format!(r#"value="{label}""#)))
            else {
                continue;
            };

            let trigger = match TYPE_RE.captures(tag).map(|caps| caps[1].to_string()) {
                Some(t) if t == "submit" => DisableTrigger::Submit,
                Some(t) if t == "button" => DisableTrigger::Click,
                _ => continue,
            };

            ctx.emit(DomPatch::DisableAfterClick {
                target: format!(r#"input[value="{label}"]"#),
                trigger,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "combat_tests.rs"]
mod tests;
