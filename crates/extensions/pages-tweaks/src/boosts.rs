//! Readable boost durations in the platinum store.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

const HOURS_PER_YEAR: u64 = 8_736;
const HOURS_PER_WEEK: u64 = 168;
const HOURS_PER_DAY: u64 = 24;

static IMG_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img[^>]*>").expect("static pattern"));

static ONMOUSEOVER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"onmouseover="([^"]*)""#).expect("static pattern"));

static RAW_HOURS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+) hour\(s\)").expect("static pattern"));

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Break a raw hour count into `N years, N weeks, N days, N hours`,
/// omitting zero components.
pub fn format_boost_hours(total_hours: u64) -> String {
    let mut parts = Vec::new();
    let mut hours = total_hours;
    for (unit, name) in [
        (HOURS_PER_YEAR, "year"),
        (HOURS_PER_WEEK, "week"),
        (HOURS_PER_DAY, "day"),
    ] {
        let n = hours / unit;
        if n > 0 {
            parts.push(plural(n, name));
            hours %= unit;
        }
    }
    if hours > 0 || parts.is_empty() {
        parts.push(plural(hours, "hour"));
    }
    parts.join(", ")
}

/// Rewrites the `1234 hour(s)` remaining-time blurb in boost icon tooltips
/// into the year/week/day breakdown.
pub struct BoostTimeFormat;

#[async_trait]
impl PageHandler for BoostTimeFormat {
    fn id(&self) -> &str {
        "boost_time_format"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        for tag in IMG_TAG_RE.find_iter(ctx.page().html()) {
            let tag = tag.as_str();
            if !tag.contains("Boost") {
                continue;
            }
            let Some(mouseover) = ONMOUSEOVER_RE.captures(tag) else {
                continue;
            };
            let original = &mouseover[1];
            let Some(raw) = RAW_HOURS_RE.captures(original) else {
                continue;
            };
            let Ok(hours) = raw[1].parse::<u64>() else {
                continue;
            };

            let formatted = RAW_HOURS_RE
                .replace(original, format_boost_hours(hours).as_str())
                .into_owned();
            ctx.emit(DomPatch::SetAttribute {
                target: format!(r#"img[onmouseover="{original}"]"#),
                name: "onmouseover".to_string(),
                value: formatted,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "boosts_tests.rs"]
mod tests;
