//! Thousands separators for profile exp counts.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

static EXP_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"title="([^"]*Exp :[^"]*)""#).expect("static pattern"));

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4,}").expect("static pattern"));

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Insert thousands separators into every digit run of `text`.
pub fn format_commas(text: &str) -> String {
    DIGIT_RUN_RE
        .replace_all(text, |caps: &Captures<'_>| group_digits(&caps[0]))
        .into_owned()
}

/// Rewrites exp bar titles like `Exp : 1234567 / 2345678` with comma
/// separators, mirroring the value into `alt` for consistency.
pub struct ExpCommaFormat;

#[async_trait]
impl PageHandler for ExpCommaFormat {
    fn id(&self) -> &str {
        "exp_comma_format"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        for caps in EXP_TITLE_RE.captures_iter(ctx.page().html()) {
            let original = &caps[1];
            let formatted = format_commas(original);
            if formatted == original {
                continue;
            }
            let target = format!(r#"img[title="{original}"]"#);
            ctx.emit(DomPatch::SetAttribute {
                target: target.clone(),
                name: "title".to_string(),
                value: formatted.clone(),
            });
            ctx.emit(DomPatch::SetAttribute {
                target,
                name: "alt".to_string(),
                value: formatted,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
