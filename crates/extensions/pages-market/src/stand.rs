//! Sensible defaults for the market stand add-item form.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use lesuite_protocols::{DomPatch, HandlerError, KeyAction, PageContext, PageHandler};

static OPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<option[^>]*value="([^"]*)"[^>]*>([^<]*)</option>"#).expect("static pattern")
});

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)([cp]) each").expect("static pattern"));

/// Inventory options of the add-item select, in document order.
pub fn parse_item_options(html: &str) -> Vec<(String, String)> {
    OPTION_RE
        .captures_iter(html)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .collect()
}

/// Price and currency (`c` or `p`) of an item already listed on the stand.
///
/// Listings name the item in a `<font>` element with the `Nc each` blurb in
/// the same table, so the search window runs from the item name to the end
/// of its table.
pub fn listed_price_for(html: &str, item: &str) -> Option<(String, char)> {
    let needle = format!(">{item}</font>");
    let start = html.find(&needle)?;
    let window = &html[start..];
    let window = match window.find("</table>") {
        Some(end) => &window[..end],
        None => window,
    };
    let caps = PRICE_RE.captures(window)?;
    let currency = caps[2].chars().next()?;
    Some((caps[1].to_string(), currency))
}

/// Pre-fills the add-item form: selects the first real inventory item,
/// copies the price and currency from an existing listing of that item,
/// checks the add-all-at-this-price box, and binds `a` to the add button.
pub struct StandDefaults;

#[async_trait]
impl PageHandler for StandDefaults {
    fn id(&self) -> &str {
        "stand_defaults"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        let html = ctx.page().html();
        if !html.contains(r#"name="item""#) {
            return Ok(());
        }

        let options = parse_item_options(html);
        if let Some((value, label)) = options.iter().find(|(_, label)| label != "None") {
            ctx.emit(DomPatch::SetValue {
                target: r#"select[name="item"]"#.to_string(),
                value: value.clone(),
            });

            // An unlisted item gets an empty price and currency coins.
            let (price, currency) = listed_price_for(html, label)
                .unwrap_or_else(|| (String::new(), 'c'));
            ctx.emit(DomPatch::SetValue {
                target: r#"input[name="price"]"#.to_string(),
                value: price,
            });
            ctx.emit(DomPatch::SetValue {
                target: r#"select[name="currency"]"#.to_string(),
                value: if currency == 'c' { "1" } else { "2" }.to_string(),
            });
        }

        if html.contains(r#"name="multi""#) {
            ctx.emit(DomPatch::SetChecked {
                target: r#"input[name="multi"]"#.to_string(),
                checked: true,
            });
        }

        ctx.emit(DomPatch::BindKey {
            key: "a".to_string(),
            action: KeyAction::Click {
                target: r#"input[value="Add Item"]"#.to_string(),
            },
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "stand_tests.rs"]
mod tests;
