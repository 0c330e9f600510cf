//! Export link construction for top 10 tables.
//!
//! Each record table names its players in `profile.php` links and stacks
//! the scores in a single `colortext` font, one per line. The export link
//! packs `rank;player;score` lines into a `data:` URI so the list can be
//! opened and copied as plain text.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use lesuite_protocols::patch::{FONT_AWESOME_CSS, fa_icon};
use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

const TOP_LIST_LEN: usize = 10;

static PLAYER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"profile.php[^>]*>([^<]+)<").expect("static pattern"));

static SCORES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<font[^>]*class="colortext"[^>]*>(.*?)</font>"#).expect("static pattern")
});

/// Slice of `html` covering the table that contains `title`.
fn table_window<'a>(html: &'a str, title: &str) -> Option<&'a str> {
    let at = html.find(title)?;
    let start = html[..at].rfind("<table")?;
    let end = at + html[at..].find("</table>")?;
    Some(&html[start..end])
}

fn parse_players(window: &str) -> Vec<String> {
    PLAYER_RE
        .captures_iter(window)
        .map(|caps| caps[1].trim().to_string())
        .take(TOP_LIST_LEN)
        .collect()
}

fn parse_scores(window: &str) -> Vec<String> {
    let Some(caps) = SCORES_RE.captures(window) else {
        return Vec::new();
    };
    caps[1]
        .split("<br>")
        .map(|score| score.trim().to_string())
        .filter(|score| !score.is_empty())
        .take(TOP_LIST_LEN)
        .collect()
}

/// `rank;player;score` lines for as many complete pairs as the table holds.
pub fn export_lines(players: &[String], scores: &[String]) -> String {
    players
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (player, score))| format!("{};{};{}\n", i + 1, player, score))
        .collect()
}

fn data_href(text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("data:text,{encoded}")
}

fn export_table(ctx: &PageContext, title: &str) {
    let Some(window) = table_window(ctx.page().html(), title) else {
        debug!("no '{}' table on this page", title);
        return;
    };
    let players = parse_players(window);
    let scores = parse_scores(window);
    let lines = export_lines(&players, &scores);
    if lines.is_empty() {
        debug!("'{}' table has no complete rows", title);
        return;
    }

    ctx.emit(DomPatch::InsertAfter {
        anchor: format!(r#"font:contains("{title}")"#),
        html: format!(
            r#"<a style="position: relative; right: 5px; float: right;" href="{}">{}</a>"#,
            data_href(&lines),
            fa_icon("fa-file-text")
        ),
    });
}

fn export_tables(ctx: &PageContext, titles: &[&str]) {
    ctx.emit(DomPatch::EnsureStylesheet {
        href: FONT_AWESOME_CSS.to_string(),
    });
    for title in titles {
        export_table(ctx, title);
    }
}

/// Export links for the all-time record tables.
pub struct OverallTop10Export;

#[async_trait]
impl PageHandler for OverallTop10Export {
    fn id(&self) -> &str {
        "overall_top10_export"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        export_tables(
            ctx,
            &[
                "Highest Levels",
                "Highest Wins",
                "Highest Losses",
                "Achievements Score",
            ],
        );
        Ok(())
    }
}

/// Export links for the weekly record tables.
pub struct WeeklyTop10Export;

#[async_trait]
impl PageHandler for WeeklyTop10Export {
    fn id(&self) -> &str {
        "weekly_top10_export"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        export_tables(
            ctx,
            &[
                "Most Exp Earned",
                "Most Wins",
                "Most Losses",
                "Most Hunting Points",
                "Most Warfare Points",
                "Most Tokens Earned",
            ],
        );
        Ok(())
    }
}

/// Export links for the gang record tables.
pub struct GangTop10Export;

#[async_trait]
impl PageHandler for GangTop10Export {
    fn id(&self) -> &str {
        "gang_top10_export"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        export_tables(
            ctx,
            &[
                "Gang List : Highest Levels",
                "Gang List : Last Week's Warfare Points",
            ],
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
