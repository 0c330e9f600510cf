//! Unclaimed vote reward notice.

use async_trait::async_trait;

use lesuite_protocols::{HandlerError, Page, PageContext, PageHandler};

use crate::emit_notice;

pub const VOTE_CACHE_KEY: &str = "voting:canvote";

/// Keep the flag a little past the reset so a page loaded right at the
/// boundary still rolls over to the fresh state.
const VOTE_TTL_BUFFER_SECS: u64 = 5 * 60;

/// The voting page lists one row per reward site; any still marked
/// "Not Voted" means there is something to claim.
pub fn parse_can_vote(page: &Page) -> bool {
    page.contains("Not Voted")
}

/// Shows a notice while any vote reward is unclaimed. The flag expires at
/// the next server vote reset, so the notice reappears each cycle without a
/// fetch on every page.
pub struct VoteNotice;

#[async_trait]
impl PageHandler for VoteNotice {
    fn id(&self) -> &str {
        "vote_notice"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        let now = ctx.clock().now();
        let ttl = ctx.clock().seconds_until_vote_reset(now).max(0) as u64 + VOTE_TTL_BUFFER_SECS;

        let can_vote: bool = ctx
            .cached_with_refresh(
                VOTE_CACHE_KEY,
                ttl,
                "/voting.php",
                |page: &Page| -> Result<bool, HandlerError> { Ok(parse_can_vote(page)) },
            )
            .await?;

        if can_vote {
            emit_notice(ctx, "Community", "Vote for Legacy");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "voting_tests.rs"]
mod tests;
