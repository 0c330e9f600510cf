//! Coordinate tooltip for the wasteland map.

use async_trait::async_trait;

use lesuite_protocols::{DomPatch, HandlerError, PageContext, PageHandler};

/// Map tiles render at 33px a side.
pub const TILE_SIZE_PX: u32 = 33;

const TOOLTIP_WIDTH: u32 = 35;

/// One-based tile index for a pixel offset into the map overlay.
pub fn tile_at(offset_px: u32) -> u32 {
    offset_px.div_ceil(TILE_SIZE_PX)
}

/// Attaches a cursor-following coordinate readout to the map overlay. The
/// shim recomputes the tile pair from the pointer offset; the patch carries
/// the initial markup.
pub struct MapCoordTooltip;

#[async_trait]
impl PageHandler for MapCoordTooltip {
    fn id(&self) -> &str {
        "map_coord_tooltip"
    }

    async fn run(&self, ctx: &PageContext) -> Result<(), HandlerError> {
        if !ctx.page().contains(r#"id="overlay2""#) {
            return Ok(());
        }
        ctx.emit(DomPatch::Tooltip {
            target: "#overlay2".to_string(),
            html: r#"<div><div style="text-align:center;">1,1</div></div>"#.to_string(),
            width: TOOLTIP_WIDTH,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "wasteland_tests.rs"]
mod tests;
