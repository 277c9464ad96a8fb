use crate::effects::effect::{ComposeCtx, Effect};
use crate::foundation::error::SegueResult;
use crate::foundation::math::Fnv1a64;
use crate::raster::frame::Frame;

/// Square tiles flip from source to destination in a seeded pseudo-random order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDissolve {
    /// Tile edge in pixels.
    pub tile: u32,
    /// Seed for the reveal order.
    pub seed: u64,
}

impl Default for TileDissolve {
    fn default() -> Self {
        Self { tile: 16, seed: 0 }
    }
}

impl TileDissolve {
    /// Rank of every tile in row-major tile order; rank `0` is revealed first.
    pub(crate) fn tile_ranks(&self, cols: u32, rows: u32) -> Vec<usize> {
        let count = (cols as usize) * (rows as usize);
        let mut order: Vec<(u64, usize)> = Vec::with_capacity(count);
        for row in 0..rows {
            for col in 0..cols {
                let mut h = Fnv1a64::new(self.seed);
                h.write_u32(col);
                h.write_u32(row);
                order.push((h.finish(), order.len()));
            }
        }
        // Ties fall back to tile index so the order is total.
        order.sort_unstable();

        let mut ranks = vec![0usize; count];
        for (rank, (_, tile_idx)) in order.into_iter().enumerate() {
            ranks[tile_idx] = rank;
        }
        ranks
    }
}

impl Effect for TileDissolve {
    fn name(&self) -> &'static str {
        "tile_dissolve"
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        let (width, height) = (ctx.width(), ctx.height());
        let tile = self.tile.max(1);
        let cols = width.div_ceil(tile);
        let rows = height.div_ceil(tile);
        let ranks = self.tile_ranks(cols, rows);

        let revealed = ((ctx.progress().get() as f64) * (ranks.len() as f64)).round() as usize;

        let src = ctx.source();
        let dst = ctx.destination();
        for y in 0..height {
            let row = y / tile;
            for x in 0..width {
                let tile_idx = (row as usize) * (cols as usize) + (x / tile) as usize;
                let layer = if ranks[tile_idx] < revealed { dst } else { src };
                let idx = out.index(x, y);
                out.set_px(idx, layer.px(idx));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tiles.rs"]
mod tests;
