//! Column-major grid of armor blocks.

use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind};

/// The destructible wall: `width * height` blocks stored column-major,
/// `index = x * height + y`. Shape only changes through [`Grid::generate`],
/// which keeps the length invariant and reuses block slots in place on
/// resize instead of reallocating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    kind: BlockKind,
    blocks: Vec<Block>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (x * self.height + y) as usize
    }

    pub fn block(&self, x: u32, y: u32) -> &Block {
        &self.blocks[self.index(x, y)]
    }

    pub fn block_mut(&mut self, x: u32, y: u32) -> &mut Block {
        let i = self.index(x, y);
        &mut self.blocks[i]
    }

    /// Reshape the wall. A no-op when `(width, height, kind)` all match the
    /// current shape. Otherwise every surviving slot (linear index still in
    /// bounds) is re-profiled and repositioned in place, the tail is
    /// truncated on shrink, and new blocks are appended on growth.
    pub fn generate(&mut self, width: u32, height: u32, kind: BlockKind) {
        if width == self.width && height == self.height && kind == self.kind {
            return;
        }
        let profile = kind.profile();
        let len = width as usize * height as usize;
        let reused = self.blocks.len().min(len);
        for (i, block) in self.blocks.iter_mut().take(reused).enumerate() {
            block.reset(profile, i as u32 / height, i as u32 % height);
        }
        self.blocks.truncate(len);
        for i in self.blocks.len()..len {
            self.blocks
                .push(Block::new(profile, i as u32 / height, i as u32 % height));
        }
        self.width = width;
        self.height = height;
        self.kind = kind;
        log::debug!("grid regenerated: {}x{} {}", width, height, kind.as_str());
    }

    /// Swap every block to a new material profile and revive it. Shape and
    /// positions are untouched. No-op if the material is unchanged.
    pub fn retype(&mut self, kind: BlockKind) {
        if kind == self.kind {
            return;
        }
        let profile = kind.profile();
        for block in &mut self.blocks {
            block.reprofile(profile);
        }
        self.kind = kind;
        log::debug!("grid retyped to {}", kind.as_str());
    }

    /// Restore every block to full hp without touching shape or material.
    pub fn revive_all(&mut self) {
        for block in &mut self.blocks {
            block.revive();
        }
    }

    /// Total hp missing across the wall (demo/stat readout).
    pub fn total_damage_taken(&self) -> f32 {
        self.blocks.iter().map(|b| b.max_hp - b.hp).sum()
    }
}
