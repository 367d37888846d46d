//! Screen-space placement of the tile grid and click hit-testing.

use pathrecall_core::CellIndex;

const TILE_GAP_RATIO: f32 = 0.08;
const SIDE_MARGIN: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub pitch: f32,
    pub tile_size: f32,
    pub grid_size: usize,
}

impl BoardLayout {
    /// Largest square board that fits below `top_reserved` pixels, centred horizontally.
    pub fn fit(screen_width: f32, screen_height: f32, grid_size: usize, top_reserved: f32) -> Self {
        let grid_size = grid_size.max(1);
        let available_w = (screen_width - 2.0 * SIDE_MARGIN).max(0.0);
        let available_h = (screen_height - top_reserved - SIDE_MARGIN).max(0.0);
        let board = available_w.min(available_h);
        let pitch = board / grid_size as f32;
        let tile_size = pitch * (1.0 - TILE_GAP_RATIO);

        Self {
            origin_x: (screen_width - board) / 2.0,
            origin_y: top_reserved,
            pitch,
            tile_size,
            grid_size,
        }
    }

    pub fn board_extent(&self) -> f32 {
        self.pitch * self.grid_size as f32
    }

    pub fn tile_rect(&self, index: CellIndex) -> TileRect {
        let row = index / self.grid_size;
        let col = index % self.grid_size;
        TileRect {
            x: self.origin_x + col as f32 * self.pitch,
            y: self.origin_y + row as f32 * self.pitch,
            size: self.tile_size,
        }
    }

    /// Cell under a screen point, or `None` for points off the board or in a gap.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<CellIndex> {
        if self.pitch <= 0.0 {
            return None;
        }
        let local_x = x - self.origin_x;
        let local_y = y - self.origin_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }
        let col = (local_x / self.pitch) as usize;
        let row = (local_y / self.pitch) as usize;
        if col >= self.grid_size || row >= self.grid_size {
            return None;
        }
        let index = row * self.grid_size + col;
        let rect = self.tile_rect(index);
        if x > rect.x + rect.size || y > rect.y + rect.size {
            return None;
        }
        Some(index)
    }
}
