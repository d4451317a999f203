//! Scene painter: simulation state to surface calls

use super::{Layer, Paint, Rect, RenderSurface};
use crate::assets::Asset;
use crate::sim::{Backdrop, EntityPool, ScoreState, Size, Sprite};

/// Stats panel geometry
const STATS_PANEL: Rect = Rect::new(5.0, 5.0, 145.0, 80.0);
const SCORE_TEXT_POS: (f32, f32) = (30.0, 30.0);
const LIVES_TEXT_POS: (f32, f32) = (30.0, 55.0);

/// Draws each layer of the scene
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    canvas: Size,
}

impl Painter {
    pub fn new(canvas: Size) -> Self {
        Self { canvas }
    }

    fn full(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas.width, self.canvas.height)
    }

    fn draw(&self, surface: &mut dyn RenderSurface, layer: Layer, sprite: &dyn Sprite) {
        let pos = sprite.position();
        surface.draw_image(layer, sprite.asset(), pos.x, pos.y);
    }

    /// Static scenery, drawn once
    pub fn backdrops(&self, surface: &mut dyn RenderSurface, backdrops: &[Backdrop]) {
        for backdrop in backdrops {
            let layer = match backdrop.asset {
                Asset::Ocean => Layer::Ocean,
                _ => Layer::Background,
            };
            self.draw(surface, layer, backdrop);
        }
    }

    /// Redraw a single-sprite layer at the sprite's current position
    pub fn sprite(&self, surface: &mut dyn RenderSurface, layer: Layer, sprite: &dyn Sprite) {
        surface.clear_rect(layer, self.full());
        self.draw(surface, layer, sprite);
    }

    /// Redraw every active falling entity
    pub fn falling(&self, surface: &mut dyn RenderSurface, pool: &EntityPool) {
        surface.clear_rect(Layer::Falling, self.full());
        for entity in pool.iter() {
            self.draw(surface, Layer::Falling, entity);
        }
    }

    /// Score/lives panel
    pub fn stats(&self, surface: &mut dyn RenderSurface, score: &ScoreState) {
        surface.clear_rect(Layer::Stats, self.full());
        surface.fill_rect(Layer::Stats, STATS_PANEL, Paint::Panel);
        let (x, y) = SCORE_TEXT_POS;
        surface.fill_text(Layer::Stats, &format!("Score: {}", score.score()), x, y, Paint::Ink);
        let (x, y) = LIVES_TEXT_POS;
        surface.fill_text(Layer::Stats, &format!("Lives: {}", score.lives()), x, y, Paint::Ink);
    }

    /// Game-over banner over the stats layer
    pub fn game_over(&self, surface: &mut dyn RenderSurface) {
        let cx = self.canvas.width / 2.0;
        let cy = self.canvas.height / 2.0;
        surface.fill_rect(Layer::Stats, Rect::new(cx - 170.0, cy - 40.0, 350.0, 80.0), Paint::Panel);
        surface.fill_text(Layer::Stats, "GAME OVER!", cx - 75.0, cy - 10.0, Paint::Ink);
        surface.fill_text(Layer::Stats, "(refresh to replay)", cx - 95.0, cy + 30.0, Paint::Ink);
    }
}
