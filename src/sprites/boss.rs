//! The boss: an 80×80 clawed blob with glowing eyes and chest lettering.

use crate::canvas::{Canvas, Color};
use crate::palette::{AVAX_RED, DARK_PURPLE, GOLD, PURPLE, TRANSPARENT, WHITE};

use super::Sprite;

pub fn sprites() -> Vec<Sprite> {
    vec![Sprite::new("lfj_joe", lfj_joe())]
}

fn lfj_joe() -> Canvas {
    let mut c = Canvas::new(80, 80, TRANSPARENT);

    // Translucent aura
    c.fill_ring(40, 42, 34, 38, Color::rgba(80, 0, 160, 120));

    // Body and head, dark rim over a lighter core
    c.fill_circle(40, 44, 30, DARK_PURPLE);
    c.fill_circle(40, 42, 26, PURPLE);
    c.fill_circle(40, 22, 18, DARK_PURPLE);
    c.fill_circle(40, 20, 15, PURPLE);

    // Glowing eyes: red iris, amber core, white glint
    for ex in [30, 50] {
        c.fill_circle(ex, 18, 5, AVAX_RED);
        c.fill_circle(ex, 18, 3, Color::rgb(255, 200, 100));
        c.set(ex, 18, WHITE);
    }

    // Fangs
    c.fill_polygon(&[(34, 32), (30, 40), (38, 40)], WHITE);
    c.fill_polygon(&[(46, 32), (42, 40), (50, 40)], WHITE);

    // Claws, three per side, mirrored around the body
    for (cx, cy) in [(8, 50), (4, 58), (10, 63)] {
        c.fill_polygon(&[(cx, cy), (cx + 6, cy - 10), (cx + 10, cy + 4)], PURPLE);
    }
    for (cx, cy) in [(62, 50), (66, 58), (60, 63)] {
        c.fill_polygon(&[(cx, cy), (cx - 6, cy - 10), (cx - 10, cy + 4)], PURPLE);
    }

    // "LFJ" chest lettering
    // L
    c.fill_rect(26, 48, 2, 10, GOLD);
    c.fill_rect(26, 56, 6, 2, GOLD);
    // F
    c.fill_rect(34, 48, 2, 10, GOLD);
    c.fill_rect(34, 48, 6, 2, GOLD);
    c.fill_rect(34, 52, 4, 2, GOLD);
    // J
    c.fill_rect(44, 48, 6, 2, GOLD);
    c.fill_rect(47, 48, 2, 8, GOLD);
    c.fill_rect(44, 56, 4, 2, GOLD);
    c.fill_rect(44, 54, 2, 2, GOLD);

    c
}
