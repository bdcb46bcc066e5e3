//! UI art: the 128×48 title logo.

use crate::canvas::{Canvas, Color};
use crate::palette::{AVAX_RED, DARK_RED, TRANSPARENT, WHITE};

use super::Sprite;

pub fn sprites() -> Vec<Sprite> {
    vec![Sprite::new("skiavax_logo", logo())]
}

/// Red banner: framed triangle emblem on the left, title block on the right.
fn logo() -> Canvas {
    let mut c = Canvas::new(128, 48, TRANSPARENT);
    c.fill_rect(0, 0, 128, 48, AVAX_RED);
    // Emblem frame
    c.fill_rect(2, 2, 44, 44, DARK_RED);
    c.fill_rect(4, 4, 40, 40, AVAX_RED);
    // The "A" triangle with its notch
    c.fill_polygon(&[(24, 8), (6, 40), (42, 40)], WHITE);
    c.fill_polygon(&[(24, 28), (16, 40), (32, 40)], AVAX_RED);
    // Title block
    c.fill_rect(48, 2, 76, 44, Color::rgb(180, 30, 30));
    c
}
