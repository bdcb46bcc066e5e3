//! Pickup tokens, 28×28 coins.

use crate::canvas::{Canvas, Color};
use crate::palette::{AVAX_RED, DARK_GOLD, DARK_ORANGE, DARK_RED, GOLD, TRANSPARENT, WHITE};

use super::Sprite;

pub fn sprites() -> Vec<Sprite> {
    vec![
        Sprite::new("avax_token", avax_token()),
        Sprite::new("phar_token", phar_token()),
    ]
}

/// Red coin with the white "A" triangle, notched at the base.
fn avax_token() -> Canvas {
    let mut c = Canvas::new(28, 28, TRANSPARENT);
    c.fill_circle(14, 14, 13, AVAX_RED);
    c.fill_circle(14, 14, 11, DARK_RED);
    c.fill_polygon(&[(14, 4), (4, 22), (24, 22)], WHITE);
    // Notch: cut the middle of the base back out
    c.fill_polygon(&[(14, 16), (9, 22), (19, 22)], DARK_RED);
    // Shine
    c.fill_circle(10, 9, 2, Color::rgba(255, 180, 180, 180));
    c
}

/// Gold coin with a three-point crown.
fn phar_token() -> Canvas {
    let mut c = Canvas::new(28, 28, TRANSPARENT);
    c.fill_circle(14, 14, 13, DARK_GOLD);
    c.fill_circle(14, 14, 11, GOLD);
    // Crown band plus three points
    c.fill_rect(8, 14, 12, 5, DARK_ORANGE);
    c.fill_polygon(&[(9, 9), (8, 14), (10, 14)], DARK_ORANGE);
    c.fill_polygon(&[(14, 7), (12, 14), (16, 14)], DARK_ORANGE);
    c.fill_polygon(&[(19, 9), (18, 14), (20, 14)], DARK_ORANGE);
    c.fill_circle(10, 9, 2, Color::rgba(255, 245, 180, 180));
    c
}
