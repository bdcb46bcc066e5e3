//! Eight skiing NPC characters, 40×40 each, built on a shared body painter.

use crate::canvas::{Canvas, Color};
use crate::palette::{
    AVAX_RED, BROWN, CYAN, DARK_BROWN, DARK_CYAN, DARK_GREEN, DARK_ORANGE, DARK_PINK, DARK_PURPLE,
    DARK_RED, DARK_TEAL, GOLD, GREEN, GREY, INK, ORANGE, PINK, PURPLE, SKI_DARK, TEAL, TRANSPARENT,
    WHITE, YELLOW,
};

use super::Sprite;

pub fn sprites() -> Vec<Sprite> {
    vec![
        Sprite::new("benqi", benqi()),
        Sprite::new("salvor", salvor()),
        Sprite::new("blaze", blaze()),
        Sprite::new("arena", arena()),
        Sprite::new("yieldyak", yieldyak()),
        Sprite::new("dokyo", dokyo()),
        Sprite::new("dexalot", dexalot()),
        Sprite::new("pangolin", pangolin()),
    ]
}

/// Body silhouette for an NPC skier.
#[derive(Clone, Copy)]
enum BodyShape {
    Round,
    Square,
}

/// Body, face and skis in the given color scheme. Characters add their own
/// headgear on top.
fn npc_base(color: Color, dark: Color, shape: BodyShape) -> Canvas {
    let mut c = Canvas::new(40, 40, TRANSPARENT);
    match shape {
        BodyShape::Round => {
            c.fill_circle(20, 22, 14, dark);
            c.fill_circle(20, 22, 12, color);
        }
        BodyShape::Square => {
            c.fill_rect(7, 9, 26, 26, dark);
            c.fill_rect(9, 11, 22, 22, color);
        }
    }
    // Eyes
    c.fill_circle(15, 19, 3, WHITE);
    c.fill_circle(25, 19, 3, WHITE);
    c.set(15, 19, INK);
    c.set(25, 19, INK);
    // Smile, corners one pixel lower than the middle
    for dx in -3i32..4 {
        let dy = if dx.abs() > 1 { 1 } else { 0 };
        c.set(20 + dx, 26 + dy, dark);
    }
    // Skis
    c.fill_rect(4, 35, 13, 3, SKI_DARK);
    c.fill_rect(23, 35, 13, 3, SKI_DARK);
    c
}

/// Teal water sprite with a wave fin.
fn benqi() -> Canvas {
    let mut c = npc_base(TEAL, DARK_TEAL, BodyShape::Round);
    c.fill_rect(16, 6, 8, 6, CYAN);
    c
}

/// Orange and boxy, hard hat.
fn salvor() -> Canvas {
    let mut c = npc_base(ORANGE, DARK_ORANGE, BodyShape::Square);
    c.fill_rect(8, 7, 24, 5, DARK_ORANGE);
    c.fill_rect(10, 4, 20, 4, ORANGE);
    c
}

/// Flame-headed.
fn blaze() -> Canvas {
    let mut c = npc_base(ORANGE, AVAX_RED, BodyShape::Round);
    c.fill_polygon(&[(14, 2), (10, 12), (18, 12)], AVAX_RED);
    c.fill_polygon(&[(20, 0), (16, 10), (24, 10)], ORANGE);
    c.fill_polygon(&[(26, 3), (22, 11), (30, 11)], DARK_RED);
    c
}

/// Purple gladiator: helmet dome, gold band, crest.
fn arena() -> Canvas {
    let mut c = npc_base(PURPLE, DARK_PURPLE, BodyShape::Round);
    c.fill_rect(10, 6, 20, 8, DARK_PURPLE);
    c.fill_rect(8, 13, 24, 3, GOLD);
    c.fill_polygon(&[(20, 0), (16, 7), (24, 7)], PURPLE);
    c
}

/// Green yak, two horns.
fn yieldyak() -> Canvas {
    let mut c = npc_base(GREEN, DARK_GREEN, BodyShape::Round);
    c.fill_polygon(&[(13, 1), (10, 10), (16, 10)], DARK_GREEN);
    c.fill_polygon(&[(27, 1), (24, 10), (30, 10)], DARK_GREEN);
    c
}

/// Pink, bow on top.
fn dokyo() -> Canvas {
    let mut c = npc_base(PINK, DARK_PINK, BodyShape::Round);
    c.fill_polygon(&[(20, 4), (12, 8), (20, 8)], AVAX_RED);
    c.fill_polygon(&[(20, 4), (28, 8), (20, 8)], DARK_RED);
    c.fill_circle(20, 6, 2, GOLD);
    c
}

/// Cyan robot: antenna and grid eyes painted over the defaults.
fn dexalot() -> Canvas {
    let mut c = npc_base(CYAN, DARK_CYAN, BodyShape::Square);
    c.fill_rect(19, 3, 2, 7, GREY);
    c.fill_circle(20, 3, 2, YELLOW);
    c.fill_rect(12, 17, 6, 4, Color::rgb(0, 220, 240));
    c.fill_rect(22, 17, 6, 4, Color::rgb(0, 220, 240));
    c
}

/// Brown, 3×3 armour-scale pattern on the belly.
fn pangolin() -> Canvas {
    let mut c = npc_base(BROWN, DARK_BROWN, BodyShape::Round);
    for row in 0..3 {
        for col in 0..3 {
            c.fill_rect(10 + col * 7, 14 + row * 5, 5, 3, DARK_BROWN);
        }
    }
    c
}
