//! Slope obstacles: tree, blackhole, snowbank, gate flag, jump ramp.

use crate::canvas::{Canvas, Color};
use crate::palette::{
    AVAX_RED, BROWN, DARK_BROWN, DARK_PURPLE, GREY, INK, LIGHT_GREY, LIGHT_PURPLE, PURPLE, SNOW,
    TRANSPARENT, WHITE,
};

use super::Sprite;

pub fn sprites() -> Vec<Sprite> {
    vec![
        Sprite::new("avax_tree", avax_tree()),
        Sprite::new("blackhole", blackhole()),
        Sprite::new("snowbank", snowbank()),
        Sprite::new("gate_flag", gate_flag()),
        Sprite::new("ramp", ramp()),
    ]
}

/// 36×44 pine: brown trunk, four red tiers, snow on each tip.
fn avax_tree() -> Canvas {
    let mut c = Canvas::new(36, 44, TRANSPARENT);
    c.fill_rect(14, 34, 8, 10, DARK_BROWN);
    c.fill_rect(15, 34, 6, 10, BROWN);

    // (tip_x, base_y, half_width) per tier, bottom to top
    let tiers: [(i32, i32, i32); 4] = [(18, 36, 16), (18, 29, 13), (18, 22, 10), (18, 16, 7)];
    for (tx, ty, hw) in tiers {
        c.fill_polygon(&[(tx, ty - 10), (tx - hw, ty), (tx + hw, ty)], AVAX_RED);
    }
    for (tx, ty, _) in tiers {
        c.fill_polygon(&[(tx, ty - 10), (tx - 3, ty - 7), (tx + 3, ty - 7)], SNOW);
    }
    c
}

/// 40×40 vortex: nested discs darkening toward the center, spiral arms.
fn blackhole() -> Canvas {
    let mut c = Canvas::new(40, 40, TRANSPARENT);
    c.fill_circle(20, 20, 18, DARK_PURPLE);
    c.fill_circle(20, 20, 14, PURPLE);
    c.fill_circle(20, 20, 10, Color::rgb(50, 0, 100));
    c.fill_circle(20, 20, 6, Color::rgb(20, 0, 50));
    c.fill_circle(20, 20, 3, INK);

    // Eight arms, each twisting 4° per radius step
    for angle in (0..360).step_by(45) {
        for r in 8..16 {
            let a = f64::from(angle + r * 4).to_radians();
            let sx = (20.0 + f64::from(r) * a.cos()) as i32;
            let sy = (20.0 + f64::from(r) * a.sin()) as i32;
            c.set(sx, sy, LIGHT_PURPLE);
        }
    }
    c
}

/// 48×32 mound: ellipse centered below the bottom edge, highlight on top,
/// shading on the right flank.
fn snowbank() -> Canvas {
    let mut c = Canvas::new(48, 32, TRANSPARENT);
    for y in 0..32 {
        for x in 0..48 {
            let (dx, dy) = (x - 24, y - 28);
            let nx = f64::from(dx) / 22.0;
            let ny = f64::from(dy) / 12.0;
            if nx * nx + ny * ny <= 1.0 {
                let color = if dx > 8 {
                    LIGHT_GREY
                } else if dy < -4 {
                    WHITE
                } else {
                    SNOW
                };
                c.set(x, y, color);
            }
        }
    }
    c
}

/// 8×28 slalom gate: grey pole, red pennant.
fn gate_flag() -> Canvas {
    let mut c = Canvas::new(8, 28, TRANSPARENT);
    c.fill_rect(3, 0, 2, 28, GREY);
    c.fill_polygon(&[(4, 2), (4, 14), (7, 8)], AVAX_RED);
    c
}

/// 52×20 wedge rising left-to-right, dark 2px leading edge.
fn ramp() -> Canvas {
    let mut c = Canvas::new(52, 20, TRANSPARENT);
    for y in 0..20 {
        let edge = 51 - y * 51 / 19;
        for x in edge..52 {
            let color = if x > edge + 1 { BROWN } else { DARK_BROWN };
            c.set(x, y, color);
        }
    }
    c
}
