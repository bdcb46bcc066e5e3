//! Player sheet: a pharaoh on skis, 48×48 per frame.
//!
//! Left-leaning poses are painted directly; the right-leaning variants are
//! their horizontal mirrors. Crash/jump/caught poses get their own painters.

use crate::canvas::Canvas;
use crate::palette::{
    AVAX_RED, DARK_RED, GOLD, INK, PHARAOH_BLUE, PURPLE, SKI_DARK, SKIN, TRANSPARENT, WHITE, YELLOW,
};

use super::Sprite;

const SIZE: u32 = 48;

pub fn sprites() -> Vec<Sprite> {
    let left_slight = skier(-10, -2, 2, 2, -1);
    let left = skier(-13, -4, -1, 4, -2);
    let left_fast = skier(-15, -6, -3, 6, -4);

    let right_slight = left_slight.mirror_horizontal();
    let right = left.mirror_horizontal();
    let right_fast = left_fast.mirror_horizontal();

    vec![
        Sprite::new("player_down", skier(-6, 0, 6, 0, 0)),
        Sprite::new("player_left_slight", left_slight),
        Sprite::new("player_left", left),
        Sprite::new("player_left_fast", left_fast),
        Sprite::new("player_right_slight", right_slight),
        Sprite::new("player_right", right),
        Sprite::new("player_right_fast", right_fast),
        Sprite::new("player_jump", jump()),
        Sprite::new("player_crash", crash()),
        Sprite::new("player_caught", caught()),
    ]
}

/// Pharaoh head and ski suit, no skis or poles. `cx` is the body center
/// column, `head_y` the top of the headdress.
fn pharaoh_base(c: &mut Canvas, cx: i32, head_y: i32) {
    // Nemes headdress with gold banding
    c.fill_rect(cx - 10, head_y, 20, 8, PHARAOH_BLUE);
    c.fill_rect(cx - 10, head_y, 20, 2, GOLD);
    c.fill_rect(cx - 10, head_y + 5, 20, 1, GOLD);
    // Side strips hanging beside the face
    c.fill_rect(cx - 14, head_y + 5, 5, 12, PHARAOH_BLUE);
    c.fill_rect(cx + 9, head_y + 5, 5, 12, PHARAOH_BLUE);
    c.fill_rect(cx - 14, head_y + 7, 5, 1, GOLD);
    c.fill_rect(cx + 9, head_y + 7, 5, 1, GOLD);
    // Face
    c.fill_circle(cx, head_y + 16, 7, SKIN);
    // Eyes, widened by a kohl-liner pixel on each outer side
    c.set(cx - 3, head_y + 14, INK);
    c.set(cx + 3, head_y + 14, INK);
    c.set(cx - 4, head_y + 14, INK);
    c.set(cx + 4, head_y + 14, INK);
    // Mouth
    c.fill_rect(cx - 2, head_y + 19, 5, 1, DARK_RED);
    // Goatee
    c.fill_rect(cx - 1, head_y + 22, 3, 3, GOLD);
    // Ski suit with belt and chest badge
    c.fill_rect(cx - 8, head_y + 27, 16, 14, WHITE);
    c.fill_rect(cx - 8, head_y + 34, 16, 2, PHARAOH_BLUE);
    c.fill_rect(cx - 3, head_y + 28, 6, 5, PHARAOH_BLUE);
    c.set(cx, head_y + 30, AVAX_RED);
}

/// Downhill pose with parameterised ski offsets and body lean.
fn skier(ski_dx_l: i32, ski_dy_l: i32, ski_dx_r: i32, ski_dy_r: i32, lean: i32) -> Canvas {
    let mut c = Canvas::new(SIZE, SIZE, TRANSPARENT);
    let cx = 24 + lean;
    pharaoh_base(&mut c, cx, 4);

    // Poles, hand to snow
    let (px_l, py_l) = (cx - 9, 31);
    let (px_r, py_r) = (cx + 9, 31);
    c.draw_line(px_l, py_l, px_l + ski_dx_l - 8, py_l + 12, SKI_DARK, 1);
    c.draw_line(px_r, py_r, px_r - ski_dx_r + 8, py_r + 12, SKI_DARK, 1);

    // Skis
    let lx = cx + ski_dx_l;
    let rx = cx + ski_dx_r;
    c.fill_rect(lx - 8, 40 + ski_dy_l, 15, 3, SKI_DARK);
    c.fill_rect(rx - 7, 40 + ski_dy_r, 15, 3, SKI_DARK);
    c
}

/// Airborne: arms spread wide, skis level under the body.
fn jump() -> Canvas {
    let mut c = Canvas::new(SIZE, SIZE, TRANSPARENT);
    pharaoh_base(&mut c, 24, 2);
    c.draw_line(16, 29, 6, 25, SKI_DARK, 1);
    c.draw_line(32, 29, 42, 25, SKI_DARK, 1);
    c.fill_rect(4, 36, 15, 3, SKI_DARK);
    c.fill_rect(29, 36, 15, 3, SKI_DARK);
    c
}

/// Wipeout: head low, skis crossed, stars circling the head.
fn crash() -> Canvas {
    let mut c = Canvas::new(SIZE, SIZE, TRANSPARENT);
    pharaoh_base(&mut c, 24, 20);
    c.draw_line(5, 14, 40, 20, SKI_DARK, 2);
    c.draw_line(5, 20, 40, 14, SKI_DARK, 2);
    // Two-pixel stars on a 12px radius around the head, every 60°
    for angle in (0..360).step_by(60) {
        let a = f64::from(angle).to_radians();
        let sx = (24.0 + 12.0 * a.cos()) as i32;
        let sy = (28.0 + 12.0 * a.sin()) as i32;
        c.set(sx, sy, YELLOW);
        c.set(sx + 1, sy, YELLOW);
    }
    c
}

/// Abducted: purple aura ring, arms flung up, legs dangling.
fn caught() -> Canvas {
    let mut c = Canvas::new(SIZE, SIZE, TRANSPARENT);
    c.fill_ring(24, 24, 18, 22, PURPLE);
    pharaoh_base(&mut c, 24, 4);
    c.draw_line(16, 31, 10, 18, SKI_DARK, 1);
    c.draw_line(32, 31, 38, 18, SKI_DARK, 1);
    c.draw_line(20, 41, 14, 47, SKI_DARK, 1);
    c.draw_line(28, 41, 34, 47, SKI_DARK, 1);
    c
}
