//! Named colors shared by every sprite generator.
//!
//! Plain immutable constants — no lookup table, no shared state.

use crate::canvas::Color;

pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Near-black used for eyes and outlines.
pub const INK: Color = Color::rgb(15, 15, 25);

pub const AVAX_RED: Color = Color::rgb(232, 65, 66);
pub const DARK_RED: Color = Color::rgb(160, 28, 28);
pub const GOLD: Color = Color::rgb(255, 210, 0);
pub const DARK_GOLD: Color = Color::rgb(180, 145, 0);
pub const SKIN: Color = Color::rgb(255, 195, 145);
pub const PHARAOH_BLUE: Color = Color::rgb(30, 110, 225);
pub const DARK_BLUE: Color = Color::rgb(10, 55, 140);
/// Skis and pole shafts.
pub const SKI_DARK: Color = Color::rgb(30, 30, 50);

pub const PURPLE: Color = Color::rgb(120, 45, 225);
pub const DARK_PURPLE: Color = Color::rgb(65, 12, 148);
pub const LIGHT_PURPLE: Color = Color::rgb(190, 140, 255);
pub const GREEN: Color = Color::rgb(45, 185, 65);
pub const DARK_GREEN: Color = Color::rgb(18, 110, 32);
pub const ORANGE: Color = Color::rgb(255, 135, 0);
pub const DARK_ORANGE: Color = Color::rgb(195, 90, 0);
pub const CYAN: Color = Color::rgb(0, 200, 220);
pub const DARK_CYAN: Color = Color::rgb(0, 130, 155);
pub const PINK: Color = Color::rgb(235, 80, 138);
pub const DARK_PINK: Color = Color::rgb(165, 35, 85);
pub const LIGHT_PINK: Color = Color::rgb(255, 180, 200);
pub const BROWN: Color = Color::rgb(160, 100, 45);
pub const DARK_BROWN: Color = Color::rgb(100, 60, 18);
pub const TEAL: Color = Color::rgb(0, 170, 170);
pub const DARK_TEAL: Color = Color::rgb(0, 105, 105);

pub const SNOW: Color = Color::rgb(228, 242, 252);
pub const GREY: Color = Color::rgb(150, 162, 178);
pub const LIGHT_GREY: Color = Color::rgb(200, 210, 225);
pub const YELLOW: Color = Color::rgb(255, 240, 0);
