//! Scene geometry
//!
//! Everything is built from axis-aligned quads on planes facing the camera.
//! Draw order is back to front: belt, food, plate.

use glam::{Vec2, Vec3};

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Food, FoodKind, GameState, Plate};

/// How one food kind is drawn: a body with a smaller accent on top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodStyle {
    pub body: [f32; 4],
    pub accent: [f32; 4],
    /// Accent size relative to the body
    pub accent_scale: f32,
    /// Accent offset from the body centre, relative to half extents
    pub accent_offset: Vec2,
}

/// Indexed by `FoodKind::index()`
pub const FOOD_STYLES: [FoodStyle; FoodKind::COUNT] = [
    // Apple: red with a leaf
    FoodStyle {
        body: [0.85, 0.12, 0.12, 1.0],
        accent: [0.2, 0.7, 0.2, 1.0],
        accent_scale: 0.3,
        accent_offset: Vec2::new(0.3, 0.7),
    },
    // Burger: bun with a patty stripe
    FoodStyle {
        body: [0.9, 0.65, 0.3, 1.0],
        accent: [0.4, 0.2, 0.1, 1.0],
        accent_scale: 0.4,
        accent_offset: Vec2::new(0.0, 0.0),
    },
    // Cake: pink with a cherry
    FoodStyle {
        body: [0.95, 0.7, 0.8, 1.0],
        accent: [0.8, 0.0, 0.2, 1.0],
        accent_scale: 0.25,
        accent_offset: Vec2::new(0.0, 0.75),
    },
];

pub fn style_for(kind: FoodKind) -> &'static FoodStyle {
    &FOOD_STYLES[kind.index()]
}

/// Append a quad (two triangles) centred on `center`
pub fn push_quad(out: &mut Vec<Vertex>, center: Vec3, half: Vec2, color: [f32; 4]) {
    let (x0, x1) = (center.x - half.x, center.x + half.x);
    let (y0, y1) = (center.y - half.y, center.y + half.y);
    let z = center.z;

    out.push(Vertex::new(x1, y1, z, color)); // top right
    out.push(Vertex::new(x1, y0, z, color)); // bottom right
    out.push(Vertex::new(x0, y1, z, color)); // top left

    out.push(Vertex::new(x1, y0, z, color)); // bottom right
    out.push(Vertex::new(x0, y0, z, color)); // bottom left
    out.push(Vertex::new(x0, y1, z, color)); // top left
}

/// Conveyor belt with stripes scrolled down by `offset` (0-1 of a stripe period)
pub fn belt(out: &mut Vec<Vertex>, offset: f32) {
    let center = Vec3::new(0.0, 0.0, BELT_DEPTH);
    push_quad(
        out,
        center,
        Vec2::new(BELT_HALF_WIDTH, BELT_HALF_HEIGHT),
        colors::BELT,
    );

    let stripe_half = BELT_PERIOD * 0.25;
    let top = BELT_HALF_HEIGHT;
    let bottom = -BELT_HALF_HEIGHT;
    let offset = offset.rem_euclid(1.0);

    // One spare stripe above the belt slides in as the bottom one slides out
    for i in -1..=BELT_STRIPES as i32 {
        let y = top - (i as f32 + offset) * BELT_PERIOD;
        // Trim stripes that poke past the belt ends
        let y0 = (y - stripe_half).max(bottom);
        let y1 = (y + stripe_half).min(top);
        if y1 <= y0 {
            continue;
        }
        push_quad(
            out,
            Vec3::new(0.0, (y0 + y1) * 0.5, BELT_DEPTH + 0.001),
            Vec2::new(BELT_HALF_WIDTH, (y1 - y0) * 0.5),
            colors::BELT_STRIPE,
        );
    }
}

/// Food body plus accent, looked up from the style table
pub fn food(out: &mut Vec<Vertex>, food: &Food) {
    let style = style_for(food.kind);
    let half = HALF_EXTENTS.truncate();
    push_quad(out, food.pos, half, style.body);

    let accent_center = food.pos + (style.accent_offset * half).extend(0.001);
    push_quad(out, accent_center, half * style.accent_scale, style.accent);
}

pub fn plate(out: &mut Vec<Vertex>, plate: &Plate) {
    let half = HALF_EXTENTS.truncate();
    push_quad(out, plate.pos, half, colors::PLATE_RIM);
    push_quad(
        out,
        plate.pos + Vec3::new(0.0, 0.0, 0.001),
        half * 0.75,
        colors::PLATE,
    );
}

/// Every vertex for one frame
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * (3 + BELT_STRIPES as usize) + 12 * (state.foods.len() + 1));
    belt(&mut out, state.belt_offset);
    for f in state.live_foods() {
        food(&mut out, f);
    }
    plate(&mut out, &state.plate);
    out
}
