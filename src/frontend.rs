//! Window front end (feature `window`).
//!
//! Opens a raylib window the size of the viewport and drives a [`Game`] at
//! the configured tick rate. Arrow keys move, `C` repels and `R` restarts
//! once the player has been caught.
//!
//! Entities are drawn as flat colored tiles; sprite-sheet offsets from the
//! snapshot pick the shade so facing and the walk cycle stay visible.

use log::info;
use raylib::prelude::*;

use crate::components::role::{ObstacleKind, Role};
use crate::game::Game;
use crate::map::MapError;
use crate::resources::input::PressedKeys;
use crate::systems::render::{RenderItem, RenderSnapshot};

const SKY_LEFT: Color = Color::new(40, 48, 80, 255);
const SKY_RIGHT: Color = Color::new(90, 110, 160, 255);
const GROUND: Color = Color::new(70, 60, 45, 255);
const WALL: Color = Color::new(120, 120, 120, 255);
const STONE: Color = Color::new(160, 140, 110, 255);
const ENEMY: Color = Color::new(200, 40, 40, 255);
const ENEMY_FLEEING: Color = Color::new(120, 160, 240, 255);
const PLAYER: Color = Color::new(240, 220, 60, 255);
const PLAYER_STEP: Color = Color::new(250, 180, 40, 255);

fn read_keys(rl: &RaylibHandle) -> PressedKeys {
    PressedKeys {
        left: rl.is_key_down(KeyboardKey::KEY_LEFT),
        right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
        up: rl.is_key_down(KeyboardKey::KEY_UP),
        down: rl.is_key_down(KeyboardKey::KEY_DOWN),
        repel: rl.is_key_down(KeyboardKey::KEY_C),
    }
}

fn item_color(item: &RenderItem) -> Color {
    match item.role {
        Role::Ground => GROUND,
        Role::Obstacle(ObstacleKind::Wall) => WALL,
        Role::Obstacle(ObstacleKind::Stone) => STONE,
        Role::Enemy if item.fleeing => ENEMY_FLEEING,
        Role::Enemy => ENEMY,
        Role::Player if item.frame == 1 => PLAYER_STEP,
        Role::Player => PLAYER,
    }
}

fn draw_frame(d: &mut RaylibDrawHandle, frame: &RenderSnapshot) {
    d.clear_background(Color::BLACK);

    let (w, h) = frame.viewport;
    let background = frame.background;
    d.draw_rectangle_gradient_h(background.primary_x, 0, w, h, SKY_LEFT, SKY_RIGHT);
    d.draw_rectangle_gradient_h(background.mirrored_x, 0, w, h, SKY_RIGHT, SKY_LEFT);

    for item in &frame.items {
        let r = item.rect;
        d.draw_rectangle(r.x, r.y, r.width, r.height, item_color(item));
        if item.role != Role::Ground {
            d.draw_rectangle_lines(r.x, r.y, r.width, r.height, Color::BLACK);
        }
    }

    d.draw_text(&format!("tick {}", frame.tick), 10, 10, 10, Color::WHITE);
    if !frame.playing {
        d.draw_text("Caught! Press R to restart", 10, h / 2 - 10, 20, Color::RED);
    }
}

/// Run the window loop until it is closed.
pub fn run(mut game: Game) -> Result<(), MapError> {
    let (w, h) = game.config().viewport_size();
    let fps = game.config().ticks_per_second.max(1) as u32;

    let (mut rl, thread) = raylib::init().size(w, h).title("Tilechase").build();
    rl.set_target_fps(fps);

    while !rl.window_should_close() {
        if game.is_playing() {
            game.tick(read_keys(&rl));
        } else if rl.is_key_pressed(KeyboardKey::KEY_R) {
            game.reset()?;
        }

        let frame = game.snapshot();
        let mut d = rl.begin_drawing(&thread);
        draw_frame(&mut d, &frame);
    }
    info!("Window closed after {} ticks", game.ticks());
    Ok(())
}
