use anyhow::{Context, Result};
use glam::IVec2;
use log::info;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::audio::LogAudio;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::physics::CollisionMap;
use engine::renderer::TraceRenderer;
use game::characters::{Character, CharacterStats, Facing};
use game::combat::AttackQueue;

const WINDOW_SIZE: IVec2 = IVec2::new(1280, 720);
const TILE_SIZE: i32 = 32;

const CONTROLS: [Action; 7] = [
    Action::MoveLeft,
    Action::MoveRight,
    Action::Jump,
    Action::Roll,
    Action::Attack,
    Action::Pause,
    Action::Quit,
];

const DEMO_LEVEL: &str = "\
########################################
#......................................#
#......................................#
#..............######..................#
#......................................#
#.........................#####........#
#......................................#
#.....####.............................#
#..................................#...#
#.@...........##..........#........#...#
#.............##.........##........#...#
#######....#########...####....#########
########################################";

/// Feed buffered presses and held movement to the character, then step it
fn step(character: &mut Character, input: &mut InputManager, attacks: &mut AttackQueue, dt: f32) {
    let player = input.player_mut();
    match player.horizontal() {
        -1 => character.move_toward(Facing::Left),
        1 => character.move_toward(Facing::Right),
        _ => {}
    }
    if player.is_buffered(Action::Jump) && character.jump() {
        player.consume_buffered(Action::Jump);
    }
    if player.is_buffered(Action::Roll) && character.roll() {
        player.consume_buffered(Action::Roll);
    }
    if player.is_buffered(Action::Attack) && character.attack(attacks) {
        player.consume_buffered(Action::Attack);
    }

    let was_alive = character.is_alive();
    character.update(dt);
    input.update();

    // Nothing to hit in the demo level yet
    for attack in attacks.drain() {
        info!(
            "Attack on {:?} for {} damage at {:?}, knockback {:?}",
            attack.target, attack.damage, attack.hitbox, attack.knockback
        );
    }
    if was_alive && !character.is_alive() {
        info!("Game over: {} is down", character.name());
    }
}

/// Window title showing health, current action and pause state
fn status_line(character: &Character, paused: bool) -> String {
    let mut status = format!(
        "Ledge Runner - {} hp - {}",
        character.health(),
        character.action().name()
    );
    if paused {
        status.push_str(" (paused)");
    }
    status
}

/// Keep the character centred on screen
fn camera_for(character: &Character) -> IVec2 {
    let hitbox = character.hitbox();
    IVec2::new(hitbox.x + hitbox.w / 2, hitbox.y + hitbox.h / 2) - WINDOW_SIZE / 2
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Ledge Runner...");

    let map = CollisionMap::from_layout(DEMO_LEVEL, TILE_SIZE).context("Failed to load level")?;
    let spawn = map.require_spawn()?;
    info!("Loaded level with {} obstacles", map.len());

    let mut character = Character::new("player", spawn, CharacterStats::default(), &map)
        .context("Failed to spawn player")?
        .with_audio(Box::new(LogAudio));
    let mut input = InputManager::default();
    for action in CONTROLS {
        info!("{:?}: {:?}", action, input.config().get_sources(action));
    }
    let mut attacks = AttackQueue::new();
    let mut renderer = TraceRenderer::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Ledge Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE.x, WINDOW_SIZE.y))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut title = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let action = input.process_keyboard_event(&event);
                if event.state == ElementState::Pressed && !event.repeat {
                    match action {
                        Some(Action::Quit) => {
                            info!("Quit requested, shutting down...");
                            elwt.exit();
                        }
                        Some(Action::Pause) => game_loop.toggle_pause(),
                        _ => {}
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_event(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let updates = game_loop.begin_frame();
                let dt = game_loop.fixed_timestep();
                for _ in 0..updates {
                    step(&mut character, &mut input, &mut attacks, dt);
                }

                let status = status_line(&character, game_loop.is_paused());
                if status != title {
                    window.set_title(&status);
                    title = status;
                }

                character.set_camera(camera_for(&character));
                character.render(&mut renderer);
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Ran {} updates over {} frames ({} draws)",
                    game_loop.update_count(),
                    game_loop.frame_count(),
                    renderer.draw_count()
                );
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
