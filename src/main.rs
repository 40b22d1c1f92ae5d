use anyhow::Result;
use log::info;
use rusted_platformer::engine::assets::AssetManager;
use rusted_platformer::engine::game_loop::GameLoop;
use rusted_platformer::engine::input::{InputConfig, InputManager};
use rusted_platformer::engine::physics::PhysicsWorld;
use rusted_platformer::game::characters::registry::texture_key;
use rusted_platformer::game::characters::{
    register_character_animations, Action, AnimationKeys, AnimationLibrary, Character, BASE_STATS,
};
use rusted_platformer::game::effects::{EffectPool, DUST_CLOUD};
use rusted_platformer::game::scene::SceneConfig;
use std::rc::Rc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

const ASSET_ROOT: &str = "assets";
const SHEET_PREFIX: &str = "player";
const PLAYER_DEPTH: i32 = 10;

/// Character sheet file for each action
fn sheet_path(action: Action) -> String {
    format!("sprites/characters/wolf/standard/{}.png", action)
}

/// Everything one running session owns
struct Game {
    physics: PhysicsWorld,
    input: InputManager,
    player: Character,
    effects: EffectPool,
    game_loop: GameLoop,
}

impl Game {
    fn new() -> Self {
        let mut assets = AssetManager::new(ASSET_ROOT);
        for action in Action::ALL {
            assets.try_load_texture(&texture_key(SHEET_PREFIX, action), &sheet_path(action));
        }
        DUST_CLOUD.load_frames(&mut assets);

        let keys = AnimationKeys::default();
        let mut library = AnimationLibrary::new();
        register_character_animations(&mut library, &assets, &keys, SHEET_PREFIX);
        DUST_CLOUD.register(&mut library, &assets);
        let library = Rc::new(library);
        info!(
            "{} textures, {} animation clips",
            assets.stats().texture_count,
            library.len()
        );

        let scene = SceneConfig::default();
        let mut physics = PhysicsWorld::new();
        scene.build(&mut physics);

        let player = Character::spawn(
            &mut physics,
            Rc::clone(&library),
            BASE_STATS,
            keys,
            scene.spawn,
            PLAYER_DEPTH,
        );

        Self {
            physics,
            input: InputManager::new(InputConfig::with_defaults()),
            player,
            effects: EffectPool::new(library, DUST_CLOUD),
            game_loop: GameLoop::new(),
        }
    }

    /// Run however many fixed ticks the elapsed time calls for
    fn frame(&mut self) {
        let ticks = self.game_loop.begin_frame();
        let dt = self.game_loop.fixed_timestep();

        for _ in 0..ticks {
            self.input.poll_gamepads();
            let snapshot = self.input.snapshot();

            self.player
                .tick(&mut self.physics, &snapshot, &mut self.effects);
            self.physics.step();
            self.player.clamp_velocity(&mut self.physics);

            self.player.update_animation_timing(dt);
            self.effects.update(dt);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Platformer...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Platformer")
        .with_inner_size(winit::dpi::LogicalSize::new(1600, 600))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut game = Game::new();

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
                game.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never arrive
                game.input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                game.frame();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
