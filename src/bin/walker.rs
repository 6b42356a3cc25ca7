use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes};

use tilecaster::input::{Action, InputState, apply_input};
use tilecaster::motion::{Mover, MovingBody};
use tilecaster::render::{Frame, WallTextures, draw_overhead, render_view};
use tilecaster::types::Pose2;
use tilecaster::{TileMap, ViewConfig, load_map, parse_map};

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;
const WINDOW_SCALE: u32 = 3;

/// Fallback map when no path is given on the command line.
///
/// Rows are single-quoted: a double-quoted row would put `"#` inside the raw
/// string and terminate it early.
const DEFAULT_MAP: &str = r#"
tile_edge: 8.0
rows:
  - '################'
  - '#@.............#'
  - '#......###.....#'
  - '#......#.......#'
  - '#......#...e...#'
  - '#......#.......#'
  - '#..#####.......#'
  - '#..............#'
  - '#......##......#'
  - '#......##......#'
  - '#..............#'
  - '#...e......#...#'
  - '#..........#...#'
  - '#...####...#...#'
  - '#..............#'
  - '################'
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args();
    let _binary = args.next();
    let bundle = match args.next() {
        Some(path) => load_map(&path)?,
        None => {
            eprintln!("usage: walker [map.yaml] -- using the built-in map");
            parse_map(DEFAULT_MAP)?
        }
    };

    let view = ViewConfig::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT);
    view.validate()?;

    let spawn = bundle
        .player_spawn
        .unwrap_or_else(|| bundle.map.info().world_center());
    let player = MovingBody::new(
        Pose2::new(spawn, 0.0),
        Vec2::splat(bundle.map.tile_edge() * 0.3),
    );
    let world = World {
        map: bundle.map,
        player,
        mover: Mover::default(),
    };

    let event_loop = EventLoop::new()?;
    let mut app = WalkerApp::new(world, view);
    event_loop.run_app(&mut app)?;

    Ok(())
}

/// Session state owned by the frame loop and passed into the core by
/// reference.
struct World {
    map: TileMap,
    player: MovingBody,
    mover: Mover,
}

/// Keys currently held, bridged to the core's action queries.
#[derive(Default)]
struct HeldKeys(HashSet<KeyCode>);

impl HeldKeys {
    fn press(&mut self, code: KeyCode) {
        self.0.insert(code);
    }

    fn release(&mut self, code: KeyCode) {
        self.0.remove(&code);
    }
}

impl InputState for HeldKeys {
    fn held(&self, action: Action) -> bool {
        let codes: &[KeyCode] = match action {
            Action::Forward => &[KeyCode::KeyW, KeyCode::ArrowUp],
            Action::Backward => &[KeyCode::KeyS, KeyCode::ArrowDown],
            Action::TurnLeft => &[KeyCode::KeyA, KeyCode::ArrowLeft],
            Action::TurnRight => &[KeyCode::KeyD, KeyCode::ArrowRight],
            Action::ToggleOverlay => &[KeyCode::Tab],
        };
        codes.iter().any(|code| self.0.contains(code))
    }
}

struct WalkerApp {
    world: World,
    view: ViewConfig,
    textures: WallTextures,
    frame: Frame,
    keys: HeldKeys,
    overlay: bool,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl WalkerApp {
    fn new(world: World, view: ViewConfig) -> Self {
        let frame = Frame::new(view.screen_width, view.screen_height);
        Self {
            world,
            view,
            textures: WallTextures::default(),
            frame,
            keys: HeldKeys::default(),
            overlay: false,
            window: None,
            pixels: None,
        }
    }

    /// One frame: poll input, move the player, draw into the frame buffer.
    fn step(&mut self) {
        apply_input(&self.keys, &self.world.mover, &mut self.world.player);
        self.world
            .mover
            .integrate(&mut self.world.player, Some(&self.world.map));

        if self.overlay {
            draw_overhead(
                &mut self.frame,
                &self.world.map,
                &self.world.player.pose,
                &self.view,
            );
        } else {
            render_view(
                &mut self.frame,
                &self.world.map,
                &self.world.player.pose,
                &self.view,
                &self.textures,
            );
        }
    }
}

impl ApplicationHandler for WalkerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("Tile Caster")
                .with_inner_size(PhysicalSize::new(
                    SCREEN_WIDTH * WINDOW_SCALE,
                    SCREEN_HEIGHT * WINDOW_SCALE,
                )),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                eprintln!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = match Pixels::new(
            self.view.screen_width,
            self.view.screen_height,
            surface_texture,
        ) {
            Ok(pixels) => pixels,
            Err(err) => {
                eprintln!("failed to create pixels surface: {err}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if code == KeyCode::Tab && !event.repeat {
                                self.overlay = !self.overlay;
                            }
                            self.keys.press(code);
                        }
                        ElementState::Released => self.keys.release(code),
                    }
                }
            }
            WindowEvent::Resized(size) => {
                // The render buffer keeps its fixed resolution; only the
                // surface scales.
                if let Some(pixels) = self.pixels.as_mut() {
                    let _ = pixels.resize_surface(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.step();
                if let Some(pixels) = self.pixels.as_mut() {
                    let buffer = pixels.frame_mut();
                    if buffer.len() == self.frame.data().len() {
                        buffer.copy_from_slice(self.frame.data());
                    }
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
