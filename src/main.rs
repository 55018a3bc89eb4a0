use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use sh_core::{
    FlyCamera, Scene, SceneConfig, DEFAULT_SKY_DIR, MOVE_SPEED, MOVE_SPEED_FAST, SAMPLE_STEP,
};

mod constants;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{
    FRAME_STATS_WINDOW, TITLE_REFRESH_SEC, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use events::keyboard::{action_for_key, Action, MoveKeys};
use events::pointer::MouseLook;
use frame::FrameStats;
use render::GpuState;

#[derive(Parser)]
#[command(name = "sh-playground")]
#[command(about = "Mesh lit by spherical-harmonics ambient light projected from a cubemap", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding posx/negx/posy/negy/posz/negz images
    #[arg(long, default_value = DEFAULT_SKY_DIR)]
    sky: PathBuf,

    /// OBJ mesh to light (defaults to a built-in sphere)
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Sample every Nth texel in x and y when projecting
    #[arg(long, default_value_t = SAMPLE_STEP)]
    step: usize,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: u32,

    /// Log the projected coefficients and exit without opening a window
    #[arg(long)]
    print: bool,
}

impl Cli {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            sky_dir: self.sky.clone(),
            mesh_path: self.mesh.clone(),
            sample_step: self.step,
        }
    }
}

/// Everything the event loop mutates besides the GPU state.
struct App {
    scene: Scene,
    camera: FlyCamera,
    keys: MoveKeys,
    look: MouseLook,
    stats: FrameStats,
    last_frame: Instant,
    last_title: Instant,
}

impl App {
    fn new(scene: Scene) -> Self {
        let now = Instant::now();
        Self {
            scene,
            camera: FlyCamera::default(),
            keys: MoveKeys::default(),
            look: MouseLook::default(),
            stats: FrameStats::new(FRAME_STATS_WINDOW),
            last_frame: now,
            last_title: now,
        }
    }

    /// Apply a key action; returns false when the app should quit.
    fn handle_action(&mut self, action: Action, gpu: &mut GpuState) -> bool {
        match action {
            Action::Reload => {
                if let Err(e) = self.reload(gpu) {
                    log::error!("could not reinitialize scene: {e:#}");
                }
            }
            Action::Select(i) => {
                self.scene.editor.select(i);
                log::info!("editing coefficient [{}] {}", i, self.scene.editor.label());
            }
            Action::CycleChannel => self.scene.editor.cycle_channel(),
            Action::Nudge(dir) => self.scene.nudge_selected(dir as f32),
            Action::Revert => self.scene.revert_selected(),
            Action::PrintCoefficients => self.scene.log_coefficients(),
            Action::Quit => return false,
        }
        true
    }

    /// Load and upload a fresh scene, swapping it in only once both succeed.
    fn reload(&mut self, gpu: &mut GpuState) -> anyhow::Result<()> {
        let fresh = self.scene.reloaded()?;
        gpu.upload_scene(&fresh)?;
        self.scene = fresh;
        Ok(())
    }

    fn handle_key(&mut self, event: &KeyEvent, gpu: &mut GpuState) -> bool {
        let PhysicalKey::Code(code) = event.physical_key else {
            return true;
        };
        let pressed = event.state == ElementState::Pressed;
        if self.keys.set(code, pressed) || !pressed {
            return true;
        }
        match action_for_key(code) {
            // only nudges auto-repeat
            Some(action @ Action::Nudge(_)) => self.handle_action(action, gpu),
            Some(action) if !event.repeat => self.handle_action(action, gpu),
            _ => true,
        }
    }

    fn update(&mut self, gpu: &GpuState) {
        let now = Instant::now();
        self.stats.push(now - self.last_frame);
        self.last_frame = now;

        let movement = self.keys.movement(MOVE_SPEED, MOVE_SPEED_FAST);
        if movement != glam::Vec3::ZERO {
            self.camera.translate_local(movement);
        }

        if (now - self.last_title).as_secs_f32() >= TITLE_REFRESH_SEC {
            self.last_title = now;
            gpu.window.set_title(&overlay::title_text(
                WINDOW_TITLE,
                &self.scene.editor,
                &self.scene.coefficients,
                self.scene.is_edited(),
                self.stats.average_ms(),
                self.stats.fps(),
            ));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = Scene::load(&cli.scene_config()).context("Could not initialize scene")?;
    if cli.print {
        scene.log_coefficients();
        return Ok(());
    }

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(cli.width, cli.height))
        .build(&event_loop)
        .context("window")?;

    let mut gpu = pollster::block_on(GpuState::new(&window)).context("gpu")?;
    gpu.upload_scene(&scene)?;
    let mut app = App::new(scene);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if !app.handle_key(&event, &mut gpu) {
                    elwt.exit();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.look.set_button(state == ElementState::Pressed),
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                if let Some(delta) = app.look.cursor_moved(pos) {
                    app.camera.look(delta.x, delta.y);
                }
            }
            WindowEvent::CursorLeft { .. } => app.look.cursor_left(),
            _ => {}
        },
        Event::AboutToWait => {
            app.update(&gpu);
            match gpu.render(&app.camera, &app.scene.coefficients) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
