use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glade_input::{Action, InputLatch, Key, PointerLock};
use glade_kernel::{FrameClock, Player, PlayerEvent};
use glade_render::{FirstPersonCamera, SPAWN_POINT, Scene};
use glade_render_wgpu::{DEFAULT_MSAA_SAMPLES, GpuContext, WgpuRenderer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "glade-desktop", about = "First-person walk around a green cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "75")]
    fov: f32,

    /// Mouse-look sensitivity multiplier
    #[arg(long, default_value = "1.0")]
    look_speed: f32,

    /// Upper bound on multisample antialiasing samples (1 disables it)
    #[arg(
        long,
        default_value_t = DEFAULT_MSAA_SAMPLES,
        value_parser = clap::value_parser!(u32).range(1..=16)
    )]
    msaa: u32,
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::KeyW => Key::KeyW,
        KeyCode::KeyA => Key::KeyA,
        KeyCode::KeyS => Key::KeyS,
        KeyCode::KeyD => Key::KeyD,
        KeyCode::Space => Key::Space,
        _ => return None,
    };
    Some(key)
}

/// Application state.
struct AppState {
    scene: Scene,
    camera: FirstPersonCamera,
    player: Player,
    latch: InputLatch,
    pointer: PointerLock,
    clock: FrameClock,
    show_debug: bool,
    jumps: u64,
    last_event: Option<PlayerEvent>,
}

impl AppState {
    fn new(cli: &Cli) -> Self {
        let mut camera = FirstPersonCamera::new(
            cli.fov,
            cli.width as f32 / cli.height.max(1) as f32,
            0.1,
            1000.0,
        )
        .with_position(SPAWN_POINT);
        camera.look_speed = cli.look_speed;

        Self {
            scene: Scene::meadow(),
            camera,
            player: Player::new(),
            latch: InputLatch::new(),
            pointer: PointerLock::default(),
            clock: FrameClock::new(),
            show_debug: false,
            jumps: 0,
            last_event: None,
        }
    }

    /// Advance the player by the wall time since the previous frame.
    fn update(&mut self) {
        let delta = self.clock.delta();
        self.advance(delta);
    }

    fn advance(&mut self, delta: f32) {
        self.player.tick(self.latch.intent(), delta, &mut self.camera);
        for event in self.player.drain_events() {
            if let PlayerEvent::Jumped { .. } = event {
                self.jumps += 1;
            }
            self.last_event = Some(event);
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) {
        if !pressed {
            self.latch.key_up(key);
            return;
        }
        if self.latch.key_down(key) == Action::Jump {
            self.player.jump();
        }
    }

    fn draw_ui(&self, ctx: &EguiContext) {
        if !self.pointer.is_locked() {
            egui::Area::new(egui::Id::new("lock_prompt"))
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new("Click to look around")
                            .heading()
                            .color(egui::Color32::WHITE),
                    );
                });
        }

        if !self.show_debug {
            return;
        }

        let p = self.camera.position;
        let v = self.player.state().velocity;
        egui::Window::new("Debug")
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
                ui.label(format!(
                    "Yaw: {:.1}  Pitch: {:.1}",
                    self.camera.yaw.to_degrees(),
                    self.camera.pitch.to_degrees()
                ));
                ui.label(format!("Velocity: ({:.2}, {:.2}, {:.2})", v.x, v.y, v.z));
                ui.label(format!("Grounded: {}", self.player.is_grounded()));
                ui.label(format!("Tick: {}", self.player.tick_count()));
                ui.label(format!("Jumps: {}", self.jumps));
                if let Some(event) = self.last_event {
                    ui.label(format!("Last event: {event:?}"));
                }
                ui.label(format!("FPS: {:.0}", self.clock.fps()));
                ui.separator();
                ui.small("WASD/Arrows: Move | Space: Jump | Esc: Release | F1: Toggle");
            });
    }
}

/// Everything that only exists once a window is open.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: WgpuRenderer,
    egui_ctx: EguiContext,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, width: u32, height: u32, msaa: u32) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Glade")
            .with_inner_size(PhysicalSize::new(width, height));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height, msaa)?;
        let renderer = WgpuRenderer::new(
            &gpu.device,
            gpu.surface_format(),
            size.width,
            size.height,
            gpu.sample_count(),
        );

        let egui_ctx = EguiContext::default();
        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        // The overlay draws single-sampled onto the already resolved frame.
        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.surface_format(), None, 1, false);

        Ok(Self {
            window,
            gpu,
            renderer,
            egui_ctx,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.renderer.resize(&self.gpu.device, width, height);
    }

    /// Grab and hide the cursor. Falls back to confining it where the
    /// platform cannot lock in place.
    fn grab_cursor(&self) -> bool {
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                self.window.set_cursor_visible(false);
                true
            }
            Err(e) => {
                tracing::warn!("cursor grab unavailable: {e}");
                false
            }
        }
    }

    fn release_cursor(&self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            tracing::warn!("failed to release cursor: {e}");
        }
        self.window.set_cursor_visible(true);
    }

    fn draw(&mut self, state: &AppState) {
        let Some(frame) = self.gpu.acquire() else {
            self.window.request_redraw();
            return;
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let device = &self.gpu.device;
        let queue = &self.gpu.queue;
        self.renderer.render(device, queue, &view, &state.camera, &state.scene);

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| state.draw_ui(ctx));
        self.egui_winit.handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = self.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        frame.present();
        self.window.request_redraw();
    }
}

struct GladeApp {
    state: AppState,
    initial_size: (u32, u32),
    msaa: u32,
    gfx: Option<Graphics>,
}

impl GladeApp {
    fn new(cli: &Cli) -> Self {
        Self {
            state: AppState::new(cli),
            initial_size: (cli.width, cli.height),
            msaa: cli.msaa,
            gfx: None,
        }
    }
}

fn release_pointer(state: &mut AppState, gfx: &Graphics) {
    if state.pointer.release() {
        gfx.release_cursor();
    }
}

impl ApplicationHandler for GladeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        let (width, height) = self.initial_size;
        match Graphics::new(event_loop, width, height, self.msaa) {
            Ok(gfx) => {
                let (w, h) = gfx.gpu.size();
                self.state.camera.set_aspect(w, h);
                // Start timing once the window is up, not at process start.
                self.state.clock = FrameClock::new();
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        let response = gfx.egui_winit.on_window_event(&gfx.window, &event);
        // Key-ups always reach the latch so held directions cannot stick.
        if response.consumed && !matches!(event, WindowEvent::KeyboardInput { .. }) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gfx.resize(new_size.width, new_size.height);
                self.state.camera.set_aspect(new_size.width, new_size.height);
            }
            WindowEvent::Focused(false) => {
                self.state.latch.release_all();
                release_pointer(&mut self.state, gfx);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                match code {
                    KeyCode::Escape if pressed => release_pointer(&mut self.state, gfx),
                    KeyCode::F1 if pressed && !repeat => {
                        self.state.show_debug = !self.state.show_debug;
                    }
                    _ => {
                        if let Some(key) = map_key(code) {
                            self.state.handle_key(key, pressed);
                        }
                    }
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if !self.state.pointer.is_locked() && gfx.grab_cursor() {
                    self.state.pointer.request();
                }
            }
            WindowEvent::RedrawRequested => {
                self.state.update();
                gfx.draw(&self.state);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if let Some((dx, dy)) = self.state.pointer.look_delta(delta.0, delta.1) {
                self.state.camera.rotate(dx, dy);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("glade-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GladeApp::new(&cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
