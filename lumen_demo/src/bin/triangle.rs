//! Triangle demo
//!
//! Renders a static triangle with a vertex/fragment program loaded from
//! disk, updates the `time` and `resolution` uniforms every frame, and
//! shows frame-timing statistics in the window title.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use lumen_engine::lumen::gpu::{load_graphics_program, GraphicsDevice};
use lumen_engine::lumen::stats::FrameStats;
use lumen_engine::lumen::Result;
use lumen_engine::{lumen_error, lumen_info};
use lumen_engine_renderer_opengl::glow;
use lumen_engine_renderer_opengl::{ContextConfig, OpenGlContext, OpenGlGraphicsDevice, StaticMesh};

const LOG_SOURCE: &str = "lumen::demo::triangle";

const WINDOW_TITLE: &str = "Lumen GL triangle";

/// One vec3 position per vertex
const TRIANGLE_POSITIONS: [f32; 9] = [
    -1.0, -1.0, 0.0, //
    1.0, -1.0, 0.0, //
    0.0, 1.0, 0.0, //
];

fn shader_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders").join(name)
}

/// Everything created once the event loop hands us a window
struct RenderState {
    context: OpenGlContext,
    device: OpenGlGraphicsDevice,
    program: glow::NativeProgram,
    mesh: StaticMesh,
    started: Instant,
    last_frame: Instant,
    stats: FrameStats,
    resolution: Vec2,
}

#[derive(Default)]
struct TriangleApp {
    state: Option<RenderState>,
    init_failed: bool,
}

impl TriangleApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = ContextConfig {
            title: WINDOW_TITLE.to_string(),
            ..ContextConfig::default()
        };

        let (context, gl) = OpenGlContext::new(event_loop, &config)?;
        let device = OpenGlGraphicsDevice::new(gl);

        let program = load_graphics_program(
            &device,
            &shader_path("triangle.vert"),
            &shader_path("triangle.frag"),
        )?;

        let mesh = device.create_static_mesh(&TRIANGLE_POSITIONS)?;
        device.set_clear_color(3.0 / 255.0, 72.0 / 255.0, 133.0 / 255.0, 0.0);

        lumen_info!(LOG_SOURCE, "Triangle demo initialized");

        let now = Instant::now();
        self.state = Some(RenderState {
            context,
            device,
            program,
            mesh,
            started: now,
            last_frame: now,
            stats: FrameStats::new(),
            resolution: Vec2::new(config.width as f32, config.height as f32),
        });

        Ok(())
    }

    fn redraw(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let now = Instant::now();
        let dt = now - state.last_frame;
        state.last_frame = now;

        if let Some(summary) = state.stats.record(dt) {
            state
                .context
                .set_title(&format!("{}: {}", WINDOW_TITLE, summary));
        }

        state.device.clear();
        state.device.use_program(Some(state.program));
        state
            .device
            .set_uniform_f32(state.program, "time", state.started.elapsed().as_secs_f32());
        state
            .device
            .set_uniform_vec2(state.program, "resolution", state.resolution);
        state.device.draw_mesh(&state.mesh);

        if let Err(err) = state.context.swap_buffers() {
            lumen_error!(LOG_SOURCE, "Presentation failed: {}", err);
        }

        state.context.request_redraw();
    }

    /// Release GPU objects before the process exits
    fn shutdown(&mut self) {
        if let Some(state) = self.state.take() {
            state.device.destroy_static_mesh(state.mesh);
            state.device.delete_program(state.program);
        }
    }
}

impl ApplicationHandler for TriangleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The context is created once; ignore later resume events
        if self.state.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            lumen_error!(LOG_SOURCE, "Initialization failed: {}", err);
            self.init_failed = true;
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit()
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = self.state.as_mut() {
                    state.context.resize(size.width, size.height);
                    state
                        .device
                        .set_viewport(size.width as i32, size.height as i32);
                    state.resolution = Vec2::new(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn main() -> ExitCode {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            lumen_error!(LOG_SOURCE, "Could not create event loop: {}", err);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = TriangleApp::default();
    if let Err(err) = event_loop.run_app(&mut app) {
        lumen_error!(LOG_SOURCE, "Event loop failed: {}", err);
        return ExitCode::FAILURE;
    }

    let failed = app.init_failed;
    app.shutdown();

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
