//! Compute-shader demo
//!
//! Loads and links a standalone compute shader (OpenGL 4.3 context), then
//! idles in the event loop until Escape is pressed or the window closes.
//! No dispatch, no drawing; this variant only exercises the program
//! bootstrap path for a compute stage.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use lumen_engine::lumen::gpu::{load_compute_program, GraphicsDevice};
use lumen_engine::lumen::Result;
use lumen_engine::{lumen_error, lumen_info};
use lumen_engine_renderer_opengl::glow;
use lumen_engine_renderer_opengl::{ContextConfig, OpenGlContext, OpenGlGraphicsDevice};

const LOG_SOURCE: &str = "lumen::demo::compute";

fn shader_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders").join(name)
}

struct ComputeState {
    // Kept alive for the lifetime of the app; the context owns the window
    _context: OpenGlContext,
    device: OpenGlGraphicsDevice,
    program: glow::NativeProgram,
}

#[derive(Default)]
struct ComputeApp {
    state: Option<ComputeState>,
    init_failed: bool,
}

impl ComputeApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = ContextConfig {
            title: "Lumen GL compute".to_string(),
            // Compute shaders need GL 4.3
            gl_version: (4, 3),
            ..ContextConfig::default()
        };

        let (context, gl) = OpenGlContext::new(event_loop, &config)?;
        let device = OpenGlGraphicsDevice::new(gl);

        let program = load_compute_program(&device, &shader_path("particle.comp"))?;
        lumen_info!(LOG_SOURCE, "Compute program linked");

        self.state = Some(ComputeState {
            _context: context,
            device,
            program,
        });

        Ok(())
    }

    fn shutdown(&mut self) {
        if let Some(state) = self.state.take() {
            state.device.delete_program(state.program);
        }
    }
}

impl ApplicationHandler for ComputeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
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
    // Nothing animates; sleep until an event arrives
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ComputeApp::default();
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
