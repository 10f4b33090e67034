/// OpenGlContext - window, GL context, and surface bootstrap
///
/// Owns the winit window together with the glutin surface and current
/// context. Everything is created from an explicit `ContextConfig` passed in
/// at startup; there are no process-wide window globals.

use std::num::NonZeroU32;

use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use lumen_engine::lumen::{Error, Result};
use lumen_engine::{lumen_info, lumen_warn};

const LOG_SOURCE: &str = "lumen::opengl::Context";

/// Window and GL context configuration
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// MSAA sample count requested for the default framebuffer
    pub samples: u8,
    /// Requested OpenGL core-profile version (major, minor)
    pub gl_version: (u8, u8),
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            title: "Lumen GL".to_string(),
            samples: 4,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}

/// Window plus current GL context and surface
///
/// Single-threaded by construction: the context is made current on the
/// creating thread and all GL calls happen there.
pub struct OpenGlContext {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl OpenGlContext {
    /// Create the window, GL display, surface, and current context
    ///
    /// Returns the context alongside the loaded glow function table.
    ///
    /// # Arguments
    ///
    /// * `event_loop` - Active winit event loop to create the window on
    /// * `config` - Window and context parameters
    pub fn new(event_loop: &ActiveEventLoop, config: &ContextConfig) -> Result<(Self, glow::Context)> {
        let window_attributes = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_multisampling(config.samples);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                // Prefer the config with the most MSAA samples; the iterator
                // is guaranteed non-empty by glutin
                configs
                    .reduce(|best, candidate| {
                        if candidate.num_samples() > best.num_samples() {
                            candidate
                        } else {
                            best
                        }
                    })
                    .expect("empty GL config iterator")
            })
            .map_err(|err| {
                Error::InitializationFailed(format!("could not create window: {}", err))
            })?;

        let window = window.ok_or_else(|| {
            Error::InitializationFailed("display builder returned no window".to_string())
        })?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|err| {
                Error::InitializationFailed(format!("could not get window handle: {}", err))
            })?
            .as_raw();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let not_current_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .map_err(|err| {
                    Error::InitializationFailed(format!(
                        "could not create OpenGL {}.{} context: {}",
                        major, minor, err
                    ))
                })?
        };

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|err| {
                Error::InitializationFailed(format!("could not build surface attributes: {}", err))
            })?;

        let surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attributes)
                .map_err(|err| {
                    Error::InitializationFailed(format!("could not create surface: {}", err))
                })?
        };

        let context = not_current_context.make_current(&surface).map_err(|err| {
            Error::InitializationFailed(format!("could not make context current: {}", err))
        })?;

        if config.vsync {
            // Not fatal: some platforms refuse to change the swap interval
            if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                lumen_warn!(LOG_SOURCE, "Could not enable vsync: {}", err);
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| {
                gl_display.get_proc_address(symbol) as *const _
            })
        };

        lumen_info!(
            LOG_SOURCE,
            "Created OpenGL {}.{} context, {}x{}, {} samples",
            major,
            minor,
            config.width,
            config.height,
            gl_config.num_samples()
        );

        Ok((
            Self {
                window,
                surface,
                context,
            },
            gl,
        ))
    }

    /// Present the back buffer
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|err| Error::BackendError(format!("swap_buffers failed: {}", err)))
    }

    /// Resize the surface after a window resize event
    ///
    /// Zero-sized dimensions (minimized window) are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, width, height);
        }
    }

    /// Update the window title (frame-timing overlay)
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Ask for another redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
