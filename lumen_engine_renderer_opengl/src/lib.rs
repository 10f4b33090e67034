/*!
# Lumen GL Engine - OpenGL Renderer Backend

OpenGL implementation of the Lumen GL engine.

This crate provides the window/GL-context bootstrap (glutin + winit) and an
implementation of the `GraphicsDevice` trait using the glow bindings, plus
the small set of drawing helpers the demos need (static meshes, uniforms,
clear/draw).
*/

// OpenGL implementation modules
mod opengl_context;
mod opengl_graphics_device;

pub use opengl_context::{ContextConfig, OpenGlContext};
pub use opengl_graphics_device::{OpenGlGraphicsDevice, StaticMesh};

// Re-export glow so callers can name handle types without a direct dependency
pub use glow;
