/// Graphics device module - driver seam, shader stages, and program loading

// Module declarations
pub mod graphics_device;
pub mod program_loader;
pub mod shader;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use program_loader::*;
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
