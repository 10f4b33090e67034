/*!
# Lumen GL Engine

Core traits and types for the Lumen GL demo engine.

This crate provides the platform-agnostic API for loading GPU shader
programs. The driver boundary is the [`GraphicsDevice`](graphics_device::GraphicsDevice)
trait; backend implementations (OpenGL via `lumen_engine_renderer_opengl`)
provide the concrete handles, and the program loader drives the
compile/link/release sequence on top of it.

## Architecture

- **GraphicsDevice**: driver-level shader and program operations
- **program_loader**: reads shader sources from disk, compiles and links
  them into an executable program, reporting driver diagnostics
- **FrameStats**: frame-timing statistics for the demo title overlay
- **log**: engine logging system with a swappable `Logger`
*/

// Internal modules
mod error;
pub mod frame_stats;
pub mod graphics_device;
pub mod log;

// Main lumen namespace module
pub mod lumen {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Graphics device sub-module with the driver seam and program loader
    pub mod gpu {
        pub use crate::graphics_device::*;
    }

    // Frame-timing statistics sub-module
    pub mod stats {
        pub use crate::frame_stats::*;
    }
}
