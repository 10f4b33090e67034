/// GraphicsDevice trait - driver-level shader and program operations

use std::fmt;

use crate::error::Result;
use crate::graphics_device::ShaderStage;

/// Driver boundary for shader compilation and program linking
///
/// Implemented by backend-specific devices (e.g., OpenGlGraphicsDevice).
/// Handles are opaque driver identifiers; the caller owns them and must
/// release them explicitly with `delete_shader` / `delete_program`.
///
/// The method set is exactly the sequence the program loader drives:
/// create-shader, set-source, compile, query-status, query-log,
/// create-program, attach, link, query-status, query-log, delete-shader,
/// delete-program.
pub trait GraphicsDevice {
    /// Opaque handle for one compiled (or compiling) shader stage
    type ShaderHandle: Copy + Eq + fmt::Debug;

    /// Opaque handle for a linked, executable program
    type ProgramHandle: Copy + Eq + fmt::Debug;

    /// Allocate a shader stage handle
    ///
    /// # Arguments
    ///
    /// * `stage` - Stage kind (vertex, fragment, compute)
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::ShaderHandle>;

    /// Submit source text for a shader stage
    fn shader_source(&self, shader: Self::ShaderHandle, source: &str);

    /// Request compilation of a shader stage
    fn compile_shader(&self, shader: Self::ShaderHandle);

    /// Query whether the last compilation of this stage succeeded
    fn compile_succeeded(&self, shader: Self::ShaderHandle) -> bool;

    /// Fetch the driver's diagnostic log for a shader stage
    fn shader_info_log(&self, shader: Self::ShaderHandle) -> String;

    /// Allocate a program handle
    fn create_program(&self) -> Result<Self::ProgramHandle>;

    /// Attach a compiled stage to a program
    fn attach_shader(&self, program: Self::ProgramHandle, shader: Self::ShaderHandle);

    /// Request linking of all attached stages
    fn link_program(&self, program: Self::ProgramHandle);

    /// Query whether the last link of this program succeeded
    fn link_succeeded(&self, program: Self::ProgramHandle) -> bool;

    /// Fetch the driver's diagnostic log for a program
    ///
    /// May be non-empty even after a successful link (warnings).
    fn program_info_log(&self, program: Self::ProgramHandle) -> String;

    /// Release a shader stage handle
    fn delete_shader(&self, shader: Self::ShaderHandle);

    /// Release a program handle
    fn delete_program(&self, program: Self::ProgramHandle);
}
