/// Shader program bootstrapper
///
/// Reads shader source files from disk, compiles each stage, links them into
/// a single executable program, reports driver diagnostics through the log
/// channel, and releases the intermediate stage handles. The sequence matches
/// the GL object model: read -> create -> source -> compile -> check -> link
/// -> check -> delete stages.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, ShaderStage};
use crate::{lumen_debug, lumen_error, lumen_info, lumen_warn};

const LOG_SOURCE: &str = "lumen::program_loader";

/// Load, compile, and link a shader program from source files
///
/// On any failure every driver object allocated so far is released before the
/// error is returned, so no stage handles outlive the call. The program info
/// log is reported whenever it is non-empty, even when linking succeeds,
/// because drivers put warnings there.
///
/// # Arguments
///
/// * `device` - Graphics device to compile and link on
/// * `stages` - One (file path, stage kind) pair per requested stage
///
/// # Returns
///
/// The linked program handle. The caller owns it and releases it with
/// `delete_program` at shutdown.
pub fn load_program<D: GraphicsDevice>(
    device: &D,
    stages: &[(&Path, ShaderStage)],
) -> Result<D::ProgramHandle> {
    let mut compiled: Vec<D::ShaderHandle> = Vec::with_capacity(stages.len());

    for &(path, stage) in stages {
        match compile_stage(device, path, stage) {
            Ok(handle) => compiled.push(handle),
            Err(err) => {
                for handle in compiled {
                    device.delete_shader(handle);
                }
                return Err(err);
            }
        }
    }

    lumen_debug!(LOG_SOURCE, "Linking program ({} stages)", compiled.len());
    let program = match device.create_program() {
        Ok(program) => program,
        Err(err) => {
            for handle in compiled {
                device.delete_shader(handle);
            }
            return Err(err);
        }
    };

    for handle in &compiled {
        device.attach_shader(program, *handle);
    }
    device.link_program(program);

    // Drivers report link warnings here even on success
    let info_log = device.program_info_log(program);
    if !info_log.is_empty() {
        lumen_warn!(LOG_SOURCE, "Program info log:\n{}", info_log);
    }

    let linked = device.link_succeeded(program);

    // The stages are baked into the program once linked; release them either way
    for handle in compiled {
        device.delete_shader(handle);
    }

    if !linked {
        device.delete_program(program);
        return Err(Error::LinkFailed(info_log));
    }

    Ok(program)
}

/// Load and link a vertex + fragment program
///
/// # Arguments
///
/// * `device` - Graphics device to compile and link on
/// * `vertex_path` - Path to the vertex shader source
/// * `fragment_path` - Path to the fragment shader source
pub fn load_graphics_program<D: GraphicsDevice>(
    device: &D,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<D::ProgramHandle> {
    load_program(
        device,
        &[
            (vertex_path, ShaderStage::Vertex),
            (fragment_path, ShaderStage::Fragment),
        ],
    )
}

/// Load and link a standalone compute program
///
/// # Arguments
///
/// * `device` - Graphics device to compile and link on
/// * `compute_path` - Path to the compute shader source
pub fn load_compute_program<D: GraphicsDevice>(
    device: &D,
    compute_path: &Path,
) -> Result<D::ProgramHandle> {
    load_program(device, &[(compute_path, ShaderStage::Compute)])
}

/// Read one stage's source, compile it, and check the result
///
/// On compile failure the stage handle is released before returning.
fn compile_stage<D: GraphicsDevice>(
    device: &D,
    path: &Path,
    stage: ShaderStage,
) -> Result<D::ShaderHandle> {
    let source =
        fs::read_to_string(path).map_err(|err| Error::Io(format!("{}: {}", path.display(), err)))?;

    lumen_info!(
        LOG_SOURCE,
        "Compiling {} shader: {}",
        stage.name(),
        path.display()
    );

    let handle = device.create_shader(stage)?;
    device.shader_source(handle, &source);
    device.compile_shader(handle);

    if !device.compile_succeeded(handle) {
        let info_log = device.shader_info_log(handle);
        lumen_error!(
            LOG_SOURCE,
            "Failed to compile {}:\n{}",
            path.display(),
            info_log
        );
        device.delete_shader(handle);
        return Err(Error::CompileFailed(format!(
            "{}: {}",
            path.display(),
            info_log
        )));
    }

    Ok(handle)
}

#[cfg(test)]
#[path = "program_loader_tests.rs"]
mod tests;
