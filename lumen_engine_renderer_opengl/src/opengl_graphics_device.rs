/// OpenGlGraphicsDevice - glow implementation of the GraphicsDevice trait
///
/// Wraps the glow function table. The trait methods map one-to-one onto the
/// GL shader/program object calls; the extra helpers cover the fixed demo
/// render loop (static mesh upload, uniforms, clear/draw).

use glam::Vec2;
use glow::HasContext;

use lumen_engine::lumen::gpu::{GraphicsDevice, ShaderStage};
use lumen_engine::lumen::{Error, Result};

/// OpenGL graphics device
pub struct OpenGlGraphicsDevice {
    gl: glow::Context,
}

/// A VAO + VBO pair holding immutable vertex positions (vec3 at location 0)
#[derive(Debug, Clone, Copy)]
pub struct StaticMesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
}

fn stage_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Compute => glow::COMPUTE_SHADER,
    }
}

impl OpenGlGraphicsDevice {
    /// Wrap a loaded glow function table
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Upload vertex positions (3 floats per vertex) into a fresh VAO + VBO
    ///
    /// # Arguments
    ///
    /// * `positions` - Tightly packed x/y/z triples
    pub fn create_static_mesh(&self, positions: &[f32]) -> Result<StaticMesh> {
        unsafe {
            let vao = self.gl.create_vertex_array().map_err(Error::BackendError)?;
            let vbo = self.gl.create_buffer().map_err(Error::BackendError)?;

            self.gl.bind_vertex_array(Some(vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(positions),
                glow::STATIC_DRAW,
            );

            // Matches `layout(location = 0) in vec3 position` in the shaders
            self.gl.enable_vertex_attrib_array(0);
            self.gl
                .vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);

            self.gl.bind_vertex_array(None);

            Ok(StaticMesh {
                vao,
                vbo,
                vertex_count: (positions.len() / 3) as i32,
            })
        }
    }

    /// Release a mesh's GPU objects
    pub fn destroy_static_mesh(&self, mesh: StaticMesh) {
        unsafe {
            self.gl.delete_buffer(mesh.vbo);
            self.gl.delete_vertex_array(mesh.vao);
        }
    }

    /// Bind (or unbind) a program for subsequent draws and uniform updates
    pub fn use_program(&self, program: Option<glow::NativeProgram>) {
        unsafe {
            self.gl.use_program(program);
        }
    }

    /// Set a float uniform on the currently bound program
    pub fn set_uniform_f32(&self, program: glow::NativeProgram, name: &str, value: f32) {
        unsafe {
            let location = self.gl.get_uniform_location(program, name);
            self.gl.uniform_1_f32(location.as_ref(), value);
        }
    }

    /// Set a vec2 uniform on the currently bound program
    pub fn set_uniform_vec2(&self, program: glow::NativeProgram, name: &str, value: Vec2) {
        unsafe {
            let location = self.gl.get_uniform_location(program, name);
            self.gl.uniform_2_f32(location.as_ref(), value.x, value.y);
        }
    }

    /// Set the clear color for subsequent `clear` calls
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            self.gl.clear_color(r, g, b, a);
        }
    }

    /// Clear the color buffer
    pub fn clear(&self) {
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Update the viewport after a window resize
    pub fn set_viewport(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    /// Draw a static mesh as triangles with the currently bound program
    pub fn draw_mesh(&self, mesh: &StaticMesh) {
        unsafe {
            self.gl.bind_vertex_array(Some(mesh.vao));
            self.gl.draw_arrays(glow::TRIANGLES, 0, mesh.vertex_count);
        }
    }
}

impl GraphicsDevice for OpenGlGraphicsDevice {
    type ShaderHandle = glow::NativeShader;
    type ProgramHandle = glow::NativeProgram;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::NativeShader> {
        unsafe { self.gl.create_shader(stage_type(stage)) }.map_err(Error::BackendError)
    }

    fn shader_source(&self, shader: glow::NativeShader, source: &str) {
        unsafe {
            self.gl.shader_source(shader, source);
        }
    }

    fn compile_shader(&self, shader: glow::NativeShader) {
        unsafe {
            self.gl.compile_shader(shader);
        }
    }

    fn compile_succeeded(&self, shader: glow::NativeShader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::NativeShader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn create_program(&self) -> Result<glow::NativeProgram> {
        unsafe { self.gl.create_program() }.map_err(Error::BackendError)
    }

    fn attach_shader(&self, program: glow::NativeProgram, shader: glow::NativeShader) {
        unsafe {
            self.gl.attach_shader(program, shader);
        }
    }

    fn link_program(&self, program: glow::NativeProgram) {
        unsafe {
            self.gl.link_program(program);
        }
    }

    fn link_succeeded(&self, program: glow::NativeProgram) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::NativeProgram) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_shader(&self, shader: glow::NativeShader) {
        unsafe {
            self.gl.delete_shader(shader);
        }
    }

    fn delete_program(&self, program: glow::NativeProgram) {
        unsafe {
            self.gl.delete_program(program);
        }
    }
}
