/// Mock graphics device for unit tests (no GPU required)
///
/// This mock device allows testing the program loader without a real GPU or
/// GL context. It hands out `u32` handles, tracks which handles are still
/// allocated (for leak assertions), "compiles" by scanning the source for a
/// deliberate error marker, and supports scripted link failures and link
/// warnings.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, ShaderStage};

/// Sources containing this marker fail to "compile"
pub const COMPILE_ERROR_MARKER: &str = "!ERROR";

#[derive(Debug)]
struct MockShaderState {
    stage: ShaderStage,
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct MockProgramState {
    attached: Vec<u32>,
    linked: bool,
}

#[derive(Debug, Default)]
struct MockState {
    next_handle: u32,
    shaders: HashMap<u32, MockShaderState>,
    programs: HashMap<u32, MockProgramState>,
    fail_next_link: bool,
    link_log: String,
}

/// Mock device with interior-mutable state behind a Mutex
#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    state: Mutex<MockState>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next link to fail with the given log
    pub fn fail_next_link(&self, log: &str) {
        let mut state = self.state.lock().unwrap();
        state.fail_next_link = true;
        state.link_log = log.to_string();
    }

    /// Script a warning to appear in the program info log of the next link
    /// (the link itself still succeeds)
    pub fn warn_on_next_link(&self, log: &str) {
        let mut state = self.state.lock().unwrap();
        state.link_log = log.to_string();
    }

    /// Number of shader stage handles currently allocated
    pub fn live_shader_count(&self) -> usize {
        self.state.lock().unwrap().shaders.len()
    }

    /// Number of program handles currently allocated
    pub fn live_program_count(&self) -> usize {
        self.state.lock().unwrap().programs.len()
    }

    /// Stage kind of a live shader handle (test inspection)
    pub fn shader_stage(&self, shader: u32) -> Option<ShaderStage> {
        self.state
            .lock()
            .unwrap()
            .shaders
            .get(&shader)
            .map(|s| s.stage)
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    type ShaderHandle = u32;
    type ProgramHandle = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32> {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let handle = state.next_handle;
        state.shaders.insert(
            handle,
            MockShaderState {
                stage,
                source: String::new(),
                compiled: false,
            },
        );
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(entry) = state.shaders.get_mut(&shader) {
            entry.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        let mut state = self.state.lock().unwrap();
        if let Some(entry) = state.shaders.get_mut(&shader) {
            entry.compiled = !entry.source.contains(COMPILE_ERROR_MARKER);
        }
    }

    fn compile_succeeded(&self, shader: u32) -> bool {
        let state = self.state.lock().unwrap();
        state.shaders.get(&shader).map_or(false, |s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let state = self.state.lock().unwrap();
        match state.shaders.get(&shader) {
            Some(entry) if !entry.compiled => format!(
                "0:1(1): error: syntax error near '{}'",
                COMPILE_ERROR_MARKER
            ),
            _ => String::new(),
        }
    }

    fn create_program(&self) -> Result<u32> {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let handle = state.next_handle;
        state.programs.insert(handle, MockProgramState::default());
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.lock().unwrap();
        if !state.shaders.contains_key(&shader) {
            return;
        }
        if let Some(entry) = state.programs.get_mut(&program) {
            entry.attached.push(shader);
        }
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state.lock().unwrap();
        let forced_failure = std::mem::take(&mut state.fail_next_link);
        let all_compiled = state
            .programs
            .get(&program)
            .map_or(false, |p| !p.attached.is_empty())
            && state.programs[&program]
                .attached
                .iter()
                .all(|s| state.shaders.get(s).map_or(false, |sh| sh.compiled));
        if let Some(entry) = state.programs.get_mut(&program) {
            entry.linked = all_compiled && !forced_failure;
        }
    }

    fn link_succeeded(&self, program: u32) -> bool {
        let state = self.state.lock().unwrap();
        state.programs.get(&program).map_or(false, |p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        let mut state = self.state.lock().unwrap();
        let log = std::mem::take(&mut state.link_log);
        match state.programs.get(&program) {
            Some(entry) if !entry.linked && log.is_empty() => "error: link failed".to_string(),
            Some(_) => log,
            None => String::new(),
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.state.lock().unwrap().shaders.remove(&shader);
    }

    fn delete_program(&self, program: u32) {
        self.state.lock().unwrap().programs.remove(&program);
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
