//! Dummy graphics device for testing and headless use.
//!
//! Allocates handles, records every call, and retains uploaded bytes so
//! tests can verify the exact operation sequence and payloads without GPU
//! hardware. Allocation failures can be injected to exercise error paths.

use std::collections::HashMap;

use crate::device::{BufferHandle, BufferTarget, GraphicsDevice, VertexArrayHandle};
use crate::error::DeviceError;
use crate::layout::VertexAttribute;

/// One recorded device call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateVertexArray(VertexArrayHandle),
    BindVertexArray(Option<VertexArrayHandle>),
    CreateBuffer(BufferHandle),
    BindBuffer(BufferTarget, Option<BufferHandle>),
    Upload {
        target: BufferTarget,
        buffer: BufferHandle,
        len: usize,
    },
    DescribeAttribute(VertexAttribute),
    EnableAttribute(u32),
}

/// Command-recording device.
#[derive(Debug, Default)]
pub struct DummyDevice {
    next_handle: u64,
    commands: Vec<Command>,
    buffer_data: HashMap<u64, Vec<u8>>,
    bound_vertex_array: Option<VertexArrayHandle>,
    bound_array: Option<BufferHandle>,
    bound_element_array: Option<BufferHandle>,
    allocations_left: Option<u32>,
}

impl DummyDevice {
    /// Create a new dummy device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the next `count` allocations succeed, then fail every
    /// subsequent `create_*` call with [`DeviceError::OutOfMemory`].
    pub fn fail_allocations_after(&mut self, count: u32) {
        self.allocations_left = Some(count);
    }

    /// All recorded calls, in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Bytes uploaded to the given buffer, if any.
    pub fn buffer_data(&self, buffer: BufferHandle) -> Option<&[u8]> {
        self.buffer_data.get(&buffer.raw()).map(|v| v.as_slice())
    }

    /// The currently bound vertex array, if any.
    pub fn bound_vertex_array(&self) -> Option<VertexArrayHandle> {
        self.bound_vertex_array
    }

    /// The buffer currently bound at `target`, if any.
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<BufferHandle> {
        match target {
            BufferTarget::Array => self.bound_array,
            BufferTarget::ElementArray => self.bound_element_array,
        }
    }

    fn allocate(&mut self) -> Result<u64, DeviceError> {
        if let Some(left) = &mut self.allocations_left {
            if *left == 0 {
                return Err(DeviceError::OutOfMemory);
            }
            *left -= 1;
        }
        self.next_handle += 1;
        Ok(self.next_handle)
    }
}

impl GraphicsDevice for DummyDevice {
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, DeviceError> {
        let handle = VertexArrayHandle::from_raw(self.allocate()?);
        log::trace!("DummyDevice: created vertex array {}", handle.raw());
        self.commands.push(Command::CreateVertexArray(handle));
        Ok(handle)
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) {
        self.bound_vertex_array = vertex_array;
        self.commands.push(Command::BindVertexArray(vertex_array));
    }

    fn create_buffer(&mut self) -> Result<BufferHandle, DeviceError> {
        let handle = BufferHandle::from_raw(self.allocate()?);
        log::trace!("DummyDevice: created buffer {}", handle.raw());
        self.commands.push(Command::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) {
        match target {
            BufferTarget::Array => self.bound_array = buffer,
            BufferTarget::ElementArray => self.bound_element_array = buffer,
        }
        self.commands.push(Command::BindBuffer(target, buffer));
    }

    fn upload(&mut self, target: BufferTarget, data: &[u8]) -> Result<(), DeviceError> {
        let Some(buffer) = self.bound_buffer(target) else {
            return Err(DeviceError::UploadFailed(format!(
                "no buffer bound at {target:?}"
            )));
        };
        log::trace!(
            "DummyDevice: upload {} bytes to buffer {}",
            data.len(),
            buffer.raw()
        );
        self.buffer_data.insert(buffer.raw(), data.to_vec());
        self.commands.push(Command::Upload {
            target,
            buffer,
            len: data.len(),
        });
        Ok(())
    }

    fn describe_attribute(&mut self, attribute: &VertexAttribute) {
        self.commands.push(Command::DescribeAttribute(*attribute));
    }

    fn enable_attribute(&mut self, slot: u32) {
        self.commands.push(Command::EnableAttribute(slot));
    }
}
