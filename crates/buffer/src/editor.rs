// Chunk: docs/chunks/buffer_registry - Editor-owned buffers addressed by id

//! The buffer registry.
//!
//! The [`Editor`] owns every [`Buffer`]. Views and hosts refer to buffers by
//! [`BufferId`] and resolve them here on each use, so destroying a buffer
//! can never leave a dangling reference behind.

use std::path::Path;

use crate::buffer::{Buffer, BufferOptions};
use crate::error::EditorError;
use crate::types::BufferId;
use crate::view::BufferView;

/// Owner of all open buffers.
#[derive(Debug, Default)]
pub struct Editor {
    buffers: Vec<Buffer>,
    last_id: u64,
    options: BufferOptions,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor whose new buffers use `options`.
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Creates an empty buffer with a fresh id.
    pub fn create_buffer(&mut self) -> &mut Buffer {
        self.last_id += 1;
        let id = BufferId(self.last_id);
        tracing::debug!(buffer = %id, "created buffer");
        let index = self.buffers.len();
        self.buffers.push(Buffer::with_options(id, self.options));
        &mut self.buffers[index]
    }

    /// Creates a buffer and loads `path` into it.
    ///
    /// The buffer is destroyed again if loading fails.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<BufferId, EditorError> {
        let buffer = self.create_buffer();
        let id = buffer.id();
        if let Err(err) = buffer.load_from_file(path) {
            self.destroy_buffer(id);
            return Err(err.into());
        }
        Ok(id)
    }

    pub fn find_buffer(&self, id: BufferId) -> Option<&Buffer> {
        self.buffers.iter().find(|buffer| buffer.id() == id)
    }

    pub fn find_buffer_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
        self.buffers.iter_mut().find(|buffer| buffer.id() == id)
    }

    /// Removes a buffer. Returns false if no buffer has that id.
    pub fn destroy_buffer(&mut self, id: BufferId) -> bool {
        match self.buffers.iter().position(|buffer| buffer.id() == id) {
            Some(index) => {
                self.buffers.remove(index);
                tracing::debug!(buffer = %id, "destroyed buffer");
                true
            }
            None => false,
        }
    }

    /// Resolves the buffer a view is showing.
    pub fn buffer_for(&self, view: &BufferView) -> Result<&Buffer, EditorError> {
        self.find_buffer(view.buffer_id()).ok_or_else(|| {
            tracing::warn!(buffer = %view.buffer_id(), "view refers to a missing buffer");
            EditorError::BufferNotFound(view.buffer_id())
        })
    }

    /// Re-lexes every buffer whose syntax is stale.
    ///
    /// Returns how many buffers were lexed.
    pub fn tick(&mut self) -> usize {
        self.buffers
            .iter_mut()
            .map(|buffer| buffer.refresh_syntax())
            .filter(|&lexed| lexed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buffer> {
        self.buffers.iter()
    }
}
