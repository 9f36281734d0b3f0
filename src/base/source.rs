//! Source buffer storage.
//!
//! Buffers are fully materialised in memory before any build runs and are
//! immutable once added. The store is append-only, so a [`BufferId`] stays
//! valid for the lifetime of the manager.

use std::sync::Arc;

use text_size::TextSize;

use super::{BufferId, Position};

/// One stored, addressable range of source bytes.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    id: BufferId,
    name: Arc<str>,
    text: Arc<str>,
    line_starts: Vec<TextSize>,
}

impl SourceBuffer {
    fn new(id: BufferId, name: Arc<str>, text: Arc<str>) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::new(idx as u32 + 1)),
        );
        Self {
            id,
            name,
            text,
            line_starts,
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// The name the buffer was registered under (usually a path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total size of the buffer in bytes.
    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert a byte offset into a 0-indexed line/column position.
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to the
    /// end; offsets inside a multi-byte character clamp to its start.
    pub fn position(&self, offset: TextSize) -> Position {
        let mut end = usize::from(offset.min(self.len()));
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        let offset = TextSize::new(end as u32);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = usize::from(self.line_starts[line]);
        let column = self.text[line_start..end].chars().count();
        Position::new(line, column)
    }
}

/// The buffer store queried by the frontend.
#[derive(Debug, Default)]
pub struct SourceManager {
    buffers: Vec<SourceBuffer>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new buffer and return its handle.
    pub fn add_buffer(&mut self, name: impl Into<Arc<str>>, text: impl Into<Arc<str>>) -> BufferId {
        let id = BufferId::new(self.buffers.len() as u32);
        self.buffers.push(SourceBuffer::new(id, name.into(), text.into()));
        id
    }

    pub fn buffer(&self, id: BufferId) -> Option<&SourceBuffer> {
        self.buffers.get(id.index())
    }

    /// Text of a buffer, or `None` for an unknown handle.
    pub fn text(&self, id: BufferId) -> Option<&str> {
        self.buffer(id).map(SourceBuffer::text)
    }

    /// Size of a buffer in bytes, or `None` for an unknown handle.
    pub fn len(&self, id: BufferId) -> Option<TextSize> {
        self.buffer(id).map(SourceBuffer::len)
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceBuffer> {
        self.buffers.iter()
    }
}
