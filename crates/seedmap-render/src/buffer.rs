//! Reusable RGBA output buffer.
//!
//! The buffer only grows. A render that needs more bytes than the current
//! capacity releases the old storage and allocates exactly what it needs; a
//! smaller render reuses the existing storage and writes its prefix. An
//! allocation failure anywhere in a render releases it.

use std::collections::HashSet;

use tracing::debug;

use crate::RenderError;

/// Row-major RGBA8 pixels of the most recent render.
#[derive(Debug, Default)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// An empty buffer with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte size of a `width x height` image, if addressable.
    pub fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)
    }

    /// Makes room for a `width x height` image and returns exactly its bytes.
    ///
    /// On allocation failure the buffer is left empty.
    ///
    /// # Errors
    ///
    /// [`RenderError::TooLarge`] if the size overflows, or
    /// [`RenderError::Allocation`] if the allocator refuses.
    pub fn prepare(&mut self, width: u32, height: u32) -> Result<&mut [u8], RenderError> {
        let needed = Self::byte_len(width, height).ok_or(RenderError::TooLarge { width, height })?;

        if needed > self.bytes.len() {
            let previous = self.bytes.len();
            self.bytes = Vec::new();
            self.width = 0;
            self.height = 0;

            let mut grown = Vec::new();
            grown
                .try_reserve_exact(needed)
                .map_err(|source| RenderError::Allocation {
                    bytes: needed,
                    source,
                })?;
            grown.resize(needed, 0);
            self.bytes = grown;
            debug!(previous, capacity = needed, "grew pixel buffer");
        }

        self.width = width;
        self.height = height;
        Ok(&mut self.bytes[..needed])
    }

    /// Drops the storage, leaving the buffer as if newly created.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Bytes currently allocated. Never shrinks except through
    /// [`release`](Self::release).
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// `(width, height)` of the last prepared image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes of the last prepared image.
    pub fn as_bytes(&self) -> &[u8] {
        // The stored dimensions always fit within the allocation.
        let len = Self::byte_len(self.width, self.height).unwrap_or(0);
        &self.bytes[..len]
    }

    /// Start of the storage, or null if nothing has been allocated.
    ///
    /// Valid until the next call that grows the buffer.
    pub fn as_ptr(&self) -> *const u8 {
        if self.bytes.is_empty() {
            std::ptr::null()
        } else {
            self.bytes.as_ptr()
        }
    }

    /// RGBA at `(x, y)` of the last image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.bytes[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of distinct RGB colors in the last image.
    pub fn unique_color_count(&self) -> usize {
        self.as_bytes()
            .chunks_exact(4)
            .map(|px| (px[0], px[1], px[2]))
            .collect::<HashSet<_>>()
            .len()
    }
}
