//! Growable native buffers for the call-and-resize protocol.
//!
//! [`NativeBuffer`] owns a raw heap region with explicit allocate /
//! reallocate / free control; [`CharBuffer`] layers a UTF-16 view with a
//! logical length and a mandatory trailing terminator on top of it. Neither
//! type is safe for concurrent mutation: the owner has exclusive access
//! between acquire and release.

pub mod pool;

use std::alloc::{alloc, dealloc, realloc, Layout};

use crate::error::{PathError, PathResult};

/// Byte capacities are always rounded up to this granularity, mirroring the
/// allocator's own bucketing so in-place growth stays likely.
pub const ALLOCATION_GRANULARITY: u64 = 256;

const ALIGN: usize = 8;

/// An owned, resizable raw memory region.
///
/// Capacity is always a multiple of [`ALLOCATION_GRANULARITY`] and is zero
/// only while no backing region is held; a zero-length native allocation is
/// never made. The region is freed on drop unless the pool adopts it first.
pub struct NativeBuffer {
    ptr: *mut u8,
    capacity: u64,
}

// The region is owned and the contract requires exclusive access for the
// buffer's whole lifetime, so moving it across threads is sound.
unsafe impl Send for NativeBuffer {}

impl NativeBuffer {
    /// An empty buffer holding no backing region.
    pub fn new() -> Self {
        NativeBuffer { ptr: std::ptr::null_mut(), capacity: 0 }
    }

    /// A buffer with at least `min` bytes of capacity.
    pub fn with_byte_capacity(min: u64) -> PathResult<Self> {
        let mut buf = NativeBuffer::new();
        buf.ensure_byte_capacity(min)?;
        Ok(buf)
    }

    pub fn byte_capacity(&self) -> u64 {
        self.capacity
    }

    /// Grows the region to at least `min` bytes. No-op when the current
    /// capacity already suffices. `min == 0` releases the backing region
    /// entirely instead of keeping a zero-length allocation around.
    pub fn ensure_byte_capacity(&mut self, min: u64) -> PathResult<()> {
        if min == 0 {
            self.release_region();
            return Ok(());
        }
        if self.capacity >= min {
            return Ok(());
        }
        let rounded = round_up(min);
        let size: usize = rounded
            .try_into()
            .map_err(|_| PathError::BufferAllocationFailure { requested: rounded })?;
        let layout = layout_for(size);
        let new_ptr = unsafe {
            if self.capacity == 0 {
                alloc(layout)
            } else {
                realloc(self.ptr, layout_for(self.capacity as usize), size)
            }
        };
        if new_ptr.is_null() {
            return Err(PathError::BufferAllocationFailure { requested: rounded });
        }
        self.ptr = new_ptr;
        self.capacity = rounded;
        Ok(())
    }

    /// The raw address of the region. Panics when no region is held.
    pub fn as_ptr(&self) -> *const u8 {
        assert!(self.capacity > 0, "NativeBuffer: address requested from a released buffer");
        self.ptr
    }

    /// Mutable raw address of the region. Panics when no region is held.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        assert!(self.capacity > 0, "NativeBuffer: address requested from a released buffer");
        self.ptr
    }

    /// Bounds-checked byte read. Out-of-range indexing is a programming
    /// error and panics.
    pub fn byte(&self, index: u64) -> u8 {
        assert!(index < self.capacity, "NativeBuffer: byte index {} out of range (capacity {})", index, self.capacity);
        unsafe { *self.ptr.add(index as usize) }
    }

    /// Bounds-checked byte write. Out-of-range indexing panics.
    pub fn set_byte(&mut self, index: u64, value: u8) {
        assert!(index < self.capacity, "NativeBuffer: byte index {} out of range (capacity {})", index, self.capacity);
        unsafe { *self.ptr.add(index as usize) = value };
    }

    fn release_region(&mut self) {
        if self.capacity > 0 {
            unsafe { dealloc(self.ptr, layout_for(self.capacity as usize)) };
            self.ptr = std::ptr::null_mut();
            self.capacity = 0;
        }
    }
}

impl Default for NativeBuffer {
    fn default() -> Self {
        NativeBuffer::new()
    }
}

impl Drop for NativeBuffer {
    fn drop(&mut self) {
        self.release_region();
    }
}

fn layout_for(size: usize) -> Layout {
    // Size is always granularity-rounded and nonzero here; the alignment is
    // a small power of two, so this cannot fail.
    Layout::from_size_align(size, ALIGN).expect("buffer layout")
}

fn round_up(bytes: u64) -> u64 {
    bytes.div_ceil(ALLOCATION_GRANULARITY) * ALLOCATION_GRANULARITY
}

/// Size of one character unit (UTF-16 code unit) in bytes.
pub const CHAR_SIZE: u64 = 2;

/// A [`NativeBuffer`] viewed as UTF-16 code units with a logical length.
///
/// `length` counts the characters in use, excluding the trailing NUL
/// terminator the buffer always reserves room for; `length <
/// char_capacity()` holds after every mutation.
pub struct CharBuffer {
    raw: NativeBuffer,
    length: u64,
}

impl CharBuffer {
    pub fn new() -> Self {
        CharBuffer { raw: NativeBuffer::new(), length: 0 }
    }

    /// A buffer able to hold `chars` characters plus the terminator.
    pub fn with_char_capacity(chars: u64) -> PathResult<Self> {
        let mut buf = CharBuffer::new();
        buf.ensure_char_capacity(chars.saturating_add(1))?;
        Ok(buf)
    }

    /// Capacity in characters.
    pub fn char_capacity(&self) -> u64 {
        self.raw.byte_capacity() / CHAR_SIZE
    }

    /// Characters in use, excluding the terminator.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Grows the underlying region to hold at least `chars` characters.
    pub fn ensure_char_capacity(&mut self, chars: u64) -> PathResult<()> {
        self.raw.ensure_byte_capacity(chars.saturating_mul(CHAR_SIZE))
    }

    /// Sets the logical length, growing capacity to `n + 1` characters if
    /// needed and writing the terminator at index `n`. Shrinking the length
    /// never shrinks capacity.
    pub fn set_length(&mut self, n: u64) -> PathResult<()> {
        self.ensure_char_capacity(n + 1)?;
        unsafe { *(self.raw.as_mut_ptr() as *mut u16).add(n as usize) = 0 };
        self.length = n;
        Ok(())
    }

    /// Bounds-checked character read; panics out of range.
    pub fn char_at(&self, index: u64) -> u16 {
        assert!(
            index < self.char_capacity(),
            "CharBuffer: char index {} out of range (capacity {})",
            index,
            self.char_capacity()
        );
        unsafe { *(self.raw.as_ptr() as *const u16).add(index as usize) }
    }

    /// Bounds-checked character write; panics out of range.
    pub fn set_char(&mut self, index: u64, value: u16) {
        assert!(
            index < self.char_capacity(),
            "CharBuffer: char index {} out of range (capacity {})",
            index,
            self.char_capacity()
        );
        unsafe { *(self.raw.as_mut_ptr() as *mut u16).add(index as usize) = value };
    }

    /// Raw pointer handed to native calls. Panics when no region is held.
    pub fn as_mut_ptr(&mut self) -> *mut u16 {
        self.raw.as_mut_ptr() as *mut u16
    }

    /// The characters in use.
    pub fn as_slice(&self) -> &[u16] {
        if self.length == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.raw.as_ptr() as *const u16, self.length as usize) }
    }

    /// Copies a string into the buffer, NUL-terminated, updating the length.
    pub fn fill_from_str(&mut self, s: &str) -> PathResult<()> {
        let units = s.encode_utf16().count() as u64;
        self.ensure_char_capacity(units + 1)?;
        let ptr = self.raw.as_mut_ptr() as *mut u16;
        for (i, unit) in s.encode_utf16().enumerate() {
            unsafe { *ptr.add(i) = unit };
        }
        unsafe { *ptr.add(units as usize) = 0 };
        self.length = units;
        Ok(())
    }

    /// Materializes the characters in use as a `String`.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_slice())
    }

    /// Clears the logical length for reuse by the next acquirer. Keeps the
    /// backing region.
    pub fn reset(&mut self) {
        self.length = 0;
        if self.char_capacity() > 0 {
            self.set_char(0, 0);
        }
    }
}

impl Default for CharBuffer {
    fn default() -> Self {
        CharBuffer::new()
    }
}
