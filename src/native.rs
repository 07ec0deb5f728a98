//! Call-and-resize invocation adapters.
//!
//! Wrapped native calls follow one contract: they receive a buffer and its
//! character capacity, and return either the number of characters written,
//! or a required size strictly greater than the supplied capacity ("too
//! small, retry"), or `0` with a retrievable last-error code. The adapters
//! here own the grow-and-retry loop, the error translation and the escape
//! prefix juggling for over-length inputs, so call sites stay one closure
//! long.

use std::borrow::Cow;

use crate::buffer::{pool::BufferPool, CharBuffer};
use crate::error::{validation, PathError, PathResult};
use crate::path::prefix::{add_extended_prefix, remove_extended_prefix_in_place};

/// The most recent failure code of the calling thread.
#[cfg(windows)]
pub fn last_error_code() -> u32 {
    use windows::Win32::Foundation::GetLastError;
    unsafe { GetLastError().0 }
}

/// The most recent failure code of the calling thread.
#[cfg(not(windows))]
pub fn last_error_code() -> u32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0) as u32
}

/// The shared retry loop. Returns the materialized text, or `None` when the
/// failure code was suppressed by the predicate.
fn run_resize_loop<F, I>(
    pool: &BufferPool,
    initial_chars: u64,
    mut call: F,
    ignore: I,
) -> PathResult<Option<String>>
where
    F: FnMut(&mut CharBuffer) -> u32,
    I: Fn(u32) -> bool,
{
    let mut buf = pool.acquire(initial_chars)?;
    loop {
        let capacity = buf.char_capacity();
        let reported = call(&mut buf);
        if reported == 0 {
            let code = last_error_code();
            pool.release(buf);
            if ignore(code) {
                return Ok(None);
            }
            return Err(PathError::native(code));
        }
        if u64::from(reported) > capacity {
            // "Too small" is the one reply handled locally: grow and go
            // again. The only bound on this loop is the allocator.
            tracing::debug!(required = reported, capacity, "native call wants a larger buffer");
            buf.ensure_char_capacity(u64::from(reported))?;
            continue;
        }
        buf.set_length(u64::from(reported))?;
        let text = buf.to_string_lossy();
        pool.release(buf);
        return Ok(Some(text));
    }
}

/// Retrieves a generic string result from a size-negotiating native call.
///
/// `call` gets the output buffer and reports written/required/failed per
/// the module contract; `ignore` marks failure codes that are not
/// exceptional (the result is then `Ok(None)`). When `original` is given
/// and the produced text is identical, the original is returned borrowed
/// instead of the fresh allocation.
pub fn read_string<'a, F, I>(
    pool: &BufferPool,
    original: Option<&'a str>,
    call: F,
    ignore: I,
) -> PathResult<Option<Cow<'a, str>>>
where
    F: FnMut(&mut CharBuffer) -> u32,
    I: Fn(u32) -> bool,
{
    let text = match run_resize_loop(pool, pool.default_path_capacity(), call, ignore)? {
        Some(text) => text,
        None => return Ok(None),
    };
    match original {
        Some(orig) if orig == text => Ok(Some(Cow::Borrowed(orig))),
        _ => Ok(Some(Cow::Owned(text))),
    }
}

/// Retrieves a path-shaped result from a size-negotiating native call.
///
/// An input over the legacy length limit is escaped before the call; the
/// escape prefix is stripped back out of the result only when this adapter
/// added it (a caller-supplied prefix is never touched, and an escaped UNC
/// result reconstitutes to plain `\\` spelling in place). `call` receives
/// the NUL-terminated UTF-16 input alongside the output buffer.
pub fn read_path<'a, F, I>(
    pool: &BufferPool,
    path: &'a str,
    mut call: F,
    ignore: I,
) -> PathResult<Option<Cow<'a, str>>>
where
    F: FnMut(&[u16], &mut CharBuffer) -> u32,
    I: Fn(u32) -> bool,
{
    validation::validate_path_arg(path)?;

    let working = add_extended_prefix(path, false);
    let prefix_added = matches!(working, Cow::Owned(_));
    let input: Vec<u16> = working.encode_utf16().chain(std::iter::once(0)).collect();

    let text = run_resize_loop(pool, pool.default_path_capacity(), |buf| call(&input, buf), ignore)?;
    let mut text = match text {
        Some(text) => text,
        None => return Ok(None),
    };
    if prefix_added {
        remove_extended_prefix_in_place(&mut text);
    }
    if text == path {
        Ok(Some(Cow::Borrowed(path)))
    } else {
        Ok(Some(Cow::Owned(text)))
    }
}
