//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using rtfhtml from editor
//! shells written in other languages such as C#, Python, and Node.js.
//!
//! A null input pointer is treated as empty input: detectors return `false`
//! and converters return an empty string. Input that is not valid UTF-8 is
//! decoded lossily.

use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::inspect::{inspect, to_json, JsonFormat};
use crate::{html_to_rtf, is_html, is_rtf, rtf_to_html, rtf_to_plain_text};

/// Result structure returned by fallible FFI functions.
#[repr(C)]
pub struct RtfhtmlResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Freed by `rtfhtml_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Freed by `rtfhtml_free_result`.
    pub error: *mut c_char,
}

impl RtfhtmlResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: into_c_string(data),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: into_c_string(message),
        }
    }
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Borrow a C string, or `None` for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a valid null-terminated string.
unsafe fn read_input<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy())
    }
}

/// Run a string conversion over a C string.
///
/// # Safety
///
/// `input` must be null or point to a valid null-terminated string.
unsafe fn convert_c(input: *const c_char, convert: fn(&str) -> String) -> *mut c_char {
    let output = match read_input(input) {
        Some(text) => convert(&text),
        None => String::new(),
    };
    into_c_string(output)
}

/// Check if content is RTF.
///
/// # Safety
///
/// The `content` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_is_rtf(content: *const c_char) -> bool {
    read_input(content).is_some_and(|text| is_rtf(&text))
}

/// Check if content is HTML.
///
/// # Safety
///
/// The `content` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_is_html(content: *const c_char) -> bool {
    read_input(content).is_some_and(|text| is_html(&text))
}

/// Convert RTF to HTML.
///
/// # Safety
///
/// The `rtf` must be null or a valid null-terminated string.
/// The returned string must be freed with `rtfhtml_free_string`.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_rtf_to_html(rtf: *const c_char) -> *mut c_char {
    convert_c(rtf, rtf_to_html)
}

/// Convert HTML to RTF.
///
/// # Safety
///
/// The `html` must be null or a valid null-terminated string.
/// The returned string must be freed with `rtfhtml_free_string`.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_html_to_rtf(html: *const c_char) -> *mut c_char {
    convert_c(html, html_to_rtf)
}

/// Reduce RTF to plain text.
///
/// # Safety
///
/// The `rtf` must be null or a valid null-terminated string.
/// The returned string must be freed with `rtfhtml_free_string`.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_rtf_to_plain_text(rtf: *const c_char) -> *mut c_char {
    convert_c(rtf, rtf_to_plain_text)
}

/// Get document information as JSON.
///
/// # Safety
///
/// The `content` must be a valid null-terminated string.
/// The returned result must be freed with `rtfhtml_free_result`.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_inspect(content: *const c_char, pretty: bool) -> RtfhtmlResult {
    let Some(text) = read_input(content) else {
        return RtfhtmlResult::error("Content cannot be null".to_string());
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match to_json(&inspect(&text), format) {
        Ok(json) => RtfhtmlResult::success(json),
        Err(e) => RtfhtmlResult::error(e.to_string()),
    }
}

/// Free a result returned by `rtfhtml_inspect`.
///
/// # Safety
///
/// The `result` must have been returned by an rtfhtml function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_free_result(result: RtfhtmlResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by rtfhtml.
///
/// # Safety
///
/// The `ptr` must have been allocated by rtfhtml.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn rtfhtml_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the rtfhtml library.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn rtfhtml_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        unsafe {
            let text = CStr::from_ptr(ptr).to_string_lossy().into_owned();
            rtfhtml_free_string(ptr);
            text
        }
    }

    #[test]
    fn test_version() {
        let version = rtfhtml_version();
        assert!(!version.is_null());
        let version = unsafe { CStr::from_ptr(version) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_null_input() {
        unsafe {
            assert!(!rtfhtml_is_rtf(ptr::null()));
            assert!(!rtfhtml_is_html(ptr::null()));
            assert_eq!(take(rtfhtml_rtf_to_html(ptr::null())), "");
            assert_eq!(take(rtfhtml_html_to_rtf(ptr::null())), "");
            assert_eq!(take(rtfhtml_rtf_to_plain_text(ptr::null())), "");
        }
    }

    #[test]
    fn test_round_trip_through_c_strings() {
        let html = CString::new("<p><strong>Bold</strong></p>").unwrap();
        let rtf = take(unsafe { rtfhtml_html_to_rtf(html.as_ptr()) });
        assert!(rtf.contains("\\b Bold\\b0 "));

        let rtf = CString::new(rtf).unwrap();
        assert!(unsafe { rtfhtml_is_rtf(rtf.as_ptr()) });
        let back = take(unsafe { rtfhtml_rtf_to_html(rtf.as_ptr()) });
        assert!(back.starts_with("<div>"));
        assert!(back.contains("<strong>Bold</strong>"));
    }

    #[test]
    fn test_plain_text() {
        let rtf = CString::new("{\\rtf1 \\b Hello\\b0  there}").unwrap();
        assert_eq!(take(unsafe { rtfhtml_rtf_to_plain_text(rtf.as_ptr()) }), "Hello there");
    }

    #[test]
    fn test_inspect() {
        unsafe {
            let result = rtfhtml_inspect(ptr::null(), true);
            assert!(!result.success);
            assert!(!result.error.is_null());
            rtfhtml_free_result(result);

            let content = CString::new("<p>two words</p>").unwrap();
            let result = rtfhtml_inspect(content.as_ptr(), false);
            assert!(result.success);
            let json = CStr::from_ptr(result.data).to_str().unwrap().to_string();
            assert!(json.contains("\"format\":\"html\""));
            rtfhtml_free_result(result);
        }
    }
}
