//! Brace-group scanning for RTF.
//!
//! Both functions expect text that has already been passed through
//! [`protect_escapes`](super::protect_escapes); a backslash still skips the
//! character after it so control symbols such as `\'7d` are never read as
//! structure.

use crate::error::{Error, Result};

use super::patterns::RE_DESTINATION;

/// Verify that every `{` has a matching `}`.
pub(crate) fn check_balance(text: &str) -> Result<()> {
    let mut depth = 0usize;
    let mut bytes = text.bytes().enumerate();

    while let Some((offset, b)) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return Err(Error::UnbalancedGroup { offset });
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(Error::UnterminatedGroup { depth });
    }
    Ok(())
}

/// Remove destination groups (`{\fonttbl ...}`, `{\colortbl ...}`,
/// `{\stylesheet ...}`, `{\info ...}` and ignorable `{\* ...}` groups),
/// each up to its matching closing brace.
pub(crate) fn strip_destinations(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(caps) = RE_DESTINATION.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let name = caps.name("name").map_or("*", |m| m.as_str());

        out.push_str(&text[pos..whole.start()]);
        let end = group_end(text, whole.end())
            .ok_or_else(|| Error::UnterminatedDestination(name.to_string()))?;
        log::debug!("Stripped \\{} group ({} bytes)", name, end - whole.start());
        pos = end;
    }

    out.push_str(&text[pos..]);
    Ok(out)
}

/// Byte index just past the brace closing the group that is open at `from`.
fn group_end(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut bytes = text.as_bytes()[from..].iter().enumerate();

    while let Some((i, b)) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
