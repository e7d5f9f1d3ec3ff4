//! Gitee API service implementations.

mod branches;
mod commits;
mod licenses;
mod organizations;
mod repositories;
mod users;

pub use commits::*;
pub use licenses::*;
pub use organizations::*;
pub use repositories::*;
pub use users::*;

use crate::errors::{GiteeError, GiteeResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a single path segment.
const SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Same as [`SEGMENT_SET`] but `/` passes through, for ref names.
const REF_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Checks a required path value and returns it escaped as one path segment.
pub(crate) fn require(name: &str, value: &str) -> GiteeResult<String> {
    if value.is_empty() {
        return Err(GiteeError::missing_parameter(name));
    }
    if is_dot_segment(value) {
        return Err(invalid_segment(name, value));
    }
    Ok(utf8_percent_encode(value, SEGMENT_SET).to_string())
}

/// Like [`require`], but keeps `/` so branch names and refs such as
/// `feature/x` span several segments.
pub(crate) fn require_ref(name: &str, value: &str) -> GiteeResult<String> {
    if value.is_empty() {
        return Err(GiteeError::missing_parameter(name));
    }
    if value
        .split('/')
        .any(|part| part.is_empty() || is_dot_segment(part))
    {
        return Err(invalid_segment(name, value));
    }
    Ok(utf8_percent_encode(value, REF_SET).to_string())
}

/// Picks the authenticated-user path when `user` is empty, the named-user path otherwise.
pub(crate) fn user_path(
    user: &str,
    own: &str,
    named: impl FnOnce(&str) -> String,
) -> GiteeResult<String> {
    if user.is_empty() {
        Ok(own.to_string())
    } else {
        Ok(named(&require("user", user)?))
    }
}

// URL resolution would collapse these instead of sending them.
fn is_dot_segment(value: &str) -> bool {
    value == "." || value == ".."
}

fn invalid_segment(name: &str, value: &str) -> GiteeError {
    GiteeError::invalid_parameter(format!("`{}` is not a valid path value: {:?}", name, value))
}
