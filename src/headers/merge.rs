//! Set-then-add header merge.

use http::{HeaderMap, Request};

use crate::headers::set::HeaderSet;

/// Apply `set` and then `add` to `target`.
///
/// For each name in `set` the first value replaces whatever `target` held,
/// and the remaining values are appended after it. Every value in `add` is
/// then appended, so a name present in both ends up as
/// `[set[0], set[1..], add[..]]`. Names mapped to no values are skipped.
/// Names touched by neither side are left alone, and nothing is deduplicated.
pub fn merge_headers(target: &mut HeaderMap, set: &HeaderSet, add: &HeaderSet) {
    for (name, values) in set {
        let Some((first, rest)) = values.split_first() else {
            continue;
        };
        target.insert(name, first.clone());
        for value in rest {
            target.append(name, value.clone());
        }
    }

    for (name, values) in add {
        for value in values {
            target.append(name, value.clone());
        }
    }
}

/// Apply [`merge_headers`] directly to the headers of `request`.
///
/// The request is modified in place; callers that must keep the original
/// intact clone it first (see [`crate::http::clone_request`]).
pub fn modify_headers<B>(request: &mut Request<B>, set: &HeaderSet, add: &HeaderSet) {
    merge_headers(request.headers_mut(), set, add);
}
