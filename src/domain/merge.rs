//! Pure merge algorithms for the shared project files.
//!
//! Both functions take the current document text and return the merged
//! text; callers load and persist the files. Running either merge on its
//! own output changes nothing, which is what makes re-running `init` safe.

/// Ensure every directive line and the trailing block appear in `content`.
///
/// Missing directives are prepended in reverse list order, so a clean file
/// ends up with the list's top-to-bottom order. A directive already present
/// anywhere in the document is left where the operator put it. The block is
/// appended after one blank line when it is not already a substring.
pub fn merge_directives_and_block(content: &str, directives: &[&str], block: &str) -> String {
    let mut merged = content.to_string();

    for directive in directives.iter().rev() {
        if !merged.contains(directive) {
            merged = format!("{directive}\n{merged}");
        }
    }

    if !merged.contains(block) {
        if !merged.is_empty() && !merged.ends_with('\n') {
            merged.push('\n');
        }
        merged.push('\n');
        merged.push_str(block);
    }

    merged
}

/// Ensure `content` holds exactly one current definition of the function
/// identified by `marker`.
///
/// - Empty (or whitespace-only) input returns `module` verbatim; the merge
///   doubles as file creation, with import lines bundled into `module`.
/// - If `marker` occurs, the span from the marker through the first `\n}`
///   after it (plus one trailing newline, when present) is replaced with
///   `function_block`. Bytes on either side of the span are untouched.
///   A marker with no closing `\n}` consumes the rest of the input.
/// - Otherwise `module` is appended after one blank line.
///
/// `function_block` must itself start with `marker` and close with `\n}` so
/// a second merge matches the freshly inserted block and changes nothing.
/// The span match is textual: a brace-heavy hand-edited body can close the
/// span early, truncating that definition to the canonical one.
pub fn merge_function_block(
    content: &str,
    marker: &str,
    function_block: &str,
    module: &str,
) -> String {
    if content.trim().is_empty() {
        return module.to_string();
    }

    if let Some(start) = content.find(marker) {
        let end = match content[start..].find("\n}") {
            Some(rel) => {
                let mut end = start + rel + 2;
                if content[end..].starts_with('\n') {
                    end += 1;
                }
                end
            }
            None => content.len(),
        };

        let mut merged = String::with_capacity(content.len() + function_block.len());
        merged.push_str(&content[..start]);
        merged.push_str(function_block);
        merged.push_str(&content[end..]);
        return merged;
    }

    let mut merged = content.to_string();
    if !merged.ends_with('\n') {
        merged.push('\n');
    }
    merged.push('\n');
    merged.push_str(module);
    merged
}
