//! Fixed content the installer merges into the consumer project.

use crate::domain::merge;

/// Directive lines that must appear in the stylesheet, in this
/// top-to-bottom order on a clean file.
pub const STYLESHEET_DIRECTIVES: [&str; 3] = [
    "@import \"tailwindcss\";",
    "@import \"tw-animate-css\";",
    "@custom-variant dark (&:is(.dark *));",
];

/// Custom-property and base-style block required in the stylesheet.
pub static THEME_BLOCK: &str = include_str!("assets/theme.css");

/// Complete utility module, written when `lib/utils.ts` is missing or has
/// no `cn` definition. Bundles the import lines the function needs.
pub static UTILS_MODULE: &str = include_str!("assets/utils.ts");

/// Signature marker identifying a `cn` definition.
pub const CN_MARKER: &str = "export function cn";

/// Bare `cn` definition used for in-place replacement. Starts with
/// [`CN_MARKER`] and closes with `\n}` so repeated merges match the
/// freshly inserted block exactly.
pub const CN_FUNCTION: &str =
    "export function cn(...inputs: ClassValue[]) {\n  return twMerge(clsx(inputs));\n}\n";

/// Merge the required directives and theme block into stylesheet text.
pub fn merge_stylesheet(content: &str) -> String {
    merge::merge_directives_and_block(content, &STYLESHEET_DIRECTIVES, THEME_BLOCK)
}

/// Merge the `cn` definition into utility-module text.
pub fn merge_utils(content: &str) -> String {
    merge::merge_function_block(content, CN_MARKER, CN_FUNCTION, UTILS_MODULE)
}
