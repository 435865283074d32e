/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The line normalizer (spec.md §1's "lexer" collaborator): strips
//! comments, trims, uppercases. Deliberately the thinnest layer in the
//! crate — it owns no assembler state.

/// Strips a `;`-to-end-of-line comment, trims, and uppercases a source
/// line. The result is empty for blank or comment-only lines.
pub fn normalize_line(raw: &str) -> String {
    let without_comment = match raw.find(';') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    without_comment.trim().to_uppercase()
}

/// Splits a normalized instruction line into its mnemonic and the raw
/// (unparsed) operand text, e.g. `"MOV EAX, 5"` -> `("MOV", "EAX, 5")`.
pub fn split_mnemonic(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((mnem, rest)) => (mnem, rest.trim()),
        None => (line, ""),
    }
}

/// Splits a comma-separated two-operand instruction's operand text into
/// destination and source, per spec.md's `dest, src` convention.
/// Returns `None` unless there are exactly two non-empty operands.
pub fn split_operands(text: &str) -> Option<(String, String)> {
    let comma = find_top_level_comma(text)?;
    let dest = text[..comma].trim();
    let src = text[comma + 1..].trim();
    if dest.is_empty() || src.is_empty() {
        return None;
    }
    Some((dest.to_string(), src.to_string()))
}

/// Finds the comma separating two operands, ignoring commas nested inside
/// `[...]` (there are none in this grammar, but this keeps the split
/// robust against any future bracketed-expression operand).
fn find_top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// `true` if the line is a sole label definition: `IDENT:`.
pub fn is_label_definition(line: &str) -> Option<&str> {
    let label = line.strip_suffix(':')?;
    if label.is_empty() || label.contains(char::is_whitespace) {
        return None;
    }
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comment_trims_and_uppercases() {
        assert_eq!(normalize_line("  mov eax, 5 ; load five"), "MOV EAX, 5");
        assert_eq!(normalize_line("; just a comment"), "");
        assert_eq!(normalize_line("   "), "");
    }

    #[test]
    fn splits_mnemonic_from_operands() {
        assert_eq!(split_mnemonic("MOV EAX, 5"), ("MOV", "EAX, 5"));
        assert_eq!(split_mnemonic("RET"), ("RET", ""));
    }

    #[test]
    fn splits_two_operands_on_comma() {
        assert_eq!(
            split_operands("EAX, 5"),
            Some(("EAX".to_string(), "5".to_string()))
        );
        assert_eq!(split_operands("EAX"), None);
    }

    #[test]
    fn recognizes_label_definitions() {
        assert_eq!(is_label_definition("START:"), Some("START"));
        assert_eq!(is_label_definition("MOV EAX, 5"), None);
        assert_eq!(is_label_definition(":"), None);
    }
}
