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

//! The operand classifier (spec.md §4.2). Takes an already-normalized
//! (trimmed, uppercased) operand token and returns a tagged `Operand`,
//! never panicking and never raising an exception: failure is a `None`.

use crate::registers::{Reg32, Reg8};

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Reg32(Reg32),
    Reg8(Reg8),
    Immediate(i64),
    /// `[label]`
    MemLabel(String),
    /// `[reg]`, `[reg+disp]`, `[reg-disp]`
    MemBaseDisp(Reg32, i32),
    /// `[label+ESI*4]`, `[label+ESI*4+disp]`, `[label+ESI*4-disp]`
    MemSib { label: String, disp: i32 },
    /// Neither a register nor a recognizable memory/immediate form, but
    /// still worth naming for diagnostics (e.g. a bare, unresolved word).
    Unrecognized,
}

/// Strips one layer of `BYTE`/`DWORD` size hint from a memory operand, as
/// MOVZX's source does (spec.md §6: "the optional size pseudo `BYTE`
/// ... is tolerated and stripped by MOVZX").
pub fn strip_size_hint(token: &str) -> &str {
    for hint in ["BYTE ", "DWORD "] {
        if let Some(rest) = token.strip_prefix(hint) {
            return rest.trim();
        }
    }
    token
}

pub fn classify(token: &str) -> Operand {
    let token = token.trim();

    if let Some(reg) = Reg32::from_name(token) {
        return Operand::Reg32(reg);
    }
    if let Some(reg) = Reg8::from_name(token) {
        return Operand::Reg8(reg);
    }
    if let Some(value) = parse_immediate(token) {
        return Operand::Immediate(value);
    }
    if let Some(inner) = bracketed(token) {
        return classify_memory(inner);
    }

    Operand::Unrecognized
}

fn bracketed(token: &str) -> Option<&str> {
    let token = token.strip_prefix('[')?;
    token.strip_suffix(']')
}

fn classify_memory(inner: &str) -> Operand {
    let inner = inner.trim();

    if let Some(sib) = classify_sib(inner) {
        return sib;
    }
    if let Some(base_disp) = classify_base_disp(inner) {
        return base_disp;
    }
    // Bare `[label]`: must be a single identifier token, nothing else.
    if is_bare_identifier(inner) {
        return Operand::MemLabel(inner.to_string());
    }

    Operand::Unrecognized
}

fn is_bare_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `[BASE_REG +/- disp]` or bare `[BASE_REG]` (disp defaults to 0).
fn classify_base_disp(inner: &str) -> Option<Operand> {
    let plus = inner.find('+');
    let minus = inner.find('-');
    let split_at = match (plus, minus) {
        (Some(p), Some(m)) => Some(p.min(m)),
        (Some(p), None) => Some(p),
        (None, Some(m)) => Some(m),
        (None, None) => None,
    };

    let (reg_part, disp_part) = match split_at {
        Some(i) => (inner[..i].trim(), Some(inner[i..].trim())),
        None => (inner.trim(), None),
    };

    let base = Reg32::from_name(reg_part)?;

    let disp = match disp_part {
        None => 0,
        Some(text) => text.parse::<i32>().ok()?,
    };

    Some(Operand::MemBaseDisp(base, disp))
}

/// `[LABEL (+|-) ESI*4 (+/- disp)]`.
fn classify_sib(inner: &str) -> Option<Operand> {
    let esi_pos = inner.find("ESI*4")?;

    let mut label = inner[..esi_pos].trim_end();
    label = label.trim_end_matches(['+', '-']).trim_end();
    if label.is_empty() || !is_bare_identifier(label) {
        return None;
    }

    let tail = inner[esi_pos + "ESI*4".len()..].trim();
    let disp = if tail.is_empty() {
        0
    } else {
        tail.parse::<i32>().ok()?
    };

    Some(Operand::MemSib {
        label: label.to_string(),
        disp,
    })
}

/// Immediate literal forms from spec.md §4.2 / §6: decimal, `H`-suffixed
/// hex, `0X`-prefixed hex, or a single-character literal `'c'`. Parsing
/// must consume the whole token.
pub fn parse_immediate(token: &str) -> Option<i64> {
    if token.len() == 3 && token.starts_with('\'') && token.ends_with('\'') {
        let c = token.chars().nth(1)?;
        if c.is_ascii() {
            return Some(c as i64);
        }
        return None;
    }

    if let Some(hex) = token.strip_suffix('H') {
        if hex.is_empty() {
            return None;
        }
        return i64::from_str_radix(hex, 16).ok();
    }

    if let Some(hex) = token.strip_prefix("0X") {
        if hex.is_empty() {
            return None;
        }
        return i64::from_str_radix(hex, 16).ok();
    }

    token.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_registers() {
        assert_eq!(classify("EAX"), Operand::Reg32(Reg32::Eax));
        assert_eq!(classify("BH"), Operand::Reg8(Reg8::Bh));
    }

    #[test]
    fn classifies_immediate_forms() {
        assert_eq!(classify("123"), Operand::Immediate(123));
        assert_eq!(classify("7FH"), Operand::Immediate(0x7F));
        assert_eq!(classify("0X7F"), Operand::Immediate(0x7F));
        assert_eq!(classify("'A'"), Operand::Immediate(0x41));
    }

    #[test]
    fn rejects_immediate_trailing_garbage() {
        assert_eq!(parse_immediate("123X"), None);
        assert_eq!(parse_immediate("H"), None);
        assert_eq!(parse_immediate("0X"), None);
    }

    #[test]
    fn classifies_simple_label_memory() {
        assert_eq!(classify("[VAR]"), Operand::MemLabel("VAR".to_string()));
    }

    #[test]
    fn classifies_base_disp_memory() {
        assert_eq!(classify("[EBP]"), Operand::MemBaseDisp(Reg32::Ebp, 0));
        assert_eq!(classify("[EBP+8]"), Operand::MemBaseDisp(Reg32::Ebp, 8));
        assert_eq!(classify("[EBP-4]"), Operand::MemBaseDisp(Reg32::Ebp, -4));
    }

    #[test]
    fn classifies_sib_memory() {
        assert_eq!(
            classify("[TABLE+ESI*4]"),
            Operand::MemSib {
                label: "TABLE".to_string(),
                disp: 0
            }
        );
        assert_eq!(
            classify("[TABLE+ESI*4+8]"),
            Operand::MemSib {
                label: "TABLE".to_string(),
                disp: 8
            }
        );
        assert_eq!(
            classify("[TABLE+ESI*4-8]"),
            Operand::MemSib {
                label: "TABLE".to_string(),
                disp: -8
            }
        );
    }

    #[test]
    fn strips_byte_size_hint() {
        assert_eq!(strip_size_hint("BYTE [DISKS]"), "[DISKS]");
        assert_eq!(strip_size_hint("[DISKS]"), "[DISKS]");
    }
}
