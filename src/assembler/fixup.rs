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

//! The fixup table and resolver (spec.md §3 "Fixup table", §4.7
//! "Resolver"). Fixups are first-class records owned here, per spec.md
//! §9's re-architecture note — the resolver only ever touches the image
//! through `Emitter::patch_byte`/`patch_dword`, never by raw indexing.

use std::collections::HashMap;

use crate::assembler::emitter::Emitter;
use crate::assembler::symbol_table::SymbolTable;
use crate::errors::{AssemblyError, Diagnostic};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FixupKind {
    /// Write the symbol's value (plus `addend`) directly.
    Absolute,
    /// Write `target - (position + width)`.
    Relative,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FixupWidth {
    Byte,
    Dword,
}

impl FixupWidth {
    fn len(self) -> usize {
        match self {
            FixupWidth::Byte => 1,
            FixupWidth::Dword => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixup {
    pub position: usize,
    pub width: FixupWidth,
    pub kind: FixupKind,
    /// Pre-written placeholder payload that must be added to the
    /// symbol's value before patching (spec.md §3: used by the SIB
    /// addressing form, where the placeholder carries the source's
    /// `disp` and the resolver adds it to `symbol_value`).
    pub addend: i64,
}

#[derive(Debug, Default)]
pub struct FixupTable {
    // Insertion order within a label is preserved for deterministic
    // reports (spec.md §3 invariant), so this is a plain Vec keyed by
    // label rather than a multimap that could reorder entries.
    by_label: HashMap<String, Vec<Fixup>>,
    order: Vec<String>,
}

impl FixupTable {
    pub fn new() -> Self {
        FixupTable::default()
    }

    pub fn record(&mut self, label: &str, fixup: Fixup) {
        if !self.by_label.contains_key(label) {
            self.order.push(label.to_string());
        }
        self.by_label.entry(label.to_string()).or_default().push(fixup);
    }

    /// Iterates `(label, fixup)` pairs in the order labels were first
    /// referenced, and fixups within a label in recording order — the
    /// order the reference report (spec.md §6) is rendered in.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fixup)> {
        self.order.iter().flat_map(move |label| {
            self.by_label[label]
                .iter()
                .map(move |fixup| (label.as_str(), fixup))
        })
    }
}

/// Walks every recorded fixup and patches its site (spec.md §4.7). A
/// fixup whose label never got defined is left zeroed and reported as a
/// diagnostic, not a fatal error — the resolver still visits every other
/// fixup.
pub fn resolve(
    fixups: &FixupTable,
    symbols: &SymbolTable,
    emitter: &mut Emitter,
) -> Result<Vec<Diagnostic>, AssemblyError> {
    let mut diagnostics = Vec::new();

    for (label, fixup) in fixups.iter() {
        let Some(&symbol_value) = symbols.get(label) else {
            diagnostics.push(Diagnostic::new(
                0,
                format!("undefined label '{label}' referenced at position {}", fixup.position),
            ));
            continue;
        };

        let patched = match fixup.kind {
            FixupKind::Absolute => (symbol_value as i64).wrapping_add(fixup.addend) as u32,
            FixupKind::Relative => {
                let end = fixup.position as i64 + fixup.width.len() as i64;
                (symbol_value as i64 - end) as u32
            }
        };

        match fixup.width {
            FixupWidth::Byte => emitter.patch_byte(fixup.position, patched as u8)?,
            FixupWidth::Dword => emitter.patch_dword(fixup.position, patched)?,
        }
    }

    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixup(position: usize, width: FixupWidth, kind: FixupKind, addend: i64) -> Fixup {
        Fixup {
            position,
            width,
            kind,
            addend,
        }
    }

    #[test]
    fn absolute_fixup_adds_addend() {
        let mut emitter = Emitter::new();
        emitter.emit_dword(0);
        let mut fixups = FixupTable::new();
        fixups.record("VAR", fixup(0, FixupWidth::Dword, FixupKind::Absolute, 8));
        let mut symbols = SymbolTable::new();
        symbols.insert("VAR".to_string(), 0x100);

        resolve(&fixups, &symbols, &mut emitter).unwrap();
        assert_eq!(
            u32::from_le_bytes(emitter.image()[0..4].try_into().unwrap()),
            0x108
        );
    }

    #[test]
    fn relative_fixup_computes_target_minus_end_of_field() {
        // JMP at position 0: E9 xx xx xx xx, target is the start of the
        // image (symbol value 0). Per spec.md §8 scenario 3.
        let mut emitter = Emitter::new();
        emitter.emit_byte(0xE9);
        let disp_pos = emitter.current_position();
        emitter.emit_dword(0);
        let mut fixups = FixupTable::new();
        fixups.record("L1", fixup(disp_pos, FixupWidth::Dword, FixupKind::Relative, 0));
        let mut symbols = SymbolTable::new();
        symbols.insert("L1".to_string(), 0);

        resolve(&fixups, &symbols, &mut emitter).unwrap();
        assert_eq!(emitter.image(), &[0xE9, 0xFB, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn undefined_label_is_left_zeroed_and_reported() {
        let mut emitter = Emitter::new();
        emitter.emit_dword(0);
        let mut fixups = FixupTable::new();
        fixups.record("MISSING", fixup(0, FixupWidth::Dword, FixupKind::Absolute, 0));
        let symbols = SymbolTable::new();

        let diagnostics = resolve(&fixups, &symbols, &mut emitter).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(emitter.image(), &[0, 0, 0, 0]);
    }
}
