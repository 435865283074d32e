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

//! The assembler: one owning aggregate (spec.md §9's re-architecture
//! note) of the Emitter, symbol table, and fixup table, driven one
//! normalized line at a time.

pub mod emitter;
pub mod encoder;
pub mod fixup;
pub mod symbol_table;

use emitter::Emitter;
use fixup::{Fixup, FixupKind, FixupTable, FixupWidth};
use symbol_table::SymbolTable;

use crate::errors::{AssemblyError, Diagnostic};
use crate::lexer;
use crate::mnemonic::{self, Directive};

pub struct Assembler {
    emitter: Emitter,
    symbols: SymbolTable,
    fixups: FixupTable,
    diagnostics: Vec<Diagnostic>,
    line_num: usize,
}

pub struct AssembledProgram {
    pub image: Vec<u8>,
    pub symbols: SymbolTable,
    pub fixups: FixupTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler {
            emitter: Emitter::new(),
            symbols: SymbolTable::new(),
            fixups: FixupTable::new(),
            diagnostics: Vec::new(),
            line_num: 0,
        }
    }

    pub fn current_position(&self) -> usize {
        self.emitter.current_position()
    }

    pub fn emit_byte(&mut self, byte: u8) {
        self.emitter.emit_byte(byte);
    }

    pub fn emit_dword(&mut self, dword: u32) {
        self.emitter.emit_dword(dword);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(self.line_num, message));
    }

    /// Records a 4-byte ABSOLUTE fixup at the current position and emits
    /// its placeholder (spec.md §4.3 simple/SIB addressing forms).
    pub fn record_absolute_fixup_dword(&mut self, label: &str, addend: i64) {
        let position = self.current_position();
        self.fixups.record(
            label,
            Fixup {
                position,
                width: FixupWidth::Dword,
                kind: FixupKind::Absolute,
                addend,
            },
        );
        self.emit_dword(addend as u32);
    }

    /// Records a RELATIVE fixup at the current position and emits its
    /// placeholder. Used uniformly by JMP/CALL/LOOP/Jcc: whether the
    /// label is already defined or not, the resolver computes the exact
    /// same `target - (position + width)` arithmetic, so there is no
    /// observable difference from computing a backward reference inline
    /// (spec.md §4.6 notes this as an option for JMP; generalizing it to
    /// every relative-branch form avoids duplicating the arithmetic).
    pub fn record_relative_fixup(&mut self, label: &str, width: FixupWidth) {
        let position = self.current_position();
        self.fixups.record(
            label,
            Fixup {
                position,
                width,
                kind: FixupKind::Relative,
                addend: 0,
            },
        );
        match width {
            FixupWidth::Byte => self.emit_byte(0),
            FixupWidth::Dword => self.emit_dword(0),
        }
    }

    fn define_label(&mut self, label: &str) {
        let position = self.current_position() as u32;
        if let Some(previous) = symbol_table::define(&mut self.symbols, label, position) {
            self.warn(format!(
                "label '{label}' redefined (already defined at offset {previous}); keeping the first definition"
            ));
        }
    }

    /// Processes one already-normalized (trimmed, uppercased,
    /// comment-stripped) source line. Never fails: every per-line problem
    /// becomes a diagnostic and the pass moves on (spec.md §7).
    pub fn process_line(&mut self, line_num: usize, normalized: &str) {
        self.line_num = line_num;

        if normalized.is_empty() {
            return;
        }

        if let Some(label) = lexer::is_label_definition(normalized) {
            self.define_label(label);
            return;
        }

        let (first, rest) = lexer::split_mnemonic(normalized);

        if let Some(Directive::Ignored) = mnemonic::parse_directive(first) {
            return;
        }

        if let Some(mnem) = mnemonic::parse_mnemonic(first) {
            encoder::encode_instruction(self, mnem, rest);
            return;
        }

        // Not a recognized mnemonic: either a data-definition label
        // (`IDENT DD` / `IDENT DB`) or `IDENT EQU ...` (spec.md §4.8), or
        // a genuinely unknown mnemonic.
        let (directive_word, _) = lexer::split_mnemonic(rest);
        match mnemonic::parse_directive(directive_word) {
            Some(Directive::Equ) => {}
            Some(Directive::Dd) => {
                self.define_label(first);
                self.emit_dword(0);
            }
            Some(Directive::Db) => {
                self.define_label(first);
                self.emit_byte(0);
            }
            _ => self.warn(format!("unsupported mnemonic or directive: {first}")),
        }
    }

    /// Ends the pass: runs the resolver over every recorded fixup and
    /// returns the final image plus both reports' source data.
    pub fn finish(mut self) -> Result<AssembledProgram, AssemblyError> {
        let resolver_diagnostics = fixup::resolve(&self.fixups, &self.symbols, &mut self.emitter)?;
        self.diagnostics.extend(resolver_diagnostics);
        Ok(AssembledProgram {
            image: self.emitter.into_image(),
            symbols: self.symbols,
            fixups: self.fixups,
            diagnostics: self.diagnostics,
        })
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler::new()
    }
}
