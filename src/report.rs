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

//! Renders the two text reports spec.md §6 describes: the symbol table
//! and the fixup ("reference") table.

use crate::assembler::fixup::{FixupKind, FixupTable};
use crate::assembler::symbol_table::SymbolTable;

/// `label -> decimal_offset`, one per line, sorted by label so the report
/// is deterministic despite the table itself being a `HashMap`.
pub fn render_symbol_table(symbols: &SymbolTable) -> String {
    let mut entries: Vec<(&str, u32)> = symbols.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::from("Tabla de Simbolos:\n");
    for (label, position) in entries {
        out.push_str(&format!("{label} -> {position}\n"));
    }
    out
}

/// `Etiqueta: L, Posicion: P, Tamano: W, Tipo: (ABSOLUTO|RELATIVO)`, one
/// per fixup, in the order the fixup table iterates (spec.md §9: labels
/// in first-reference order, fixups within a label in recording order).
pub fn render_fixup_table(fixups: &FixupTable) -> String {
    let mut out = String::from("Tabla de Referencias Pendientes:\n");
    for (label, fixup) in fixups.iter() {
        let tamano = match fixup.width {
            crate::assembler::fixup::FixupWidth::Byte => 1,
            crate::assembler::fixup::FixupWidth::Dword => 4,
        };
        let tipo = match fixup.kind {
            FixupKind::Absolute => "ABSOLUTO",
            FixupKind::Relative => "RELATIVO",
        };
        out.push_str(&format!(
            "Etiqueta: {label}, Posicion: {}, Tamano: {tamano}, Tipo: {tipo}\n",
            fixup.position
        ));
    }
    out
}
