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

pub mod assembler;
pub mod errors;
pub mod file_reader;
pub mod hexdump;
pub mod lexer;
pub mod mnemonic;
pub mod operand;
pub mod registers;
pub mod report;

use std::path::Path;

use anyhow::{Context, Result};

use assembler::Assembler;
use errors::Diagnostic;
use file_reader::FileReader;

/// Everything a driver needs to write out: the rendered hex dump, the
/// two rendered reports, and the diagnostics accumulated along the way
/// (spec.md §6/§7 — diagnostics never stop the pass, they're just text
/// the driver prints to stderr once assembly finishes).
pub struct AssembleOutput {
    pub hex: String,
    pub symbols_report: String,
    pub references_report: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the whole pass over already-read source text: normalizes and
/// processes every line, then resolves fixups, then renders the three
/// output artifacts. The only failure mode is a fatal `AssemblyError`
/// (spec.md §7's "patch position out of range" — an assembler bug, not
/// a malformed program).
pub fn assemble_source(source: &str) -> Result<AssembleOutput> {
    let mut asm = Assembler::new();
    for (i, line) in source.lines().enumerate() {
        let normalized = lexer::normalize_line(line);
        asm.process_line(i + 1, &normalized);
    }
    let program = asm.finish().context("failed to resolve fixups")?;

    Ok(AssembleOutput {
        hex: hexdump::render(&program.image),
        symbols_report: report::render_symbol_table(&program.symbols),
        references_report: report::render_fixup_table(&program.fixups),
        diagnostics: program.diagnostics,
    })
}

/// Reads `source_path` through `reader` and assembles it (spec.md §6's
/// top-level entry point, the one `main.rs` drives).
pub fn assemble_file<F: FileReader>(source_path: &Path, reader: &F) -> Result<AssembleOutput> {
    let source = reader
        .read_to_string(source_path)
        .with_context(|| format!("failed to read input file: {}", source_path.display()))?;
    assemble_source(&source)
}
