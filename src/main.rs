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

use anyhow::{Context, Result};
use clap::Parser as clap_parser;
use ia32asm::file_reader::AsmFileReader;
use std::fs;
use std::path::PathBuf;

#[derive(clap_parser)]
#[clap(version = "0.1.0", author = "Connor Nolan")]
struct Opts {
    #[clap(short, long, default_value = "programa.asm")]
    input: PathBuf,
    #[clap(short, long, default_value = "programa.hex")]
    output: PathBuf,
    #[clap(short, long, default_value = "simbolos.txt")]
    symbols: PathBuf,
    #[clap(short, long, default_value = "referencias.txt")]
    references: PathBuf,
}

/// Assembles `opts.input` and writes the hex dump and the two reports.
/// Always exits 0 once it has run (spec.md §6/§7: there is no structured
/// exit code for partial failure); diagnostics go to stderr.
fn main() -> Result<()> {
    let opts: Opts = Opts::parse();
    let reader = AsmFileReader;

    let output = ia32asm::assemble_file(&opts.input, &reader)
        .with_context(|| format!("failed to assemble {}", opts.input.display()))?;

    fs::write(&opts.output, &output.hex)
        .with_context(|| format!("failed to write {}", opts.output.display()))?;
    fs::write(&opts.symbols, &output.symbols_report)
        .with_context(|| format!("failed to write {}", opts.symbols.display()))?;
    fs::write(&opts.references, &output.references_report)
        .with_context(|| format!("failed to write {}", opts.references.display()))?;

    for diagnostic in &output.diagnostics {
        eprintln!("{diagnostic}");
    }

    println!(
        "assembled {} -> {} ({} diagnostic{})",
        opts.input.display(),
        opts.output.display(),
        output.diagnostics.len(),
        if output.diagnostics.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
