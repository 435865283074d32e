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

use ia32asm::file_reader::{AsmFileReader, MockFileReader};
use ia32asm::{assemble_file, assemble_source};
use std::io::Write;
use std::path::Path;

#[test]
fn mov_eax_immediate_end_to_end() {
    let output = assemble_source("MOV EAX, 5\n").unwrap();
    assert_eq!(output.hex, "B8 05 00 00 00 \n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn mov_ebx_eax_end_to_end() {
    let output = assemble_source("MOV EBX, EAX\n").unwrap();
    assert_eq!(output.hex, "89 C3 \n");
}

#[test]
fn backward_self_loop_resolves_to_minus_five() {
    let output = assemble_source("L1:\nJMP L1\n").unwrap();
    assert_eq!(output.hex, "E9 FB FF FF FF \n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn forward_jump_resolves_after_two_nops() {
    let output = assemble_source("JMP FWD\nNOP\nNOP\nFWD:\n").unwrap();
    // JMP is 5 bytes, target is at offset 7: 7 - 5 = 2.
    assert_eq!(output.hex, "E9 02 00 00 00 90 90 \n");
}

#[test]
fn sub_eax_immediate_uses_accumulator_form() {
    let output = assemble_source("SUB EAX, 0FFH\n").unwrap();
    assert_eq!(output.hex, "2D FF 00 00 00 \n");
}

#[test]
fn push_char_literal_end_to_end() {
    let output = assemble_source("PUSH 'A'\n").unwrap();
    assert_eq!(output.hex, "68 41 00 00 00 \n");
}

#[test]
fn symbol_and_fixup_reports_render_for_a_data_program() {
    let output = assemble_source("COUNTER DD\nMOV EAX, [COUNTER]\nMOV [COUNTER], EAX\n").unwrap();
    assert_eq!(
        output.symbols_report,
        "Tabla de Simbolos:\nCOUNTER -> 0\n"
    );
    // Only the load goes through the general r/m form, which carries no
    // pending fixup at report time other than the store's moffs32 one.
    assert!(output.references_report.starts_with("Tabla de Referencias Pendientes:\n"));
}

#[test]
fn unknown_mnemonic_is_a_diagnostic_not_a_failure() {
    let output = assemble_source("FROB EAX, EBX\n").unwrap();
    assert_eq!(output.hex, "");
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn undefined_label_leaves_placeholder_zeroed_and_warns() {
    let output = assemble_source("JMP NOWHERE\n").unwrap();
    assert_eq!(output.hex, "E9 00 00 00 00 \n");
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let output = assemble_source("; a full-line comment\n\nNOP ; trailing comment\n").unwrap();
    assert_eq!(output.hex, "90 \n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn assemble_file_reads_through_a_mock_reader() {
    let mut reader = MockFileReader::default();
    reader.add_file("programa.asm", "MOV EAX, 1\nRET\n");
    let output = assemble_file(Path::new("programa.asm"), &reader).unwrap();
    assert_eq!(output.hex, "B8 01 00 00 00 C3 \n");
}

#[test]
fn assemble_file_reads_through_the_real_filesystem_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("programa.asm");
    write!(std::fs::File::create(&path).unwrap(), "MOV EAX, 1\nRET\n").unwrap();

    let output = assemble_file(&path, &AsmFileReader).unwrap();
    assert_eq!(output.hex, "B8 01 00 00 00 C3 \n");
}

#[test]
fn a_small_program_with_a_loop_assembles_end_to_end() {
    // MOV ECX, 3 ; TOP: DEC ECX ; LOOP TOP ; RET
    let output = assemble_source("MOV ECX, 3\nTOP:\nDEC ECX\nLOOP TOP\nRET\n").unwrap();
    assert_eq!(
        output.hex,
        "B9 03 00 00 00 49 E2 FD C3 \n"
    );
    assert!(output.diagnostics.is_empty());
}
