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

//! JMP/CALL/LOOP/Jcc (spec.md §4.6). Every one of these records a
//! relative fixup through `Assembler::record_relative_fixup` uniformly,
//! whether the label is already defined or not — see that method's doc
//! comment for why a backward-reference fast path would be redundant.

use super::constants::{CALL_REL32, JCC_REL32_0F, JMP_REL32, LOOP_REL8};
use crate::assembler::fixup::FixupWidth;
use crate::assembler::Assembler;
use crate::mnemonic::{condition_opcode, Condition};

pub fn encode_jmp(asm: &mut Assembler, label: &str) {
    asm.emit_byte(JMP_REL32);
    asm.record_relative_fixup(label, FixupWidth::Dword);
}

pub fn encode_call(asm: &mut Assembler, label: &str) {
    asm.emit_byte(CALL_REL32);
    asm.record_relative_fixup(label, FixupWidth::Dword);
}

pub fn encode_loop(asm: &mut Assembler, label: &str) {
    asm.emit_byte(LOOP_REL8);
    asm.record_relative_fixup(label, FixupWidth::Byte);
}

pub fn encode_jcc(asm: &mut Assembler, cond: Condition, label: &str) {
    asm.emit_byte(JCC_REL32_0F);
    asm.emit_byte(condition_opcode(cond));
    asm.record_relative_fixup(label, FixupWidth::Dword);
}
