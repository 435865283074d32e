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

//! MOV's own case ladder (spec.md §4.5) — distinct from the generalized
//! ALU dispatch because MOV has its own short form and no accumulator
//! immediate row.

use super::addressing::emit_modrm;
use super::constants::{
    MOV_MOFFS32_EAX, MOV_R32_IMM32_BASE, MOV_RM32_IMM32, MOV_RM32_IMM32_SUB, MOV_RM32_R32,
};
use crate::assembler::Assembler;
use crate::operand::Operand;
use crate::registers::Reg32;

fn is_memory(op: &Operand) -> bool {
    matches!(
        op,
        Operand::MemLabel(_) | Operand::MemBaseDisp(_, _) | Operand::MemSib { .. }
    )
}

/// Encodes `dest, src`. Returns `false` for a combination MOV doesn't
/// support (e.g. mem,mem or an 8-bit register operand — spec.md §4.5
/// only covers 32-bit MOV).
pub fn encode_mov(asm: &mut Assembler, dest: &Operand, src: &Operand) -> bool {
    match (dest, src) {
        (Operand::Reg32(d), Operand::Immediate(imm)) => {
            asm.emit_byte(MOV_R32_IMM32_BASE + d.code());
            asm.emit_dword(*imm as u32);
            true
        }
        // `MOV [label], EAX` with a bare label destination: the short
        // moffs32 form. Restricted to `Operand::MemLabel` specifically,
        // since that variant is only ever produced for a bare `[ident]`
        // token (spec.md §9: base+disp and SIB forms never take this
        // opcode, even when the base happens to be EAX).
        (Operand::MemLabel(label), Operand::Reg32(r)) if *r == Reg32::Eax => {
            asm.emit_byte(MOV_MOFFS32_EAX);
            asm.record_absolute_fixup_dword(label, 0);
            true
        }
        (Operand::Reg32(d), Operand::Reg32(s)) => {
            asm.emit_byte(MOV_RM32_R32);
            emit_modrm(asm, s.code(), &Operand::Reg32(*d))
        }
        (Operand::Reg32(d), src) if is_memory(src) => {
            asm.emit_byte(super::constants::MOV_R32_RM32);
            emit_modrm(asm, d.code(), src)
        }
        (dest, Operand::Reg32(s)) if is_memory(dest) => {
            asm.emit_byte(MOV_RM32_R32);
            emit_modrm(asm, s.code(), dest)
        }
        (dest, Operand::Immediate(imm)) if is_memory(dest) => {
            asm.emit_byte(MOV_RM32_IMM32);
            if !emit_modrm(asm, MOV_RM32_IMM32_SUB, dest) {
                return false;
            }
            asm.emit_dword(*imm as u32);
            true
        }
        _ => false,
    }
}
