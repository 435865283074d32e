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

//! The generalized binary ALU encoder (spec.md §4.4): ADD/OR/AND/SUB/
//! XOR/CMP all share one dispatch ladder over a 6-row opcode table.
//! Case order matches the original's actual dispatch (EAX,imm is tried
//! before the generic reg,imm case, since EAX also satisfies "register")
//! per spec.md §9's resolved Open Question on accumulator-form priority.

use super::addressing::emit_modrm;
use super::constants::AluOpcodes;
use crate::assembler::Assembler;
use crate::operand::Operand;
use crate::registers::Reg32;

fn is_memory(op: &Operand) -> bool {
    matches!(
        op,
        Operand::MemLabel(_) | Operand::MemBaseDisp(_, _) | Operand::MemSib { .. }
    )
}

/// Encodes `dest, src` for one ALU row. Returns `false` for an operand
/// combination none of the six forms cover (e.g. mem,mem).
pub fn encode_binary(asm: &mut Assembler, ops: &AluOpcodes, dest: &Operand, src: &Operand) -> bool {
    match (dest, src) {
        (Operand::Reg32(d), Operand::Reg32(s)) => {
            asm.emit_byte(ops.rm_r);
            emit_modrm(asm, s.code(), &Operand::Reg32(*d))
        }
        (Operand::Reg32(d), Operand::Immediate(imm)) if *d == Reg32::Eax => {
            asm.emit_byte(ops.eax_imm);
            asm.emit_dword(*imm as u32);
            true
        }
        (Operand::Reg32(d), src) if is_memory(src) => {
            asm.emit_byte(ops.r_rm);
            emit_modrm(asm, d.code(), src)
        }
        (dest, Operand::Reg32(s)) if is_memory(dest) => {
            asm.emit_byte(ops.rm_r);
            emit_modrm(asm, s.code(), dest)
        }
        (dest, Operand::Immediate(imm)) if is_memory(dest) => {
            emit_rm_imm(asm, ops, dest, *imm)
        }
        (Operand::Reg32(d), Operand::Immediate(imm)) => {
            emit_rm_imm(asm, ops, &Operand::Reg32(*d), *imm)
        }
        _ => false,
    }
}

fn emit_rm_imm(asm: &mut Assembler, ops: &AluOpcodes, rm: &Operand, imm: i64) -> bool {
    if let Ok(imm8) = i8::try_from(imm) {
        asm.emit_byte(ops.rm_imm8);
        if !emit_modrm(asm, ops.digit, rm) {
            return false;
        }
        asm.emit_byte(imm8 as u8);
    } else {
        asm.emit_byte(ops.rm_imm);
        if !emit_modrm(asm, ops.digit, rm) {
            return false;
        }
        asm.emit_dword(imm as u32);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::encoder::constants::{ADD_OPS, SUB_OPS};

    #[test]
    fn reg_reg_uses_rm_r_form() {
        let mut asm = Assembler::new();
        assert!(encode_binary(
            &mut asm,
            &ADD_OPS,
            &Operand::Reg32(Reg32::Ebx),
            &Operand::Reg32(Reg32::Eax)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x01, 0xC3]);
    }

    #[test]
    fn eax_immediate_uses_accumulator_form() {
        let mut asm = Assembler::new();
        assert!(encode_binary(
            &mut asm,
            &SUB_OPS,
            &Operand::Reg32(Reg32::Eax),
            &Operand::Immediate(0xFF)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x2D, 0xFF, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn reg_immediate_fitting_i8_uses_sign_extended_form() {
        let mut asm = Assembler::new();
        assert!(encode_binary(
            &mut asm,
            &ADD_OPS,
            &Operand::Reg32(Reg32::Ecx),
            &Operand::Immediate(5)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x83, 0xC1, 0x05]);
    }

    #[test]
    fn reg_immediate_out_of_i8_range_uses_imm32_form() {
        let mut asm = Assembler::new();
        assert!(encode_binary(
            &mut asm,
            &ADD_OPS,
            &Operand::Reg32(Reg32::Ecx),
            &Operand::Immediate(0x1234)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x81, 0xC1, 0x34, 0x12, 0x00, 0x00]);
    }
}
