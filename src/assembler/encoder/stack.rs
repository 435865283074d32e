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

//! PUSH/POP/LEAVE/RET/NOP (spec.md §4.9's remaining fixed-form opcodes).

use super::addressing::emit_modrm;
use super::constants::{
    LEAVE_OPCODE, NOP_OPCODE, POP_R32_BASE, PUSH_IMM32, PUSH_R32_BASE, PUSH_RM32, PUSH_RM32_DIGIT,
    RET_OPCODE,
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

/// `PUSH r32` (+rd), `PUSH imm32` (spec.md §8 scenario 6, including the
/// single-character literal form `'A'` that `classify` already folded
/// into an `Operand::Immediate`), or `PUSH r/m32` (spec.md §4.9: `0xFF /6`
/// against a memory operand).
pub fn encode_push(asm: &mut Assembler, operand: &Operand) -> bool {
    match operand {
        Operand::Reg32(r) => {
            asm.emit_byte(PUSH_R32_BASE + r.code());
            true
        }
        Operand::Immediate(imm) => {
            asm.emit_byte(PUSH_IMM32);
            asm.emit_dword(*imm as u32);
            true
        }
        mem if is_memory(mem) => {
            asm.emit_byte(PUSH_RM32);
            emit_modrm(asm, PUSH_RM32_DIGIT, mem)
        }
        _ => false,
    }
}

pub fn encode_pop(asm: &mut Assembler, reg: Reg32) {
    asm.emit_byte(POP_R32_BASE + reg.code());
}

pub fn encode_leave(asm: &mut Assembler) {
    asm.emit_byte(LEAVE_OPCODE);
}

pub fn encode_ret(asm: &mut Assembler) {
    asm.emit_byte(RET_OPCODE);
}

pub fn encode_nop(asm: &mut Assembler) {
    asm.emit_byte(NOP_OPCODE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_register_uses_short_form() {
        let mut asm = Assembler::new();
        assert!(encode_push(&mut asm, &Operand::Reg32(Reg32::Edx)));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x52]);
    }

    #[test]
    fn push_char_literal_immediate() {
        let mut asm = Assembler::new();
        assert!(encode_push(&mut asm, &Operand::Immediate(0x41)));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x68, 0x41, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn push_memory_operand_uses_group_digit_6() {
        let mut asm = Assembler::new();
        assert!(encode_push(
            &mut asm,
            &Operand::MemBaseDisp(Reg32::Ebp, 8)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0xFF, 0x75, 0x08]);
    }
}
