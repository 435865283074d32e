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

//! MOVZX, LEA, XCHG, the one-operand Group 3 instructions (IMUL/MUL/DIV/
//! IDIV), INC/DEC, and the supplemented shift family (spec.md §4.9).

use super::addressing::emit_modrm;
use super::constants::{
    DEC_R32_BASE, DIV_DIGIT, GRP3_RM32, IDIV_DIGIT, IMUL_DIGIT, IMUL_R32_RM32, IMUL_R32_RM32_0F,
    INC_R32_BASE, MOVZX_R32_RM8, MOVZX_R32_RM8_0F, MUL_DIGIT, SAR_DIGIT, SHIFT_RM32_IMM8,
    SHL_DIGIT, SHR_DIGIT, XCHG_RM32_R32,
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

fn reg_modrm(reg_field: u8, rm_code: u8) -> u8 {
    0xC0 | ((reg_field & 0b111) << 3) | (rm_code & 0b111)
}

/// `MOVZX r32, r/m8` (spec.md §6: the `BYTE` size hint is stripped by
/// the caller before classifying the source operand).
pub fn encode_movzx(asm: &mut Assembler, dest: Reg32, src: &Operand) -> bool {
    asm.emit_byte(MOVZX_R32_RM8_0F);
    asm.emit_byte(MOVZX_R32_RM8);
    match src {
        Operand::Reg8(r) => {
            asm.emit_byte(reg_modrm(dest.code(), r.code()));
            true
        }
        mem if is_memory(mem) => emit_modrm(asm, dest.code(), mem),
        _ => false,
    }
}

/// `LEA r32, m` — the source must be a memory operand.
pub fn encode_lea(asm: &mut Assembler, dest: Reg32, src: &Operand) -> bool {
    if !is_memory(src) {
        return false;
    }
    asm.emit_byte(super::constants::LEA_R32_M);
    emit_modrm(asm, dest.code(), src)
}

/// `XCHG r/m32, r32` — one side must be a register.
pub fn encode_xchg(asm: &mut Assembler, dest: &Operand, src: &Operand) -> bool {
    match (dest, src) {
        (Operand::Reg32(d), Operand::Reg32(s)) => {
            asm.emit_byte(XCHG_RM32_R32);
            emit_modrm(asm, s.code(), &Operand::Reg32(*d))
        }
        (rm, Operand::Reg32(s)) if is_memory(rm) => {
            asm.emit_byte(XCHG_RM32_R32);
            emit_modrm(asm, s.code(), rm)
        }
        (Operand::Reg32(d), rm) if is_memory(rm) => {
            asm.emit_byte(XCHG_RM32_R32);
            emit_modrm(asm, d.code(), rm)
        }
        _ => false,
    }
}

enum Grp3 {
    Mul,
    Imul,
    Div,
    Idiv,
}

fn encode_grp3(asm: &mut Assembler, which: Grp3, operand: &Operand) -> bool {
    let digit = match which {
        Grp3::Mul => MUL_DIGIT,
        Grp3::Imul => IMUL_DIGIT,
        Grp3::Div => DIV_DIGIT,
        Grp3::Idiv => IDIV_DIGIT,
    };
    asm.emit_byte(GRP3_RM32);
    emit_modrm(asm, digit, operand)
}

pub fn encode_mul(asm: &mut Assembler, operand: &Operand) -> bool {
    encode_grp3(asm, Grp3::Mul, operand)
}

pub fn encode_div(asm: &mut Assembler, operand: &Operand) -> bool {
    encode_grp3(asm, Grp3::Div, operand)
}

pub fn encode_idiv(asm: &mut Assembler, operand: &Operand) -> bool {
    encode_grp3(asm, Grp3::Idiv, operand)
}

/// `IMUL r32, r/m32` — the two-operand form (spec.md §4.9 supplement);
/// the one-operand `edx:eax = eax * r/m32` form is not supported.
pub fn encode_imul(asm: &mut Assembler, dest: Reg32, src: &Operand) -> bool {
    asm.emit_byte(IMUL_R32_RM32_0F);
    asm.emit_byte(IMUL_R32_RM32);
    emit_modrm(asm, dest.code(), src)
}

pub fn encode_inc(asm: &mut Assembler, reg: Reg32) {
    asm.emit_byte(INC_R32_BASE + reg.code());
}

pub fn encode_dec(asm: &mut Assembler, reg: Reg32) {
    asm.emit_byte(DEC_R32_BASE + reg.code());
}

enum ShiftKind {
    Shl,
    Shr,
    Sar,
}

fn encode_shift(asm: &mut Assembler, which: ShiftKind, reg: Reg32, imm8: i64) -> bool {
    let Ok(count) = u8::try_from(imm8) else {
        return false;
    };
    let digit = match which {
        ShiftKind::Shl => SHL_DIGIT,
        ShiftKind::Shr => SHR_DIGIT,
        ShiftKind::Sar => SAR_DIGIT,
    };
    asm.emit_byte(SHIFT_RM32_IMM8);
    asm.emit_byte(reg_modrm(digit, reg.code()));
    asm.emit_byte(count);
    true
}

pub fn encode_shl(asm: &mut Assembler, reg: Reg32, imm8: i64) -> bool {
    encode_shift(asm, ShiftKind::Shl, reg, imm8)
}

pub fn encode_shr(asm: &mut Assembler, reg: Reg32, imm8: i64) -> bool {
    encode_shift(asm, ShiftKind::Shr, reg, imm8)
}

pub fn encode_sar(asm: &mut Assembler, reg: Reg32, imm8: i64) -> bool {
    encode_shift(asm, ShiftKind::Sar, reg, imm8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movzx_from_8bit_register() {
        let mut asm = Assembler::new();
        assert!(encode_movzx(&mut asm, Reg32::Eax, &Operand::Reg8(crate::registers::Reg8::Bl)));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x0F, 0xB6, 0xC3]);
    }

    #[test]
    fn inc_dec_use_short_forms() {
        let mut asm = Assembler::new();
        encode_inc(&mut asm, Reg32::Ecx);
        encode_dec(&mut asm, Reg32::Edx);
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x41, 0x4A]);
    }

    #[test]
    fn shl_encodes_group2_form() {
        let mut asm = Assembler::new();
        assert!(encode_shl(&mut asm, Reg32::Eax, 3));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0xC1, 0xE0, 0x03]);
    }
}
