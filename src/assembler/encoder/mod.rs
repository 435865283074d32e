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

//! The encoder's dispatch entry point (spec.md §4): one `match` over
//! `Mnemonic`, routing to the per-family submodule that knows the
//! operand shapes and opcode bytes for that family.

mod addressing;
mod alu;
mod constants;
mod control_flow;
mod misc;
mod mov;
mod stack;
mod unary;

use crate::assembler::Assembler;
use crate::lexer;
use crate::mnemonic::Mnemonic;
use crate::operand::{self, Operand};
use crate::registers::Reg32;

/// Parses `operand_text` as exactly two comma-separated operands and
/// classifies each. Reports a diagnostic and returns `None` on a shape
/// the line doesn't have.
fn two_operands(operand_text: &str) -> Option<(Operand, Operand)> {
    let (dest_text, src_text) = lexer::split_operands(operand_text)?;
    Some((operand::classify(&dest_text), operand::classify(&src_text)))
}

/// Like `two_operands`, but strips a `BYTE`/`DWORD` size hint from the
/// source operand's own text before classifying it (spec.md §6: MOVZX's
/// source tolerates and discards this hint).
fn two_operands_strip_src_hint(operand_text: &str) -> Option<(Operand, Operand)> {
    let (dest_text, src_text) = lexer::split_operands(operand_text)?;
    let src_text = operand::strip_size_hint(&src_text);
    Some((operand::classify(&dest_text), operand::classify(src_text)))
}

fn require_reg32(operand: &Operand) -> Option<Reg32> {
    match operand {
        Operand::Reg32(r) => Some(*r),
        _ => None,
    }
}

/// Encodes one instruction. `operand_text` is the raw, un-split text
/// following the mnemonic; every instruction family is responsible for
/// splitting and classifying the operands it expects. Never fails: an
/// unencodable operand combination becomes a diagnostic, not an error
/// (spec.md §7).
pub fn encode_instruction(asm: &mut Assembler, mnem: Mnemonic, operand_text: &str) {
    use Mnemonic::*;

    let ok = match mnem {
        Mov => match two_operands(operand_text) {
            Some((dest, src)) => mov::encode_mov(asm, &dest, &src),
            None => false,
        },
        Movzx => match two_operands_strip_src_hint(operand_text) {
            Some((dest, src)) => match require_reg32(&dest) {
                Some(dest) => unary::encode_movzx(asm, dest, &src),
                None => false,
            },
            None => false,
        },
        Lea => match two_operands(operand_text) {
            Some((dest, src)) => match require_reg32(&dest) {
                Some(dest) => unary::encode_lea(asm, dest, &src),
                None => false,
            },
            None => false,
        },
        Xchg => match two_operands(operand_text) {
            Some((dest, src)) => unary::encode_xchg(asm, &dest, &src),
            None => false,
        },
        Add => binary(asm, operand_text, &constants::ADD_OPS),
        Or => binary(asm, operand_text, &constants::OR_OPS),
        And => binary(asm, operand_text, &constants::AND_OPS),
        Sub => binary(asm, operand_text, &constants::SUB_OPS),
        Xor => binary(asm, operand_text, &constants::XOR_OPS),
        Cmp => binary(asm, operand_text, &constants::CMP_OPS),
        Imul => match two_operands(operand_text) {
            Some((dest, src)) => match require_reg32(&dest) {
                Some(dest) => unary::encode_imul(asm, dest, &src),
                None => false,
            },
            None => false,
        },
        Mul => unary_grp3(asm, operand_text, unary::encode_mul),
        Div => unary_grp3(asm, operand_text, unary::encode_div),
        Idiv => unary_grp3(asm, operand_text, unary::encode_idiv),
        Inc => match require_reg32(&operand::classify(operand_text.trim())) {
            Some(reg) => {
                unary::encode_inc(asm, reg);
                true
            }
            None => false,
        },
        Dec => match require_reg32(&operand::classify(operand_text.trim())) {
            Some(reg) => {
                unary::encode_dec(asm, reg);
                true
            }
            None => false,
        },
        Shl => shift(asm, operand_text, unary::encode_shl),
        Shr => shift(asm, operand_text, unary::encode_shr),
        Sar => shift(asm, operand_text, unary::encode_sar),
        Push => stack::encode_push(asm, &operand::classify(operand_text.trim())),
        Pop => match require_reg32(&operand::classify(operand_text.trim())) {
            Some(reg) => {
                stack::encode_pop(asm, reg);
                true
            }
            None => false,
        },
        Leave => {
            stack::encode_leave(asm);
            true
        }
        Ret => {
            stack::encode_ret(asm);
            true
        }
        Nop => {
            stack::encode_nop(asm);
            true
        }
        Test => match two_operands(operand_text) {
            Some((dest, src)) => misc::encode_test(asm, &dest, &src),
            None => false,
        },
        Int => match operand::parse_immediate(operand_text.trim()) {
            Some(imm) => misc::encode_int(asm, imm),
            None => false,
        },
        Jmp => {
            control_flow::encode_jmp(asm, operand_text.trim());
            true
        }
        Call => {
            control_flow::encode_call(asm, operand_text.trim());
            true
        }
        Loop => {
            control_flow::encode_loop(asm, operand_text.trim());
            true
        }
        Jcc(cond) => {
            control_flow::encode_jcc(asm, cond, operand_text.trim());
            true
        }
    };

    if !ok {
        asm.warn(format!("could not encode operands for this instruction: {operand_text}"));
    }
}

fn binary(asm: &mut Assembler, operand_text: &str, ops: &constants::AluOpcodes) -> bool {
    match two_operands(operand_text) {
        Some((dest, src)) => alu::encode_binary(asm, ops, &dest, &src),
        None => false,
    }
}

fn unary_grp3(asm: &mut Assembler, operand_text: &str, encode: impl Fn(&mut Assembler, &Operand) -> bool) -> bool {
    let operand = operand::classify(operand_text.trim());
    encode(asm, &operand)
}

fn shift(
    asm: &mut Assembler,
    operand_text: &str,
    encode: impl Fn(&mut Assembler, Reg32, i64) -> bool,
) -> bool {
    match two_operands(operand_text) {
        Some((dest, Operand::Immediate(imm))) => match require_reg32(&dest) {
            Some(reg) => encode(asm, reg, imm),
            None => false,
        },
        _ => false,
    }
}
