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

//! Fixed IA-32 opcode bytes (spec.md §4 per-instruction tables). Grouped
//! by the encoder submodule that consumes them.

// MOV (spec.md §4.5)
pub const MOV_RM32_R32: u8 = 0x89;
pub const MOV_R32_RM32: u8 = 0x8B;
pub const MOV_MOFFS32_EAX: u8 = 0xA3;
pub const MOV_R32_IMM32_BASE: u8 = 0xB8;
pub const MOV_RM32_IMM32: u8 = 0xC7;
pub const MOV_RM32_IMM32_SUB: u8 = 0;

// MOVZX (spec.md §4.9 / original's zero-extend load)
pub const MOVZX_R32_RM8_0F: u8 = 0x0F;
pub const MOVZX_R32_RM8: u8 = 0xB6;

// LEA
pub const LEA_R32_M: u8 = 0x8D;

// XCHG
pub const XCHG_RM32_R32: u8 = 0x87;

// ALU row: (rm32,r32) (r32,rm32) (eax,imm32) (rm32,imm32 /digit) (rm32,imm8 sign-extended /digit)
pub struct AluOpcodes {
    pub rm_r: u8,
    pub r_rm: u8,
    pub eax_imm: u8,
    pub rm_imm: u8,
    pub rm_imm8: u8,
    pub digit: u8,
}

pub const ADD_OPS: AluOpcodes = AluOpcodes { rm_r: 0x01, r_rm: 0x03, eax_imm: 0x05, rm_imm: 0x81, rm_imm8: 0x83, digit: 0 };
pub const OR_OPS: AluOpcodes = AluOpcodes { rm_r: 0x09, r_rm: 0x0B, eax_imm: 0x0D, rm_imm: 0x81, rm_imm8: 0x83, digit: 1 };
pub const AND_OPS: AluOpcodes = AluOpcodes { rm_r: 0x21, r_rm: 0x23, eax_imm: 0x25, rm_imm: 0x81, rm_imm8: 0x83, digit: 4 };
pub const SUB_OPS: AluOpcodes = AluOpcodes { rm_r: 0x29, r_rm: 0x2B, eax_imm: 0x2D, rm_imm: 0x81, rm_imm8: 0x83, digit: 5 };
pub const XOR_OPS: AluOpcodes = AluOpcodes { rm_r: 0x31, r_rm: 0x33, eax_imm: 0x35, rm_imm: 0x81, rm_imm8: 0x83, digit: 6 };
pub const CMP_OPS: AluOpcodes = AluOpcodes { rm_r: 0x39, r_rm: 0x3B, eax_imm: 0x3D, rm_imm: 0x81, rm_imm8: 0x83, digit: 7 };

// Group 3 unary (IMUL/MUL/DIV/IDIV as r/m32 forms, spec.md §4.9)
pub const GRP3_RM32: u8 = 0xF7;
pub const MUL_DIGIT: u8 = 4;
pub const IMUL_DIGIT: u8 = 5;
pub const DIV_DIGIT: u8 = 6;
pub const IDIV_DIGIT: u8 = 7;
pub const IMUL_R32_RM32_0F: u8 = 0x0F;
pub const IMUL_R32_RM32: u8 = 0xAF;

// INC/DEC as +rd short forms
pub const INC_R32_BASE: u8 = 0x40;
pub const DEC_R32_BASE: u8 = 0x48;

// Group 2 shifts (spec.md §4.9 supplement)
pub const SHIFT_RM32_IMM8: u8 = 0xC1;
pub const SHL_DIGIT: u8 = 4;
pub const SHR_DIGIT: u8 = 5;
pub const SAR_DIGIT: u8 = 7;

// Stack
pub const PUSH_R32_BASE: u8 = 0x50;
pub const POP_R32_BASE: u8 = 0x58;
pub const PUSH_IMM32: u8 = 0x68;
pub const PUSH_RM32: u8 = 0xFF;
pub const PUSH_RM32_DIGIT: u8 = 6;
pub const LEAVE_OPCODE: u8 = 0xC9;
pub const RET_OPCODE: u8 = 0xC3;
pub const NOP_OPCODE: u8 = 0x90;

// Misc
pub const TEST_RM32_R32: u8 = 0x85;
pub const INT_IMM8: u8 = 0xCD;

// Control flow
pub const JMP_REL32: u8 = 0xE9;
pub const CALL_REL32: u8 = 0xE8;
pub const LOOP_REL8: u8 = 0xE2;
pub const JCC_REL32_0F: u8 = 0x0F;
