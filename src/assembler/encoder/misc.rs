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

//! TEST and INT (spec.md §4.9): the two instructions that don't fit any
//! of the other families.

use super::addressing::emit_modrm;
use super::constants::{INT_IMM8, TEST_RM32_R32};
use crate::assembler::Assembler;
use crate::operand::Operand;

/// `TEST r/m32, r32`.
pub fn encode_test(asm: &mut Assembler, dest: &Operand, src: &Operand) -> bool {
    if let Operand::Reg32(s) = src {
        asm.emit_byte(TEST_RM32_R32);
        return emit_modrm(asm, s.code(), dest);
    }
    false
}

/// `INT imm8`. The operand must fit a single byte (spec.md §6: `INT`
/// with an immediate above `0FFH` is a diagnosable error, not a
/// truncation).
pub fn encode_int(asm: &mut Assembler, imm: i64) -> bool {
    let Ok(byte) = u8::try_from(imm) else {
        return false;
    };
    asm.emit_byte(INT_IMM8);
    asm.emit_byte(byte);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Reg32;

    #[test]
    fn test_reg_reg() {
        let mut asm = Assembler::new();
        assert!(encode_test(
            &mut asm,
            &Operand::Reg32(Reg32::Eax),
            &Operand::Reg32(Reg32::Ebx)
        ));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0x85, 0xD8]);
    }

    #[test]
    fn int_rejects_values_above_a_byte() {
        let mut asm = Assembler::new();
        assert!(!encode_int(&mut asm, 0x100));
    }

    #[test]
    fn int_accepts_a_byte() {
        let mut asm = Assembler::new();
        assert!(encode_int(&mut asm, 0x21));
        let program = asm.finish().unwrap();
        assert_eq!(program.image, vec![0xCD, 0x21]);
    }
}
