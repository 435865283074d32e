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

//! Mnemonics as a tagged enum, per spec.md §9's re-architecture note:
//! "Represent mnemonics as a tagged variant and dispatch by exhaustive
//! pattern match" rather than a string-compare ladder.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mnemonic {
    Mov,
    Movzx,
    Lea,
    Xchg,
    Add,
    Or,
    And,
    Sub,
    Xor,
    Cmp,
    Imul,
    Mul,
    Div,
    Idiv,
    Inc,
    Dec,
    Shl,
    Shr,
    Sar,
    Push,
    Pop,
    Leave,
    Ret,
    Nop,
    Test,
    Int,
    Jmp,
    Call,
    Loop,
    Jcc(Condition),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Condition {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Above,
    AboveEq,
    Below,
    BelowEq,
}

/// Directives that are recognized but carry no encoding (spec.md §4.8).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `SECTION` / `GLOBAL` / `EXTERN` / `BITS`: ignored outright.
    Ignored,
    /// `IDENT EQU ...`: ignored outright (no constant evaluation).
    Equ,
    /// `IDENT DD`: defines `IDENT` here, reserves 4 zero bytes.
    Dd,
    /// `IDENT DB`: defines `IDENT` here, reserves 1 zero byte.
    Db,
}

pub fn parse_mnemonic(token: &str) -> Option<Mnemonic> {
    use Mnemonic::*;
    Some(match token {
        "MOV" => Mov,
        "MOVZX" => Movzx,
        "LEA" => Lea,
        "XCHG" => Xchg,
        "ADD" => Add,
        "OR" => Or,
        "AND" => And,
        "SUB" => Sub,
        "XOR" => Xor,
        "CMP" => Cmp,
        "IMUL" => Imul,
        "MUL" => Mul,
        "DIV" => Div,
        "IDIV" => Idiv,
        "INC" => Inc,
        "DEC" => Dec,
        "SHL" => Shl,
        "SHR" => Shr,
        "SAR" => Sar,
        "PUSH" => Push,
        "POP" => Pop,
        "LEAVE" => Leave,
        "RET" => Ret,
        "NOP" => Nop,
        "TEST" => Test,
        "INT" => Int,
        "JMP" => Jmp,
        "CALL" => Call,
        "LOOP" => Loop,
        "JE" | "JZ" => Jcc(Condition::Eq),
        "JNE" | "JNZ" => Jcc(Condition::Ne),
        "JL" => Jcc(Condition::Lt),
        "JLE" => Jcc(Condition::Le),
        "JG" => Jcc(Condition::Gt),
        "JGE" => Jcc(Condition::Ge),
        "JA" => Jcc(Condition::Above),
        "JAE" => Jcc(Condition::AboveEq),
        "JB" => Jcc(Condition::Below),
        "JBE" => Jcc(Condition::BelowEq),
        _ => return None,
    })
}

pub fn parse_directive(token: &str) -> Option<Directive> {
    Some(match token {
        "SECTION" | "GLOBAL" | "EXTERN" | "BITS" => Directive::Ignored,
        "EQU" => Directive::Equ,
        "DD" => Directive::Dd,
        "DB" => Directive::Db,
        _ => return None,
    })
}

/// The `0x0F 0x8x` second opcode byte for each conditional jump, per
/// spec.md §4.6.
pub fn condition_opcode(cond: Condition) -> u8 {
    match cond {
        Condition::Eq => 0x84,
        Condition::Ne => 0x85,
        Condition::Lt => 0x8C,
        Condition::Le => 0x8E,
        Condition::Gt => 0x8F,
        Condition::Ge => 0x8D,
        Condition::Above => 0x87,
        Condition::AboveEq => 0x83,
        Condition::Below => 0x82,
        Condition::BelowEq => 0x86,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!(parse_mnemonic("JZ"), Some(Mnemonic::Jcc(Condition::Eq)));
        assert_eq!(parse_mnemonic("JE"), Some(Mnemonic::Jcc(Condition::Eq)));
        assert_eq!(parse_mnemonic("JNZ"), Some(Mnemonic::Jcc(Condition::Ne)));
    }

    #[test]
    fn unknown_mnemonic_is_none() {
        assert_eq!(parse_mnemonic("WIBBLE"), None);
    }

    #[test]
    fn condition_opcodes_match_table() {
        assert_eq!(condition_opcode(Condition::Lt), 0x8C);
        assert_eq!(condition_opcode(Condition::AboveEq), 0x83);
    }
}
