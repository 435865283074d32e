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

//! The two fixed register tables (spec.md §3 "Register tables"), populated
//! once and never mutated.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reg32 {
    Eax,
    Ecx,
    Edx,
    Ebx,
    Esp,
    Ebp,
    Esi,
    Edi,
}

impl Reg32 {
    /// The 3-bit encoding used in ModR/M `reg`/`r/m` and `+rd` opcodes.
    pub fn code(self) -> u8 {
        match self {
            Reg32::Eax => 0,
            Reg32::Ecx => 1,
            Reg32::Edx => 2,
            Reg32::Ebx => 3,
            Reg32::Esp => 4,
            Reg32::Ebp => 5,
            Reg32::Esi => 6,
            Reg32::Edi => 7,
        }
    }

    pub fn from_name(name: &str) -> Option<Reg32> {
        Some(match name {
            "EAX" => Reg32::Eax,
            "ECX" => Reg32::Ecx,
            "EDX" => Reg32::Edx,
            "EBX" => Reg32::Ebx,
            "ESP" => Reg32::Esp,
            "EBP" => Reg32::Ebp,
            "ESI" => Reg32::Esi,
            "EDI" => Reg32::Edi,
            _ => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reg8 {
    Al,
    Cl,
    Dl,
    Bl,
    Ah,
    Ch,
    Dh,
    Bh,
}

impl Reg8 {
    pub fn code(self) -> u8 {
        match self {
            Reg8::Al => 0,
            Reg8::Cl => 1,
            Reg8::Dl => 2,
            Reg8::Bl => 3,
            Reg8::Ah => 4,
            Reg8::Ch => 5,
            Reg8::Dh => 6,
            Reg8::Bh => 7,
        }
    }

    pub fn from_name(name: &str) -> Option<Reg8> {
        Some(match name {
            "AL" => Reg8::Al,
            "CL" => Reg8::Cl,
            "DL" => Reg8::Dl,
            "BL" => Reg8::Bl,
            "AH" => Reg8::Ah,
            "CH" => Reg8::Ch,
            "DH" => Reg8::Dh,
            "BH" => Reg8::Bh,
            _ => return None,
        })
    }
}
