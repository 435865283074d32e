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

//! The Emitter (spec.md §4.1): an append-only byte buffer with a position
//! counter. Appends move the position; patches never do.

use crate::errors::AssemblyError;

#[derive(Debug, Default)]
pub struct Emitter {
    image: Vec<u8>,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter::default()
    }

    pub fn current_position(&self) -> usize {
        self.image.len()
    }

    pub fn emit_byte(&mut self, byte: u8) {
        self.image.push(byte);
    }

    pub fn emit_dword(&mut self, dword: u32) {
        self.image.extend_from_slice(&dword.to_le_bytes());
    }

    /// Little-endian in-place overwrite of one byte. Does not move the
    /// position counter.
    pub fn patch_byte(&mut self, position: usize, value: u8) -> Result<(), AssemblyError> {
        let slot = self
            .image
            .get_mut(position)
            .ok_or(AssemblyError::PatchOutOfRange {
                position,
                width: 1,
                image_len: self.image.len(),
            })?;
        *slot = value;
        Ok(())
    }

    /// Little-endian in-place overwrite of a 4-byte window.
    pub fn patch_dword(&mut self, position: usize, value: u32) -> Result<(), AssemblyError> {
        let end = position
            .checked_add(4)
            .filter(|&end| end <= self.image.len())
            .ok_or(AssemblyError::PatchOutOfRange {
                position,
                width: 4,
                image_len: self.image.len(),
            })?;
        self.image[position..end].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn into_image(self) -> Vec<u8> {
        self.image
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_byte_advances_position_by_one() {
        let mut emitter = Emitter::new();
        assert_eq!(emitter.current_position(), 0);
        emitter.emit_byte(0xAB);
        assert_eq!(emitter.current_position(), 1);
        emitter.emit_byte(0xCD);
        assert_eq!(emitter.current_position(), 2);
        assert_eq!(emitter.image(), &[0xAB, 0xCD]);
    }

    #[test]
    fn emit_dword_is_little_endian_and_advances_by_four() {
        let mut emitter = Emitter::new();
        emitter.emit_dword(0x0102_0304);
        assert_eq!(emitter.current_position(), 4);
        assert_eq!(emitter.image(), &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn patch_does_not_move_position() {
        let mut emitter = Emitter::new();
        emitter.emit_dword(0);
        emitter.patch_dword(0, 0xDEAD_BEEF).unwrap();
        assert_eq!(emitter.current_position(), 4);
        assert_eq!(emitter.image(), &[0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn patch_out_of_range_is_an_error() {
        let mut emitter = Emitter::new();
        emitter.emit_byte(0);
        assert!(emitter.patch_dword(0, 1).is_err());
        assert!(emitter.patch_byte(5, 1).is_err());
    }
}
