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

//! Renders the assembled image as an ASCII hex dump (spec.md §6): two
//! uppercase hex digits per byte, space separated, 16 bytes per line.

const BYTES_PER_LINE: usize = 16;

/// Every byte is followed by a single space; every 16th byte additionally
/// ends its line. A final, short line still gets its own trailing
/// newline, matching the original tool's output byte for byte.
pub fn render(image: &[u8]) -> String {
    let mut out = String::with_capacity(image.len() * 3);
    for (i, byte) in image.iter().enumerate() {
        out.push_str(&format!("{byte:02X} "));
        if (i + 1) % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if image.len() % BYTES_PER_LINE != 0 {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_renders_empty_string() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn short_line_gets_a_trailing_newline() {
        assert_eq!(render(&[0xB8, 0x05]), "B8 05 \n");
    }

    #[test]
    fn sixteen_bytes_fill_exactly_one_line() {
        let image = vec![0xAB; 16];
        let rendered = render(&image);
        assert_eq!(rendered.matches('\n').count(), 1);
        assert!(rendered.ends_with("AB \n"));
    }

    #[test]
    fn seventeen_bytes_wrap_to_a_second_line() {
        let mut image = vec![0x00; 16];
        image.push(0xFF);
        let rendered = render(&image);
        assert_eq!(rendered.matches('\n').count(), 2);
        assert!(rendered.ends_with("FF \n"));
    }
}
