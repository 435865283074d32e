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

//! The symbol table (spec.md §3): label name -> byte offset. Normalized
//! keys (uppercase, trimmed, no trailing colon) are the lexer's job, not
//! this module's.

use std::collections::HashMap;

pub type SymbolTable = HashMap<String, u32>;

/// Records a label definition at `position`. Per spec.md §9's decision on
/// label redefinition: first definition wins; a second definition of the
/// same label is reported (by returning `Some(previous_position)`) but
/// does not overwrite the table and does not stop the pass.
pub fn define(table: &mut SymbolTable, label: &str, position: u32) -> Option<u32> {
    if let Some(&existing) = table.get(label) {
        return Some(existing);
    }
    table.insert(label.to_string(), position);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_definition_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(define(&mut table, "START", 0), None);
        assert_eq!(define(&mut table, "START", 10), Some(0));
        assert_eq!(table["START"], 0);
    }
}
