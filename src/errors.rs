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

use thiserror::Error;

/// A fatal assembler condition: something the pass cannot recover from on
/// its own. Per-line mistakes (bad mnemonic, bad operand, out-of-range
/// immediate) are not fatal; they are recorded as `Diagnostic`s instead.
#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("failed to read input: {0}")]
    Io(String),

    #[error(
        "patch at position {position} (width {width}) falls outside the {image_len}-byte image"
    )]
    PatchOutOfRange {
        position: usize,
        width: usize,
        image_len: usize,
    },
}

/// A recoverable, per-line problem. The pass always continues after
/// recording one of these; they accumulate and are reported on stderr by
/// the CLI driver once assembly finishes (spec: diagnostics never stop
/// the pass).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
