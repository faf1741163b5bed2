// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors returned by the fallible accessors of the math types.

use std::fmt;

/// An error raised when a math value is read or written through an index or
/// a flat buffer that cannot hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A component index fell outside `0..count`.
    ComponentIndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of components the value has.
        count: usize,
    },
    /// A flat buffer is too short to hold `required` components at `offset`.
    BufferTooSmall {
        /// The first slot that would have been read or written.
        offset: usize,
        /// The number of consecutive slots needed.
        required: usize,
        /// The actual length of the buffer.
        len: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ComponentIndexOutOfRange { index, count } => {
                write!(
                    f,
                    "Component index {index} out of range (expected 0..{count})"
                )
            }
            MathError::BufferTooSmall {
                offset,
                required,
                len,
            } => {
                write!(
                    f,
                    "Buffer of length {len} cannot hold {required} components at offset {offset}"
                )
            }
        }
    }
}

impl std::error::Error for MathError {}
