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

//! Euler angle rotations and their axis orderings.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The order in which the three elemental rotations of an [`Euler`] are
/// applied.
///
/// The name lists the axes from the outermost rotation to the innermost one:
/// `XYZ` builds the rotation as `Rx * Ry * Rz`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub enum EulerOrder {
    /// `Rx * Ry * Rz`.
    #[default]
    XYZ,
    /// `Ry * Rx * Rz`.
    YXZ,
    /// `Rz * Rx * Ry`.
    ZXY,
    /// `Rz * Ry * Rx`.
    ZYX,
    /// `Ry * Rz * Rx`.
    YZX,
    /// `Rx * Rz * Ry`.
    XZY,
}

impl EulerOrder {
    /// Every supported ordering.
    pub const ALL: [EulerOrder; 6] = [
        EulerOrder::XYZ,
        EulerOrder::YXZ,
        EulerOrder::ZXY,
        EulerOrder::ZYX,
        EulerOrder::YZX,
        EulerOrder::XZY,
    ];
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EulerOrder::XYZ => "XYZ",
            EulerOrder::YXZ => "YXZ",
            EulerOrder::ZXY => "ZXY",
            EulerOrder::ZYX => "ZYX",
            EulerOrder::YZX => "YZX",
            EulerOrder::XZY => "XZY",
        };
        f.write_str(name)
    }
}

/// A rotation expressed as three angles about the coordinate axes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode,
)]
pub struct Euler {
    /// Rotation about the X-axis, in radians.
    pub x: f32,
    /// Rotation about the Y-axis, in radians.
    pub y: f32,
    /// Rotation about the Z-axis, in radians.
    pub z: f32,
    /// The order the three rotations are composed in.
    pub order: EulerOrder,
}

impl Euler {
    /// Creates a new set of Euler angles.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }
}
