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

//! Integration tests for slerp and for moving quaternions in and out of flat
//! buffers and serialized forms.

use approx::assert_relative_eq;
use orient_core::math::{Euler, EulerOrder, MathError, Quaternion, Vec3, EPSILON};

/// Angle of the rotation taking `a` to `b`, ignoring quaternion sign.
fn rotation_angle(a: Quaternion, b: Quaternion) -> f32 {
    2.0 * a.dot(b).abs().min(1.0).acos()
}

// ─────────────────────────────────────────────────────────────────────────────
// slerp
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_slerp_boundaries() {
    let q = Quaternion::from_euler(&Euler::new(0.2, -0.5, 1.0, EulerOrder::YXZ));
    let target = Quaternion::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 2.0);

    assert_eq!(q.slerp(target, 0.0), q);
    assert_eq!(q.slerp(target, 1.0), target);
    assert_relative_eq!(q.slerp(q, 0.5), q, epsilon = EPSILON);
}

#[test]
fn test_slerp_with_negated_self_stays_put() {
    let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 1.0).normalize(), 1.3);
    let negated = Quaternion::new(-q.x, -q.y, -q.z, -q.w);
    for step in 1..10 {
        let t = step as f32 / 10.0;
        let r = q.slerp(negated, t);
        assert!(rotation_angle(q, r) < 3e-3, "drifted at t = {t}");
    }
}

#[test]
fn test_slerp_follows_the_short_arc() {
    let start = Quaternion::from_axis_angle(Vec3::Y, 0.2);
    // Same rotation as 1.4 rad about Y, but on the far hemisphere.
    let target = -Quaternion::from_axis_angle(Vec3::Y, 1.4);
    assert!(start.dot(target) < 0.0);
    let total = rotation_angle(start, target);
    assert_relative_eq!(total, 1.2, epsilon = 1e-4);

    let mut previous = 0.0;
    for step in 1..=10 {
        let t = step as f32 / 10.0;
        let q = start.slerp(target, t);
        let travelled = rotation_angle(start, q);
        assert!(travelled > previous, "not monotonic at t = {t}");
        assert_relative_eq!(travelled, total * t, epsilon = 1e-4);
        assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);
        previous = travelled;
    }
}

#[test]
fn test_slerp_matches_axis_angle_interpolation() {
    let axis = Vec3::new(2.0, -1.0, 0.5).normalize();
    let start = Quaternion::from_axis_angle(axis, -0.4);
    let end = Quaternion::from_axis_angle(axis, 1.6);
    for t in [0.25, 0.5, 0.75] {
        let expected = Quaternion::from_axis_angle(axis, -0.4 + 2.0 * t);
        assert_relative_eq!(start.slerp(end, t), expected, epsilon = EPSILON);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flat buffers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_buffer_round_trip_is_exact() {
    let q = Quaternion::from_euler(&Euler::new(0.7, 0.1, -2.3, EulerOrder::XZY));
    let mut buffer = vec![0.0f32; 12];
    q.write_to_slice(&mut buffer, 5).unwrap();

    let restored = Quaternion::from_slice(&buffer, 5).unwrap();
    assert_eq!(restored, q);
    assert_eq!(&buffer[5..9], &[q.x, q.y, q.z, q.w]);
}

#[test]
fn test_buffer_packs_many_quaternions() {
    let qs: Vec<Quaternion> = (0..3)
        .map(|i| Quaternion::from_axis_angle(Vec3::Z, i as f32 * 0.5))
        .collect();
    let mut buffer = vec![0.0f32; qs.len() * Quaternion::NUM_COMPONENTS];
    for (i, q) in qs.iter().enumerate() {
        q.write_to_slice(&mut buffer, i * Quaternion::NUM_COMPONENTS)
            .unwrap();
    }
    assert_eq!(bytemuck::cast_slice::<Quaternion, f32>(&qs), &buffer[..]);
}

#[test]
fn test_buffer_bounds_are_checked() {
    let buffer = [0.0f32; 6];
    assert_eq!(
        Quaternion::from_slice(&buffer, 3),
        Err(MathError::BufferTooSmall {
            offset: 3,
            required: 4,
            len: 6
        })
    );
    assert!(Quaternion::from_slice(&buffer, 2).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialization
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_json_uses_component_order() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0,"w":4.0}"#);
    let back: Quaternion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn test_bincode_round_trip() {
    let config = bincode::config::standard();
    let q = Quaternion::from_axis_angle(Vec3::X, 0.9);
    let bytes = bincode::encode_to_vec(q, config).unwrap();
    assert_eq!(bytes.len(), 16);
    let (back, read): (Quaternion, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(read, 16);
    assert_eq!(back, q);

    let euler = Euler::new(0.1, 0.2, 0.3, EulerOrder::ZYX);
    let bytes = bincode::encode_to_vec(euler, config).unwrap();
    let (back, _): (Euler, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(back, euler);
}
