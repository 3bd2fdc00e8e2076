//! Background starfield: points scattered through a spherical shell.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldParams {
    /// Inner radius of the shell.
    pub radius: f32,
    /// Shell thickness.
    pub depth: f32,
    pub count: usize,
    /// Size multiplier.
    pub factor: f32,
    pub saturation: f32,
    pub lightness: f32,
    /// Soft round edges instead of hard squares.
    pub fade: bool,
    /// Twinkle speed.
    pub speed: f32,
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub color: Vec3,
}

/// Generate the starfield. The distance of each star shrinks from
/// `radius + depth` toward `radius` as the index grows, and the hue walks once
/// around the color wheel.
pub fn generate_stars(params: &StarfieldParams) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let count = params.count;
    let increment = if count > 0 {
        params.depth / count as f32
    } else {
        0.0
    };
    let mut r = params.radius + params.depth;
    (0..count)
        .map(|i| {
            r -= increment * rng.gen::<f32>();
            let phi = (1.0 - rng.gen::<f32>() * 2.0).clamp(-1.0, 1.0).acos();
            let theta = rng.gen::<f32>() * TAU;
            let size = (0.5 + 0.5 * rng.gen::<f32>()) * params.factor;
            Star {
                position: from_spherical(r, phi, theta),
                size,
                color: hsl_to_rgb(i as f32 / count as f32, params.saturation, params.lightness),
            }
        })
        .collect()
}

/// Spherical to Cartesian with +Y as the polar axis.
#[inline]
pub fn from_spherical(r: f32, phi: f32, theta: f32) -> Vec3 {
    let s = phi.sin() * r;
    Vec3::new(s * theta.sin(), phi.cos() * r, s * theta.cos())
}

pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s <= 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    Vec3::new(hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0))
}
