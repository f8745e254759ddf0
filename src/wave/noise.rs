use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Coherent noise sampled at a 3D coordinate.
///
/// Implementations must be pure: the same coordinate always yields the same
/// value. Output is nominally in `[0.0, 1.0]`.
pub trait NoiseSource {
    fn noise(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

/*
Improved Perlin Noise
=====================

Space is cut into a lattice of unit cubes. Each lattice corner gets a
pseudo-random gradient picked through a permutation table; the value at a
point is the blend of each corner's gradient dotted with the offset from that
corner.

  1. Find the unit cube containing the point and the point's offset in it.
  2. Hash the 8 corners through the permutation table.
  3. Dot each corner's gradient with the offset to the point.
  4. Blend the 8 results with the quintic fade 6t⁵ - 15t⁴ + 10t³,
     which has zero first and second derivatives at the cube faces.

The raw result lies in about [-1, 1] and is zero on every lattice point. We
remap it to [0, 1] (clamped, since the corners can overshoot slightly) so
callers can treat it as a unipolar level.

The permutation table is a shuffle of 0..=255 from a seeded RNG, doubled to
512 entries so corner lookups never need wrapping.
*/

const TABLE_SIZE: usize = 256;

/// Seeded 3D improved Perlin noise, remapped to `[0.0, 1.0]`.
#[derive(Clone)]
pub struct PerlinNoise {
    perm: [u8; TABLE_SIZE * 2],
    seed: u64,
}

impl PerlinNoise {
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255u8).collect();
        table.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i % TABLE_SIZE];
        }

        Self { perm, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Raw signed noise, roughly in `[-1.0, 1.0]`.
    pub fn signed(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let xi = lattice(xf);
        let yi = lattice(yf);
        let zi = lattice(zf);

        let (x, y, z) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let near = lerp(
            v,
            lerp(u, grad(self.p(aa), x, y, z), grad(self.p(ba), x - 1.0, y, z)),
            lerp(
                u,
                grad(self.p(ab), x, y - 1.0, z),
                grad(self.p(bb), x - 1.0, y - 1.0, z),
            ),
        );
        let far = lerp(
            v,
            lerp(
                u,
                grad(self.p(aa + 1), x, y, z - 1.0),
                grad(self.p(ba + 1), x - 1.0, y, z - 1.0),
            ),
            lerp(
                u,
                grad(self.p(ab + 1), x, y - 1.0, z - 1.0),
                grad(self.p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            ),
        );

        lerp(w, near, far)
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.signed(x, y, z) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Wrap a floored coordinate onto the permutation table.
#[inline]
fn lattice(floored: f64) -> usize {
    // NaN and out-of-range values saturate; the table index stays valid.
    (floored as i64 & (TABLE_SIZE as i64 - 1)) as usize
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of 12 cube-edge gradients picked by the hash.
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_range() {
        let noise = PerlinNoise::new(7);
        for i in 0..2_000 {
            let x = i as f64 * 0.037;
            let v = noise.noise(x, x * 0.5 - 3.0, 1.25);
            assert!((0.0..=1.0).contains(&v), "noise out of range at {x}: {v}");
        }
    }

    #[test]
    fn lattice_points_sit_at_midlevel() {
        let noise = PerlinNoise::new(3);
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (4.0, -2.0, 9.0), (17.0, 3.0, -1.0)] {
            assert!((noise.noise(x, y, z) - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = PerlinNoise::new(42);
        let b = PerlinNoise::new(42);
        for i in 0..50 {
            let x = i as f64 * 0.31;
            assert_eq!(a.noise(x, 0.7, 0.2), b.noise(x, 0.7, 0.2));
        }
    }

    #[test]
    fn different_seeds_differ_somewhere() {
        let a = PerlinNoise::new(1);
        let b = PerlinNoise::new(2);
        let differs = (0..50).any(|i| {
            let x = 0.5 + i as f64 * 0.31;
            (a.noise(x, 0.7, 0.2) - b.noise(x, 0.7, 0.2)).abs() > 1e-9
        });
        assert!(differs);
    }

    #[test]
    fn small_steps_give_small_changes() {
        let noise = PerlinNoise::default();
        let mut last = noise.noise(0.0, 0.3, 0.6);
        for i in 1..500 {
            let v = noise.noise(i as f64 * 0.001, 0.3, 0.6);
            assert!((v - last).abs() < 0.01, "jump at step {i}: {last} -> {v}");
            last = v;
        }
    }

    #[test]
    fn closures_are_noise_sources() {
        let flat = |_x: f64, _y: f64, _z: f64| 0.25;
        assert_eq!(flat.noise(1.0, 2.0, 3.0), 0.25);
    }
}
