use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of stars in the backdrop.
pub const STAR_COUNT: usize = 10_000;

/// Width and height of the box the stars are scattered in, centered on the
/// origin in x and y.
pub const STAR_SPREAD: f32 = 2000.0;

/// How far the box extends along negative z. Stars only ever sit in front of
/// the viewer, never behind.
pub const STAR_DEPTH: f32 = 2000.0;

/// Generate `count` star positions, x and y uniform in
/// [-STAR_SPREAD/2, STAR_SPREAD/2] and z uniform in [-STAR_DEPTH, 0].
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        let x = (rng.random::<f32>() - 0.5) * STAR_SPREAD;
        let y = (rng.random::<f32>() - 0.5) * STAR_SPREAD;
        let z = -rng.random::<f32>() * STAR_DEPTH;
        stars.push([x, y, z]);
    }

    stars
}

/// Deterministic variant for reproducible fields.
pub fn generate_seeded(count: usize, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_bounds() {
        let stars = generate_seeded(STAR_COUNT, 7);
        assert_eq!(stars.len(), STAR_COUNT);

        for [x, y, z] in stars {
            assert!((-1000.0..=1000.0).contains(&x), "x out of bounds: {}", x);
            assert!((-1000.0..=1000.0).contains(&y), "y out of bounds: {}", y);
            assert!((-2000.0..=0.0).contains(&z), "z out of bounds: {}", z);
        }
    }

    #[test]
    fn test_seed_determinism() {
        let a = generate_seeded(500, 42);
        let b = generate_seeded(500, 42);
        assert_eq!(a, b);

        let c = generate_seeded(500, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stars_fill_the_box() {
        // With 10k uniform samples every octant of the box should be hit.
        let stars = generate_seeded(STAR_COUNT, 1);
        let in_near_half = stars.iter().filter(|[_, _, z]| *z > -1000.0).count();
        let in_far_half = stars.len() - in_near_half;
        assert!(in_near_half > STAR_COUNT / 3);
        assert!(in_far_half > STAR_COUNT / 3);
    }
}
