//! Cheap low-frequency "noise" built from a weighted sum of sines.
//!
//! This is not Perlin noise. It is smooth, periodic-ish and costs three trig
//! calls, which is all the aurora and fog need. Anything with the same
//! signature can stand in for it.

/// Weights sum to one, so the output stays within `[-1, 1]`.
const OCTAVES: [(f64, f64, f64, f64, f64); 3] = [
    // weight, x freq, y freq, t freq, phase
    (0.5, 1.7, 0.0, 0.6, 0.0),
    (0.3, 0.8, 2.3, -0.4, 1.3),
    (0.2, 1.3, 1.3, 0.9, 2.1),
];

pub fn noise(x: f64, y: f64, t: f64) -> f64 {
    let sum: f64 = OCTAVES
        .iter()
        .enumerate()
        .map(|(i, &(weight, fx, fy, ft, phase))| {
            let arg = x * fx + y * fy + t * ft + phase;
            if i % 2 == 0 {
                weight * arg.sin()
            } else {
                weight * arg.cos()
            }
        })
        .sum();
    sum.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_range() {
        for i in 0..200 {
            let f = i as f64 * 0.37;
            let v = noise(f, f * 0.5 - 3.0, f * 1.9);
            assert!((-1.0..=1.0).contains(&v), "noise({f}) = {v}");
        }
    }

    #[test]
    fn is_deterministic_and_continuous() {
        let a = noise(1.25, 0.4, 10.0);
        assert_eq!(a, noise(1.25, 0.4, 10.0));
        let b = noise(1.25, 0.4, 10.001);
        assert!((a - b).abs() < 0.01);
    }

    #[test]
    fn varies_over_time() {
        let samples: Vec<f64> = (0..10).map(|i| noise(0.5, 0.5, i as f64)).collect();
        let min = samples.iter().cloned().fold(f64::MAX, f64::min);
        let max = samples.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max - min > 0.2);
    }
}
