use crate::settings::Settings;
use crate::util::mean;

// Numerical Recipes LCG parameters
const LCG_MODULUS: f64 = 4_294_967_296.0; // 2^32
const LCG_MULTIPLIER: u64 = 1_664_525;
const LCG_INCREMENT: u64 = 1_013_904_223;

/// Split `seeds` into `group_count` contiguous runs of equal base size,
/// spreading the leftover tail elements front-to-back over the groups.
///
/// `group_count` must be at least 1.
pub fn partition(seeds: &[u64], group_count: usize) -> Vec<Vec<u64>> {
    let sl = seeds.len();
    let min_group_size = sl / group_count;

    let mut groups: Vec<Vec<u64>> = (0..group_count)
        .map(|i| seeds[i * min_group_size..(i + 1) * min_group_size].to_vec())
        .collect();

    let leftover = sl % group_count;
    for i in 0..leftover {
        groups[i * group_count / leftover].push(seeds[sl - leftover + i]);
    }

    groups
}

/// Arithmetic mean of each partition group.
pub fn group_means(seeds: &[u64], group_count: usize) -> Vec<f64> {
    partition(seeds, group_count)
        .iter()
        .map(|group| {
            let values = group.iter().map(|&v| v as f64).collect::<Vec<_>>();
            mean(&values).unwrap_or(0.0)
        })
        .collect()
}

/// Derive a password from an ordered sequence of inter-keystroke millisecond
/// deltas.
///
/// Fully deterministic: identical seeds and settings yield the identical
/// string on every call. Fewer seeds than output characters yields the empty
/// string.
pub fn derive_password(seeds: &[u64], settings: &Settings) -> String {
    let pl = settings.password_length();
    let sl = seeds.len();
    if sl < pl {
        return String::new();
    }

    let means = group_means(seeds, pl);
    let pool = settings.character_set();
    let pool_len = pool.len() as f64;

    let mut password = String::with_capacity(pl);
    for (i, &seed) in means.iter().enumerate() {
        // The round count for group i is the mean of a different,
        // index-shuffled group; fractional counts take one extra round.
        let partner = ((LCG_MULTIPLIER * i as u64 + LCG_INCREMENT) % pl as u64) as usize;
        let rounds = means[partner];

        let mut z = seed;
        let mut j = 0.0;
        while j < rounds {
            z = (LCG_MULTIPLIER as f64 * z + LCG_INCREMENT as f64) % LCG_MODULUS;
            j += 1.0;
        }

        let rand = z / LCG_MODULUS;
        let idx = ((rand * pool_len) as usize).min(pool.len() - 1);
        password.push(pool[idx]);
    }

    password
}
