/// N50 of a set of lengths: the largest length L such that records of
/// length >= L cover at least half (floor) of `total`.
///
/// `lengths` is consumed and sorted in place; `total` must be its sum.
/// An empty list gives 0 without sorting.
pub fn n50(mut lengths: Vec<u64>, total: u64) -> u64 {
    if lengths.is_empty() {
        return 0;
    }
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    let half = total / 2;
    let mut acc = 0;
    lengths
        .iter()
        .find(|&&len| {
            acc += len;
            acc >= half
        })
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn n50_of(lengths: &[u64]) -> u64 {
        n50(lengths.to_vec(), lengths.iter().sum())
    }

    #[test]
    fn test_n50_basic() {
        assert_eq!(n50_of(&[100, 200, 300, 400]), 300);
        assert_eq!(n50_of(&[50]), 50);
        // 24 + 20 = 44 >= 48 / 2
        assert_eq!(n50_of(&[20, 24, 4]), 24);
    }

    #[test]
    fn test_n50_degenerate() {
        assert_eq!(n50(Vec::new(), 0), 0);
        assert_eq!(n50_of(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_n50_ties_and_order_independence() {
        assert_eq!(n50_of(&[10, 10, 10, 10]), 10);
        // half = 10: 9 alone falls short, 9 + 5 reaches it
        assert_eq!(n50_of(&[1, 9, 5, 5]), 5);
        assert_eq!(n50_of(&[5, 1, 5, 9]), 5);
        // half = 2: first cumulative >= 2 is 3
        assert_eq!(n50_of(&[1, 1, 3]), 3);
    }

    #[test]
    fn test_n50_against_cumulative_scan() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n = rng.gen_range(1..60);
            let lengths: Vec<u64> = (0..n).map(|_| rng.gen_range(0..5_000)).collect();
            let total: u64 = lengths.iter().sum();
            let value = n50(lengths.clone(), total);

            let mut sorted = lengths.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            let csum: Vec<u64> = sorted
                .iter()
                .scan(0, |acc, &l| {
                    *acc += l;
                    Some(*acc)
                })
                .collect();
            let idx = csum.iter().position(|&c| c >= total / 2).unwrap();

            assert_eq!(value, sorted[idx]);
            assert!(csum[..idx].iter().all(|&c| c < total / 2));
            assert!(sorted.contains(&value));
            assert!(value >= *sorted.last().unwrap() && value <= sorted[0]);
        }
    }
}
