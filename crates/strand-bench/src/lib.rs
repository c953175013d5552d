//! Benchmark inputs for the strand string commons.
//!
//! Provides deterministic sample data shared by the benches:
//!
//! - [`sample_words`]: reproducible lowercase words of mixed length
//! - [`file_names`]: reproducible `name.ext` style file names

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Generate `n` deterministic lowercase words, 3 to 18 bytes long.
///
/// The same seed always yields the same words, so benchmark runs are
/// comparable across machines and revisions.
pub fn sample_words(n: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state
    };
    (0..n)
        .map(|_| {
            let len = 3 + (next() % 16) as usize;
            (0..len).map(|_| b'a' + (next() % 26) as u8).collect()
        })
        .collect()
}

/// Generate `n` deterministic file names cycling a few extensions.
pub fn file_names(n: usize, seed: u64) -> Vec<String> {
    const EXTS: [&str; 4] = ["txt", "md", "rs", "tar"];
    sample_words(n, seed)
        .into_iter()
        .enumerate()
        .map(|(i, stem)| {
            format!(
                "{}.{}",
                String::from_utf8_lossy(&stem),
                EXTS[i % EXTS.len()]
            )
        })
        .collect()
}
