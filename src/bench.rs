//! Benchmarking helpers for keytrie.
//!
//! Deterministic key sets for the criterion benches, so runs are comparable
//! without a word list on disk.

/// Generate `count` distinct command-like keys sharing a handful of prefixes,
/// e.g. `AT+CMGS0017`.
pub fn command_keys(count: usize) -> Vec<String> {
    const STEMS: [&str; 6] = ["AT+CMGS", "AT+CMGR", "AT+CPIN", "AT+CSQ", "ATZ", "AT^SYSINFO"];
    (0..count)
        .map(|i| format!("{}{:04}", STEMS[i % STEMS.len()], i / STEMS.len()))
        .collect()
}

/// Generate `count` distinct lowercase keys of varying length from a simple
/// linear congruential sequence.
pub fn pseudo_random_keys(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let len = 3 + (state >> 60) as usize;
            let mut key: String = (0..len)
                .map(|j| (b'a' + ((state >> (j * 5 % 59)) % 26) as u8) as char)
                .collect();
            // Suffix keeps keys distinct regardless of collisions above.
            key.push_str(&i.to_string());
            key
        })
        .collect()
}
