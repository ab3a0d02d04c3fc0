//! Identity generation: display user-agents and session identifiers

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CloakError, Result};

/// Fixed pool of realistic browser user-agent strings
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:134.0) Gecko/20100101 Firefox/134.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_7_3) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
];

const SESSION_ID_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of cryptographically secure randomness.
///
/// Injected rather than read from a process-wide global so callers (and
/// tests) can supply deterministic sequences. Production code uses
/// [`OsRandom`].
pub trait RandomSource: Send {
    /// Fill `dest` with random bytes, or fail if the source is unavailable.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| CloakError::RandomSourceUnavailable)
    }
}

/// Draw a uniform index in `0..bound` by rejection sampling
fn next_index(src: &mut dyn RandomSource, bound: u32) -> Result<u32> {
    debug_assert!(bound > 0);
    // Largest multiple of `bound` representable in 32 bits; values at or
    // above it would bias the modulo and are redrawn.
    let limit = (1u64 << 32) / u64::from(bound) * u64::from(bound);
    loop {
        let mut buf = [0u8; 4];
        src.try_fill_bytes(&mut buf)?;
        let v = u32::from_le_bytes(buf);
        if u64::from(v) < limit {
            return Ok(v % bound);
        }
    }
}

/// Pick a random user-agent from the fixed pool.
///
/// Falls back to the first pool entry if the random source fails; user-agent
/// selection is cosmetic and never surfaces an error.
pub fn random_user_agent(src: &mut dyn RandomSource) -> &'static str {
    match next_index(src, USER_AGENTS.len() as u32) {
        Ok(i) => USER_AGENTS[i as usize],
        Err(_) => USER_AGENTS[0],
    }
}

/// Generate a random alphanumeric session identifier of `length` characters.
///
/// Fails with [`CloakError::RandomSourceUnavailable`] if the source is
/// exhausted; callers must treat that as an unrecoverable environment error.
pub fn generate_session_id(src: &mut dyn RandomSource, length: usize) -> Result<String> {
    let mut id = String::with_capacity(length);
    for _ in 0..length {
        let i = next_index(src, SESSION_ID_CHARSET.len() as u32)?;
        id.push(SESSION_ID_CHARSET[i as usize] as char);
    }
    Ok(id)
}


#[cfg(test)]
mod tests {
    use super::testing::{FailingSource, StepSource};
    use super::*;

    #[test]
    fn test_random_user_agent_in_pool() {
        let mut src = OsRandom;
        for _ in 0..20 {
            let ua = random_user_agent(&mut src);
            assert!(USER_AGENTS.contains(&ua));
        }
    }

    #[test]
    fn test_random_user_agent_falls_back_on_failure() {
        let mut src = FailingSource;
        assert_eq!(random_user_agent(&mut src), USER_AGENTS[0]);
    }

    #[test]
    fn test_session_id_length_and_charset() {
        let mut src = OsRandom;
        for len in [1, 5, 32] {
            let id = generate_session_id(&mut src, len).unwrap();
            assert_eq!(id.len(), len);
            assert!(id.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_session_id_deterministic_source() {
        let mut src = StepSource::new();
        // Indices 0..5 over the charset
        assert_eq!(generate_session_id(&mut src, 5).unwrap(), "abcde");
    }

    #[test]
    fn test_session_id_fails_when_source_unavailable() {
        let mut src = FailingSource;
        let err = generate_session_id(&mut src, 5).unwrap_err();
        assert!(matches!(err, CloakError::RandomSourceUnavailable));
    }

    #[test]
    fn test_consecutive_session_ids_differ() {
        let mut src = OsRandom;
        let a = generate_session_id(&mut src, 16).unwrap();
        let b = generate_session_id(&mut src, 16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_index_bound_one() {
        let mut src = StepSource::new();
        assert_eq!(next_index(&mut src, 1).unwrap(), 0);
    }
}
