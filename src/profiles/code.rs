//! 4-digit profile codes and the collision-checked generator.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::store::{CodeRegistry, StoreError};

pub const CODE_MIN: u16 = 1000;
pub const CODE_MAX: u16 = 9999;
pub const MAX_CODE_ATTEMPTS: u32 = 10;

/// Exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileCode(String);

impl ProfileCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()))
            .then(|| Self(trimmed.to_string()))
    }

    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(CODE_MIN..=CODE_MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("unable to generate unique profile code after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Draws codes until one is free, checking at most `max_attempts` draws.
pub async fn generate_unique_code<C, R>(
    registry: &C,
    rng: &mut R,
    max_attempts: u32,
) -> Result<ProfileCode, CodeError>
where
    C: CodeRegistry + ?Sized,
    R: Rng + Send,
{
    for attempt in 1..=max_attempts {
        let code = ProfileCode::draw(rng);
        if !registry.is_code_taken(&code).await? {
            debug!(attempt, "profile code accepted");
            return Ok(code);
        }
        debug!(attempt, "profile code collision");
    }
    warn!(max_attempts, "no free profile code found");
    Err(CodeError::Exhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// Reports the first `collisions` lookups as taken.
    struct CollidingRegistry {
        collisions: u32,
        lookups: AtomicU32,
    }

    impl CollidingRegistry {
        fn new(collisions: u32) -> Self {
            Self {
                collisions,
                lookups: AtomicU32::new(0),
            }
        }

        fn lookups(&self) -> u32 {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CodeRegistry for CollidingRegistry {
        async fn is_code_taken(&self, _code: &ProfileCode) -> Result<bool, StoreError> {
            let n = self.lookups.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(n <= self.collisions)
        }
    }

    struct BrokenRegistry;

    #[async_trait]
    impl CodeRegistry for BrokenRegistry {
        async fn is_code_taken(&self, _code: &ProfileCode) -> Result<bool, StoreError> {
            Err(StoreError::Backend(sqlx::Error::PoolTimedOut))
        }
    }

    #[test]
    fn drawn_codes_are_four_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let code = ProfileCode::draw(&mut rng);
            assert!(ProfileCode::parse(code.as_str()).is_some(), "{code}");
            let n: u16 = code.as_str().parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&n));
        }
    }

    #[tokio::test]
    async fn returns_tenth_draw_after_nine_collisions() {
        let registry = CollidingRegistry::new(9);
        let mut rng = StdRng::seed_from_u64(42);
        let code = generate_unique_code(&registry, &mut rng, MAX_CODE_ATTEMPTS)
            .await
            .expect("tenth draw is free");

        let mut replay = StdRng::seed_from_u64(42);
        let tenth = (0..10).map(|_| ProfileCode::draw(&mut replay)).last().unwrap();
        assert_eq!(code, tenth);
        assert_eq!(registry.lookups(), 10);
    }

    #[tokio::test]
    async fn gives_up_after_exactly_ten_attempts() {
        let registry = CollidingRegistry::new(u32::MAX);
        let mut rng = StdRng::seed_from_u64(7);
        let err = generate_unique_code(&registry, &mut rng, MAX_CODE_ATTEMPTS)
            .await
            .unwrap_err();
        assert!(matches!(err, CodeError::Exhausted { attempts: 10 }));
        assert_eq!(registry.lookups(), 10);
        assert_eq!(
            err.to_string(),
            "unable to generate unique profile code after 10 attempts"
        );
    }

    #[tokio::test]
    async fn backend_failure_is_not_a_collision() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate_unique_code(&BrokenRegistry, &mut rng, MAX_CODE_ATTEMPTS)
            .await
            .unwrap_err();
        assert!(matches!(err, CodeError::Store(StoreError::Backend(_))));
    }
}
