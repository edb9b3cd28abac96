//! Random password suggestions.
//!
//! The random source is always passed in. [`suggest_default`] is the only
//! place that seeds one, from OS entropy into a fast non-cryptographic
//! [`SmallRng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::PasswordError;
use crate::types::SuggestionBatch;

/// ASCII letters, digits and the 32 ASCII punctuation symbols.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generates `count` passwords of `length` characters each.
///
/// Characters are drawn uniformly from [`ALPHABET`] with replacement. The
/// output depends only on the values `rng` yields, so a seeded generator
/// reproduces the same batch.
///
/// # Errors
///
/// Returns `InvalidArgument` if `count` or `length` is zero.
pub fn suggest<R: Rng + ?Sized>(
    count: usize,
    length: usize,
    rng: &mut R,
) -> Result<SuggestionBatch, PasswordError> {
    if count == 0 {
        return Err(PasswordError::invalid("count", count));
    }
    if length == 0 {
        return Err(PasswordError::invalid("length", length));
    }

    Ok(generate_batch(count, length, rng))
}

/// Generates a batch sized by `config`.
pub fn suggest_with<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<SuggestionBatch, PasswordError> {
    suggest(config.suggestion_count, config.suggestion_length, rng)
}

/// Generates the default batch (3 × 12) from an entropy-seeded [`SmallRng`].
pub fn suggest_default() -> SuggestionBatch {
    let config = Config::default();
    generate_batch(
        config.suggestion_count,
        config.suggestion_length,
        &mut SmallRng::from_entropy(),
    )
}

// Callers guarantee count and length are positive.
fn generate_batch<R: Rng + ?Sized>(count: usize, length: usize, rng: &mut R) -> SuggestionBatch {
    let passwords = (0..count).map(|_| random_password(length, &mut *rng)).collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Generated {} suggestions of {} characters", count, length);

    SuggestionBatch::new(passwords)
}

// gen_range rejects out-of-zone samples, so every symbol is equally likely.
fn random_password<R: Rng + ?Sized>(length: usize, rng: &mut R) -> SecretString {
    let password: String = (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    SecretString::new(password.into())
}

/// Generates a batch and sends it via channel.
///
/// `seed` makes the batch reproducible; `None` seeds from OS entropy.
/// Nothing is sent if `token` is already cancelled.
#[cfg(feature = "async")]
pub async fn suggest_tx(
    config: Config,
    seed: Option<u64>,
    token: CancellationToken,
    tx: mpsc::Sender<SuggestionBatch>,
) -> Result<(), PasswordError> {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Suggestion request cancelled");
        return Ok(());
    }

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let batch = suggest_with(&config, &mut rng)?;

    if let Err(e) = tx.send(batch).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password suggestions: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
    Ok(())
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_suggest_tx_sends_batch() {
        let (tx, mut rx) = mpsc::channel(1);
        suggest_tx(Config::default(), Some(5), CancellationToken::new(), tx)
            .await
            .unwrap();

        let batch = rx.recv().await.expect("Should receive suggestions");
        assert_eq!(batch.len(), 3);

        let expected = suggest(3, 12, &mut SmallRng::seed_from_u64(5)).unwrap();
        let got: Vec<&str> = batch.iter().map(|p| p.expose_secret()).collect();
        let want: Vec<&str> = expected.iter().map(|p| p.expose_secret()).collect();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn test_suggest_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        suggest_tx(Config::default(), None, token, tx).await.unwrap();
        assert!(rx.recv().await.is_none());
    }
}
