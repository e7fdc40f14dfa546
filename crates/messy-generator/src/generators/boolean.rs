//! Boolean obfuscation.
//!
//! A yes/no flag is written as the literal token buried in random lowercase
//! padding, e.g. `qzyesfk` or `hwnoabc`. Padding that happens to spell the
//! opposite token (or a second copy of the wanted one) is thrown away and
//! redrawn, up to `max_attempts` times.

use crate::generator::GeneratorError;
use messy_core::ObfuscatorConfig;
use rand::Rng;

/// Hide `value` inside random padding.
pub fn obfuscate_bool<R: Rng>(
    rng: &mut R,
    value: bool,
    config: &ObfuscatorConfig,
) -> Result<String, GeneratorError> {
    let (token, opposite) = if value {
        (&config.true_token, &config.false_token)
    } else {
        (&config.false_token, &config.true_token)
    };

    for _ in 0..config.max_attempts {
        let before = random_padding(rng, config);
        let after = random_padding(rng, config);
        let candidate = format!("{before}{token}{after}");
        if is_unambiguous(&candidate, token, opposite) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::ObfuscationExhausted {
        token: token.clone(),
        attempts: config.max_attempts,
    })
}

/// True when `text` holds `token` exactly once and never `opposite`.
pub fn is_unambiguous(text: &str, token: &str, opposite: &str) -> bool {
    text.matches(token).count() == 1 && !text.contains(opposite)
}

fn random_padding<R: Rng>(rng: &mut R, config: &ObfuscatorConfig) -> String {
    let len = rng.gen_range(config.padding.min..=config.padding.max) as usize;
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
