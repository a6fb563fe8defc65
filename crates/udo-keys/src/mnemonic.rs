//! Mnemonic seed derivation and phrase generation.
//!
//! The wallet treats a mnemonic phrase as an opaque derivation seed: the
//! phrase is stretched into a 64-byte BIP-39 seed with PBKDF2-HMAC-SHA512
//! and a private key is derived with SLIP-0010 (ed25519, hardened-only).
//! Reading a wordlist from storage is the caller's concern; phrase
//! generation only needs the words themselves.

use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha512;

use crate::KeyError;

type HmacSha512 = Hmac<Sha512>;

/// PBKDF2 iteration count mandated by BIP-39.
const PBKDF2_ROUNDS: u32 = 2048;

/// HMAC key for the SLIP-0010 ed25519 master node.
const ED25519_CURVE_SEED: &[u8] = b"ed25519 seed";

/// Hardened-index offset.
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Sui's default derivation path, `m/44'/784'/0'/0'/0'` (all hardened).
pub const SUI_DERIVATION_PATH: &[u32] = &[44, 784, 0, 0, 0];

/// Stretch a mnemonic phrase into a 64-byte BIP-39 seed.
///
/// # Arguments
/// * `phrase` - The space-separated mnemonic phrase.
/// * `passphrase` - Optional extra passphrase (empty string for none).
///
/// # Returns
/// `Ok([u8; 64])` on success, or `KeyError::InvalidMnemonic` if the phrase
/// is empty.
pub fn seed_from_phrase(phrase: &str, passphrase: &str) -> Result<[u8; 64], KeyError> {
    if phrase.trim().is_empty() {
        return Err(KeyError::InvalidMnemonic("phrase is empty".to_string()));
    }

    let salt = format!("mnemonic{passphrase}");
    let mut seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
    Ok(seed)
}

/// Derive a 32-byte ed25519 private key from a seed along a hardened path.
///
/// Implements SLIP-0010 for the ed25519 curve; every path segment is
/// treated as hardened.
///
/// # Arguments
/// * `seed` - The BIP-39 seed.
/// * `path` - Path segments without the hardened offset (e.g. `[44, 784, 0, 0, 0]`).
///
/// # Returns
/// `Ok([u8; 32])` with the derived key, or an error if HMAC keying fails.
pub fn derive_ed25519_key(seed: &[u8], path: &[u32]) -> Result<[u8; 32], KeyError> {
    let master = hmac_sha512(ED25519_CURVE_SEED, seed)?;
    let mut key: [u8; 32] = split_half(&master).0;
    let mut chain: [u8; 32] = split_half(&master).1;

    for segment in path {
        let index = segment | HARDENED_OFFSET;
        let mut data = Vec::with_capacity(1 + 32 + 4);
        data.push(0x00);
        data.extend_from_slice(&key);
        data.extend_from_slice(&index.to_be_bytes());

        let node = hmac_sha512(&chain, &data)?;
        key = split_half(&node).0;
        chain = split_half(&node).1;
    }

    Ok(key)
}

/// Generate a random mnemonic phrase from a caller-supplied wordlist.
///
/// Words are chosen uniformly at random with replacement; no checksum is
/// embedded.
///
/// # Arguments
/// * `words` - The wordlist to draw from.
/// * `word_count` - Number of words in the phrase (typically 12 or 24).
///
/// # Returns
/// `Ok(String)` with the space-joined phrase, or `KeyError::InvalidMnemonic`
/// if the wordlist is empty or the count is zero.
pub fn generate_phrase<S: AsRef<str>>(words: &[S], word_count: usize) -> Result<String, KeyError> {
    if words.is_empty() {
        return Err(KeyError::InvalidMnemonic("wordlist is empty".to_string()));
    }
    if word_count == 0 {
        return Err(KeyError::InvalidMnemonic(
            "phrase length must be at least 1".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();
    let phrase: Vec<&str> = (0..word_count)
        .map(|_| words[rng.gen_range(0..words.len())].as_ref())
        .collect();
    Ok(phrase.join(" "))
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64], KeyError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;
    mac.update(data);

    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

fn split_half(bytes: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.copy_from_slice(&bytes[..32]);
    right.copy_from_slice(&bytes[32..]);
    (left, right)
}
