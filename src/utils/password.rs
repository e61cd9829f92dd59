/// Registry credential helpers
use anyhow::{Context, Result};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Generate a random password of `length` characters, `num_digits` of which
/// are digits and the rest upper or lower case letters
///
/// Characters may repeat. No symbols are used so the password is safe to
/// paste into shell commands.
pub fn generate_password(length: usize, num_digits: usize) -> Result<String> {
    if num_digits > length {
        anyhow::bail!(
            "number of digits ({}) exceeds password length ({})",
            num_digits,
            length
        );
    }

    let mut rng = OsRng;
    let mut chars: Vec<u8> = Vec::with_capacity(length);

    for _ in 0..num_digits {
        chars.push(*DIGITS.choose(&mut rng).context("digit alphabet is empty")?);
    }
    for _ in num_digits..length {
        chars.push(*LETTERS.choose(&mut rng).context("letter alphabet is empty")?);
    }

    chars.shuffle(&mut rng);

    Ok(String::from_utf8_lossy(&chars).to_string())
}

/// Build an htpasswd line (`user:bcrypt-hash\n`) at bcrypt's default cost
pub fn htpasswd_entry(username: &str, password: &str) -> Result<String> {
    htpasswd_entry_with_cost(username, password, bcrypt::DEFAULT_COST)
}

fn htpasswd_entry_with_cost(username: &str, password: &str, cost: u32) -> Result<String> {
    let hash = bcrypt::hash(password, cost).context("Failed to hash registry password")?;
    Ok(format!("{}:{}\n", username, hash))
}
