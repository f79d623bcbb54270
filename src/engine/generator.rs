// src/engine/generator.rs
use rand::{seq::SliceRandom, Rng};

use crate::engine::charset::CharacterClass;
use crate::models::GenerationOptions;

// Requested lengths below this are raised to it
pub const MIN_LENGTH: usize = 8;

/// Generate a password using the caller's RNG.
///
/// The RNG is injected so tests can seed a deterministic one; production
/// callers go through [`generate`], which uses `thread_rng`.
pub fn generate_with<R: Rng>(rng: &mut R, options: &GenerationOptions) -> String {
    let length = options.length.max(MIN_LENGTH);
    build_password(rng, length, &effective_classes(options))
}

/// Generate a password with the thread-local RNG.
pub fn generate(options: &GenerationOptions) -> String {
    generate_with(&mut rand::thread_rng(), options)
}

// Selected classes in fixed class order; selecting none means all
fn effective_classes(options: &GenerationOptions) -> Vec<CharacterClass> {
    let mut classes = Vec::new();
    if options.use_lowercase {
        classes.push(CharacterClass::Lowercase);
    }
    if options.use_uppercase {
        classes.push(CharacterClass::Uppercase);
    }
    if options.use_digits {
        classes.push(CharacterClass::Digit);
    }
    if options.use_special {
        classes.push(CharacterClass::Special);
    }

    if classes.is_empty() {
        classes.extend(CharacterClass::ALL);
    }

    classes
}

fn build_password<R: Rng>(rng: &mut R, length: usize, classes: &[CharacterClass]) -> String {
    let pool: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect();

    // One character from every selected class, so each is represented
    let mut buffer: Vec<u8> = classes
        .iter()
        .map(|class| {
            let alphabet = class.alphabet();
            alphabet[rng.gen_range(0..alphabet.len())]
        })
        .collect();

    // Fill up to the target length from the union pool. If the inclusion
    // pass already reached it the result is kept as-is, never truncated.
    while buffer.len() < length {
        buffer.push(pool[rng.gen_range(0..pool.len())]);
    }

    buffer.shuffle(rng);

    buffer.into_iter().map(char::from).collect()
}
