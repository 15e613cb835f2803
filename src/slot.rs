// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Mapping between option letters and registry slots.

use crate::error::{Error, Result};

/// Number of registry slots: one per lowercase ASCII letter.
pub const SLOT_COUNT: usize = 26;

const FIRST_LETTER: u8 = b'a';

/// Returns the slot for `letter`, which must be in `'a'..='z'`.
pub fn index(letter: char) -> Result<usize> {
    if !letter.is_ascii_lowercase() {
        return Err(Error::InvalidOptName(letter));
    }

    Ok((letter as u8 - FIRST_LETTER) as usize)
}

/// Returns the letter owning slot `index`.
///
/// # Panics
///
/// If `index` is not below [SLOT_COUNT].
pub fn letter(index: usize) -> char {
    assert!(index < SLOT_COUNT, "slot index {} out of range", index);

    (FIRST_LETTER + index as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(index('a'), Ok(0));
        assert_eq!(index('m'), Ok(12));
        assert_eq!(index('z'), Ok(SLOT_COUNT - 1));

        for invalid in &['A', 'Z', '0', '9', '-', ':', '?', ' ', '人', '\u{0}'] {
            assert_eq!(
                index(*invalid),
                Err(Error::InvalidOptName(*invalid)),
                "letter: {:?}",
                invalid
            );
        }
    }

    #[test]
    fn test_mapping_is_collision_free() {
        let mut seen = [false; SLOT_COUNT];

        for letter in 'a'..='z' {
            let i = index(letter).unwrap();

            assert!(!seen[i], "letter {:?} collides at slot {}", letter, i);
            seen[i] = true;

            assert_eq!(super::letter(i), letter);
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_letter_out_of_range() {
        let _ = letter(SLOT_COUNT);
    }
}
