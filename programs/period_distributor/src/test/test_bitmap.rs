#[cfg(test)]
mod tests {
    use crate::constants::WORD_SIZE;
    use crate::state::ClaimWord;

    #[test]
    fn test_word_position_addressing() {
        // Bit N % 256 of word N / 256
        assert_eq!(ClaimWord::word_position(0), (0, 0));
        assert_eq!(ClaimWord::word_position(1), (0, 1));
        assert_eq!(ClaimWord::word_position(255), (0, 255));
        assert_eq!(ClaimWord::word_position(256), (1, 0));
        assert_eq!(ClaimWord::word_position(511), (1, 255));
        assert_eq!(ClaimWord::word_position(512), (2, 0));

        // Any u64 index is addressable; no total-count bound exists
        let (word, bit) = ClaimWord::word_position(u64::MAX);
        assert_eq!(word, u64::MAX / WORD_SIZE);
        assert_eq!(bit, 255);

        assert_eq!(ClaimWord::word_index(300), 1);
    }

    #[test]
    fn test_fresh_word_is_unclaimed() {
        let word = ClaimWord::default();
        for bit in 0..=255u8 {
            assert!(!word.is_claimed(bit));
        }
    }

    #[test]
    fn test_mark_sets_only_its_bit() {
        let mut word = ClaimWord::default();
        word.mark_claimed(37);

        for bit in 0..=255u8 {
            assert_eq!(word.is_claimed(bit), bit == 37);
        }
    }

    #[test]
    fn test_mark_is_idempotent_and_permanent() {
        let mut word = ClaimWord::default();

        word.mark_claimed(0);
        word.mark_claimed(0);
        assert!(word.is_claimed(0));

        // Setting neighbours never clears an earlier bit
        word.mark_claimed(1);
        word.mark_claimed(255);
        assert!(word.is_claimed(0));
        assert!(word.is_claimed(1));
        assert!(word.is_claimed(255));
    }

    #[test]
    fn test_every_bit_independent() {
        let mut word = ClaimWord::default();
        for bit in 0..=255u8 {
            assert!(!word.is_claimed(bit));
            word.mark_claimed(bit);
            assert!(word.is_claimed(bit));
        }
        assert_eq!(word.bits, [0xff; 32]);
    }

    #[test]
    fn test_account_space() {
        // 8-byte discriminator + one 256-bit word
        assert_eq!(ClaimWord::LEN, 40);
    }
}
