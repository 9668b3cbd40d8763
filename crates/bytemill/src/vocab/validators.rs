//! Validators for various configuration options.
use crate::{errors::BytemillError, types::TokenType};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates and returns the vocabulary size, ensuring it's at least the size of the u8 space.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> crate::errors::BMResult<usize> {
    if vocab_size < U8_SIZE {
        Err(BytemillError::VocabSizeTooSmall { size: vocab_size })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(BytemillError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(256).unwrap(), 256);

        assert!(matches!(
            try_vocab_size::<u16>(100),
            Err(BytemillError::VocabSizeTooSmall { size: 100 })
        ));
        assert!(matches!(
            try_vocab_size::<u16>(0),
            Err(BytemillError::VocabSizeTooSmall { size: 0 })
        ));

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(matches!(
            try_vocab_size::<u16>(u16::MAX as usize + 2),
            Err(BytemillError::VocabSizeOverflow { .. })
        ));

        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257).is_err());
    }
}
