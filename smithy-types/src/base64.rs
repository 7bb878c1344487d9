/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A thin wrapper over `base64-simd` for blob members

use base64_simd::STANDARD;

/// Decode `input` from base64 using the standard alphabet
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, base64_simd::Error> {
    STANDARD.decode_to_vec(input.as_ref().as_bytes())
}

/// Encode `input` into base64 using the standard alphabet
pub fn encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode_to_string(input.as_ref())
}

#[cfg(test)]
mod test {
    use super::{decode, encode};
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("f"), "Zg==");
        assert_eq!(encode("foobar"), "Zm9vYmFy");
        assert_eq!(decode("Zm9vYg==").unwrap(), b"foob".to_vec());
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(decode("not base64!").is_err());
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(data: Vec<u8>) {
            prop_assert_eq!(decode(encode(&data)).unwrap(), data);
        }
    }
}
