/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::fmt;

/// The body of every request the clients dispatch. JSON-RPC payloads are small and fully
/// buffered, so the body is a single chunk of bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SdkBody {
    inner: Bytes,
}

impl SdkBody {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.inner
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.inner) {
            Ok(text) => f.debug_tuple("SdkBody").field(&text).finish(),
            Err(_) => f.debug_tuple("SdkBody").field(&self.inner).finish(),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody {
            inner: Bytes::copy_from_slice(s.as_bytes()),
        }
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        Self::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody { inner: bytes }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;

    #[test]
    fn conversions() {
        assert_eq!(SdkBody::from("abc"), SdkBody::from(b"abc".to_vec()));
        assert_eq!(SdkBody::from(String::from("abc")).bytes(), b"abc");
        assert!(SdkBody::empty().is_empty());
        assert_eq!(3, SdkBody::from("abc").len());
    }

    #[test]
    fn debug_shows_text() {
        assert_eq!(r#"SdkBody("{}")"#, format!("{:?}", SdkBody::from("{}")));
    }
}
