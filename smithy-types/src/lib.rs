/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Primitive types shared by the generated service clients: binary blobs, JSON numbers,
//! timestamps and the generic error metadata returned by AWS JSON services.

pub mod base64;
pub mod error;
pub mod instant;

use std::convert::TryFrom;
use std::fmt;

pub use crate::error::Error;
pub use crate::instant::Instant;

/// Binary data, carried on the wire as a base64 encoded string.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

/// The error returned when a [`Number`] can't be represented by the requested integer type
/// without losing information.
#[derive(Debug, Clone, PartialEq)]
pub struct TryFromNumberError {
    number: Number,
    target: &'static str,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Number::Float(v) => write!(f, "cannot convert floating point number {} into {}", v, self.target),
            Number::PosInt(v) => write!(f, "{} is outside the range of {}", v, self.target),
            Number::NegInt(v) => write!(f, "{} is outside the range of {}", v, self.target),
        }
    }
}

impl std::error::Error for TryFromNumberError {}

macro_rules! to_integer {
    ($typ:ident) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                let err = || TryFromNumberError {
                    number: value,
                    target: stringify!($typ),
                };
                match value {
                    Number::PosInt(v) => $typ::try_from(v).map_err(|_| err()),
                    Number::NegInt(v) => $typ::try_from(v).map_err(|_| err()),
                    Number::Float(_) => Err(err()),
                }
            }
        }
    };
}

to_integer!(i32);
to_integer!(i64);

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl Number {
    /// Converts the number to an `f64`, which is lossy for integers beyond 2^53.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Blob, Number};
    use std::convert::TryFrom;

    #[test]
    fn integer_conversions_are_checked() {
        assert_eq!(i32::try_from(Number::PosInt(5)), Ok(5));
        assert_eq!(i32::try_from(Number::NegInt(-5)), Ok(-5));
        assert!(i32::try_from(Number::PosInt(i32::MAX as u64 + 1)).is_err());
        assert!(i32::try_from(Number::NegInt(i32::MIN as i64 - 1)).is_err());
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert_eq!(i64::try_from(Number::NegInt(i64::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn floats_never_coerce_to_integers() {
        let err = i32::try_from(Number::Float(1.0)).expect_err("floats are rejected");
        assert_eq!(err.to_string(), "cannot convert floating point number 1 into i32");
    }

    #[test]
    fn signed_integers_pick_the_right_variant() {
        assert_eq!(Number::from(-3_i32), Number::NegInt(-3));
        assert_eq!(Number::from(3_i64), Number::PosInt(3));
        assert_eq!(Number::from(0_i32), Number::PosInt(0));
    }

    #[test]
    fn blob_exposes_its_bytes() {
        let blob = Blob::new("hello");
        assert_eq!(blob.as_ref(), b"hello");
        assert_eq!(blob.into_inner(), b"hello".to_vec());
    }
}
