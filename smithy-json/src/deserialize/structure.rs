/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Table-driven mapping from JSON objects, arrays and maps into Rust values.

use super::token::{expect_start_object, skip_value, Token};
use super::{json_token_iter, DeserializeError, TokenStream};
use std::collections::BTreeMap;

/// One entry of a structure's field table: a wire name and the decoder that reads that
/// member's value into the structure under construction.
pub struct Field<T> {
    pub name: &'static str,
    pub decode: for<'a> fn(&mut T, &mut TokenStream<'a>) -> Result<(), DeserializeError>,
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Decodes a structure using its field table.
///
/// Members are matched by exact wire name in any order. Unknown members are skipped. `null`
/// and any other non-object value decode to `None`.
pub fn deserialize_struct<T: Default>(
    tokens: &mut TokenStream<'_>,
    fields: &[Field<T>],
) -> Result<Option<T>, DeserializeError> {
    match tokens.peek() {
        Some(Ok(Token::StartObject { .. })) => {
            tokens.next();
        }
        Some(Ok(_)) => {
            skip_value(tokens)?;
            return Ok(None);
        }
        _ => {
            tokens.next().transpose()?;
            return Err(DeserializeError::custom("expected a value"));
        }
    }
    let mut builder = T::default();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => return Ok(Some(builder)),
            Some(Token::ObjectKey { key, offset }) => {
                let key = key.to_unescaped()?;
                match fields.iter().find(|field| field.name == key) {
                    Some(field) => (field.decode)(&mut builder, tokens)?,
                    None => {
                        tracing::trace!(member = %key, offset = offset.0, "skipping unknown member");
                        skip_value(tokens)?
                    }
                }
            }
            other => {
                return Err(match other {
                    Some(token) => token.error("expected object key or end of object".into()),
                    None => DeserializeError::custom("expected object key or end of object"),
                })
            }
        }
    }
}

/// Decodes a JSON array element by element, preserving order. `null` elements, and elements
/// the element decoder maps to `None`, are dropped. A `null` array decodes to `None`.
pub fn deserialize_list<'a, T>(
    tokens: &mut TokenStream<'a>,
    mut element: impl FnMut(&mut TokenStream<'a>) -> Result<Option<T>, DeserializeError>,
) -> Result<Option<Vec<T>>, DeserializeError> {
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => return Ok(None),
        Some(Token::StartArray { .. }) => {}
        Some(token) => return Err(token.error("expected array or null".into())),
        None => return Err(DeserializeError::custom("expected array or null")),
    }
    let mut items = Vec::new();
    loop {
        match tokens.peek() {
            Some(Ok(Token::EndArray { .. })) => {
                tokens.next();
                return Ok(Some(items));
            }
            Some(Ok(Token::ValueNull { .. })) => {
                tokens.next();
            }
            _ => {
                if let Some(item) = element(tokens)? {
                    items.push(item);
                }
            }
        }
    }
}

/// Decodes a JSON object with arbitrary keys into a map ordered by key. Keys are kept
/// verbatim (after unescaping); `null` values are dropped. A `null` map decodes to `None`.
pub fn deserialize_map<'a, V>(
    tokens: &mut TokenStream<'a>,
    mut value: impl FnMut(&mut TokenStream<'a>) -> Result<Option<V>, DeserializeError>,
) -> Result<Option<BTreeMap<String, V>>, DeserializeError> {
    match tokens.next().transpose()? {
        Some(Token::ValueNull { .. }) => return Ok(None),
        Some(Token::StartObject { .. }) => {}
        Some(token) => return Err(token.error("expected object or null".into())),
        None => return Err(DeserializeError::custom("expected object or null")),
    }
    let mut map = BTreeMap::new();
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => return Ok(Some(map)),
            Some(Token::ObjectKey { key, .. }) => {
                let key = key.to_unescaped()?.into_owned();
                if let Some(value) = value(tokens)? {
                    map.insert(key, value);
                }
            }
            Some(token) => return Err(token.error("expected object key or end of object".into())),
            None => return Err(DeserializeError::custom("expected object key or end of object")),
        }
    }
}

/// Decodes a complete response document. An empty (or all-whitespace) body yields the
/// default value; otherwise the body must be exactly one JSON object.
pub fn deserialize_document<T: Default>(
    input: &[u8],
    fields: &[Field<T>],
) -> Result<T, DeserializeError> {
    let mut tokens = json_token_iter(input).peekable();
    if tokens.peek().is_none() {
        return Ok(T::default());
    }
    if !matches!(tokens.peek(), Some(Ok(Token::StartObject { .. }))) {
        expect_start_object(tokens.next())?;
    }
    let parsed = deserialize_struct(&mut tokens, fields)?.unwrap_or_default();
    match tokens.next().transpose()? {
        None => Ok(parsed),
        Some(token) => Err(token.error("found more JSON tokens after completing parsing".into())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::deserialize::token::{expect_i32_or_null, expect_string_or_null};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, PartialEq)]
    struct Entry {
        file_path: Option<String>,
        file_mode: Option<String>,
        nested: Option<Box<Entry>>,
        sizes: Option<Vec<i32>>,
        counts: Option<BTreeMap<String, i32>>,
    }

    const ENTRY_FIELDS: &[Field<Entry>] = &[
        Field {
            name: "filePath",
            decode: |entry, tokens| {
                entry.file_path = expect_string_or_null(tokens.next())?;
                Ok(())
            },
        },
        Field {
            name: "fileMode",
            decode: |entry, tokens| {
                entry.file_mode = expect_string_or_null(tokens.next())?;
                Ok(())
            },
        },
        Field {
            name: "nested",
            decode: |entry, tokens| {
                entry.nested = deser_entry(tokens)?.map(Box::new);
                Ok(())
            },
        },
        Field {
            name: "sizes",
            decode: |entry, tokens| {
                entry.sizes = deserialize_list(tokens, |tokens| expect_i32_or_null(tokens.next()))?;
                Ok(())
            },
        },
        Field {
            name: "counts",
            decode: |entry, tokens| {
                entry.counts = deserialize_map(tokens, |tokens| expect_i32_or_null(tokens.next()))?;
                Ok(())
            },
        },
    ];

    fn deser_entry(tokens: &mut TokenStream<'_>) -> Result<Option<Entry>, DeserializeError> {
        deserialize_struct(tokens, ENTRY_FIELDS)
    }

    fn parse(input: &str) -> Result<Entry, DeserializeError> {
        deserialize_document(input.as_bytes(), ENTRY_FIELDS)
    }

    #[test]
    fn members_in_any_order() {
        let expected = Entry {
            file_path: Some("a/b.txt".into()),
            file_mode: Some("NORMAL".into()),
            ..Default::default()
        };
        assert_eq!(expected, parse(r#"{"filePath":"a/b.txt","fileMode":"NORMAL"}"#).unwrap());
        assert_eq!(expected, parse(r#"{"fileMode":"NORMAL","filePath":"a/b.txt"}"#).unwrap());
    }

    #[test]
    fn unknown_members_are_skipped() {
        let parsed = parse(
            r#"{"extra":{"deep":[1,{"x":null}]},"filePath":"a","another":[true],"FilePath":"b"}"#,
        )
        .unwrap();
        assert_eq!(
            Entry {
                file_path: Some("a".into()),
                ..Default::default()
            },
            parsed
        );
    }

    #[test]
    fn non_object_entity_is_absent() {
        let parsed = parse(r#"{"nested":"surprise","filePath":"a"}"#).unwrap();
        assert_eq!(None, parsed.nested);
        assert_eq!(Some("a".into()), parsed.file_path);

        let parsed = parse(r#"{"nested":[1,2,3]}"#).unwrap();
        assert_eq!(None, parsed.nested);

        let parsed = parse(r#"{"nested":null}"#).unwrap();
        assert_eq!(None, parsed.nested);
    }

    #[test]
    fn nested_entities() {
        let parsed = parse(r#"{"nested":{"nested":{"filePath":"deep"}}}"#).unwrap();
        let inner = parsed.nested.unwrap().nested.unwrap();
        assert_eq!(Some("deep".to_string()), inner.file_path);
    }

    #[test]
    fn lists_keep_order_and_drop_nulls() {
        let parsed = parse(r#"{"sizes":[3,null,1,2]}"#).unwrap();
        assert_eq!(Some(vec![3, 1, 2]), parsed.sizes);
        assert_eq!(Some(vec![]), parse(r#"{"sizes":[]}"#).unwrap().sizes);
        assert_eq!(None, parse(r#"{"sizes":null}"#).unwrap().sizes);
        assert!(parse(r#"{"sizes":{}}"#).is_err());
    }

    #[test]
    fn maps_keep_keys_verbatim() {
        let parsed = parse(r#"{"counts":{"b":2,"a":1,"Thumbs Up":7,"gone":null}}"#).unwrap();
        let counts = parsed.counts.unwrap();
        assert_eq!(
            vec![("Thumbs Up", 7), ("a", 1), ("b", 2)],
            counts.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(parse(r#"{"filePath":5}"#).is_err());
        assert!(parse(r#"{"sizes":[1.5]}"#).is_err());
        assert!(parse(r#"{"sizes":[99999999999]}"#).is_err());
        assert!(parse(r#"{"filePath":"a""#).is_err());
    }

    #[test]
    fn document_shape() {
        assert_eq!(Entry::default(), parse("").unwrap());
        assert_eq!(Entry::default(), parse("  \n").unwrap());
        assert_eq!(Entry::default(), parse("{}").unwrap());
        assert!(parse("[]").is_err());
        assert!(parse("null").is_err());
        assert!(parse("{} {}").is_err());
    }
}
