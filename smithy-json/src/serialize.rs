/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Streaming JSON writers. Members and elements are written in exactly the order they are
//! added; nothing is buffered or reordered.

use crate::escape::escape_string;
use smithy_types::instant::{DateTimeFormatError, Format};
use smithy_types::{base64, Blob, Instant, Number};

/// Writes exactly one JSON value into the output.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    pub fn null(self) {
        self.output.push_str("null");
    }

    pub fn boolean(self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes a string, escaping it as needed.
    pub fn string(self, value: &str) {
        append_string_unchecked(self.output, &escape_string(value));
    }

    /// Writes a string that is already known not to need escaping.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes binary data as a base64 string.
    pub fn blob(self, value: &Blob) {
        append_string_unchecked(self.output, &base64::encode(value));
    }

    /// Writes a timestamp. Epoch seconds are written as a number, the calendar formats as
    /// strings.
    pub fn instant(self, value: &Instant, format: Format) -> Result<(), DateTimeFormatError> {
        let formatted = value.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            Format::DateTime | Format::HttpDate => append_string_unchecked(self.output, &formatted),
        }
        Ok(())
    }

    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

/// Writes the members of a JSON object. Call [`finish`](JsonObjectWriter::finish) to close it.
pub struct JsonObjectWriter<'a> {
    output: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            output,
            started: false,
        }
    }

    /// Starts a member named `key`; the returned writer writes its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.output.push(',');
        }
        self.started = true;
        append_string_unchecked(self.output, &escape_string(key));
        self.output.push(':');
        JsonValueWriter::new(self.output)
    }

    pub fn finish(self) {
        self.output.push('}');
    }
}

/// Writes the elements of a JSON array. Call [`finish`](JsonArrayWriter::finish) to close it.
pub struct JsonArrayWriter<'a> {
    output: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            output,
            started: false,
        }
    }

    /// Starts the next element; the returned writer writes its value.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.output.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.output)
    }

    pub fn finish(self) {
        self.output.push(']');
    }
}

fn append_string_unchecked(output: &mut String, value: &str) {
    output.push('"');
    output.push_str(value);
    output.push('"');
}

fn append_number(output: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => output.push_str(itoa::Buffer::new().format(value)),
        Number::NegInt(value) => output.push_str(itoa::Buffer::new().format(value)),
        // JSON has no representation for NaN or the infinities
        Number::Float(value) if !value.is_finite() => output.push_str("null"),
        Number::Float(value) => output.push_str(ryu::Buffer::new().format_finite(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use pretty_assertions::assert_eq;
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Blob, Instant, Number};

    fn write_value(write: impl FnOnce(JsonValueWriter<'_>)) -> String {
        let mut output = String::new();
        write(JsonValueWriter::new(&mut output));
        output
    }

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn members_keep_insertion_order() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("filePath").string("a/b.txt");
        object.key("fileMode").string("NORMAL");
        object.key("isMove").boolean(false);
        object.finish();
        assert_eq!(r#"{"filePath":"a/b.txt","fileMode":"NORMAL","isMove":false}"#, output);
    }

    #[test]
    fn nesting() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        {
            let mut array = object.key("list").start_array();
            array.value().number(Number::PosInt(1));
            let mut inner = array.value().start_object();
            inner.key("k").null();
            inner.finish();
            array.value().start_array().finish();
            array.finish();
        }
        object.key("empty").start_object().finish();
        object.finish();
        assert_eq!(r#"{"list":[1,{"k":null},[]],"empty":{}}"#, output);
    }

    #[test]
    fn keys_and_strings_are_escaped() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("quo\"te").string("line\nbreak");
        object.finish();
        assert_eq!(r#"{"quo\"te":"line\nbreak"}"#, output);
    }

    #[test]
    fn numbers() {
        assert_eq!("1", write_value(|v| v.number(Number::PosInt(1))));
        assert_eq!("-1", write_value(|v| v.number(Number::NegInt(-1))));
        assert_eq!("1.5", write_value(|v| v.number(Number::Float(1.5))));
        assert_eq!("null", write_value(|v| v.number(Number::Float(f64::NAN))));
        assert_eq!("null", write_value(|v| v.number(Number::Float(f64::INFINITY))));
    }

    #[test]
    fn blobs_are_base64() {
        assert_eq!(r#""aGVsbG8=""#, write_value(|v| v.blob(&Blob::new("hello"))));
    }

    #[test]
    fn instants() {
        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            "1576540098.52",
            write_value(|v| v.instant(&instant, Format::EpochSeconds).unwrap())
        );
        assert_eq!(
            r#""2019-12-16T23:48:18.52Z""#,
            write_value(|v| v.instant(&instant, Format::DateTime).unwrap())
        );
        let out_of_range = Instant::from_epoch_seconds(i64::MAX);
        let mut output = String::new();
        assert!(JsonValueWriter::new(&mut output)
            .instant(&out_of_range, Format::DateTime)
            .is_err());
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                write_value(|v| v.number(Number::PosInt(value))),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                write_value(|v| v.number(Number::NegInt(value))),
            )
        }

        #[test]
        fn float_output_parses_back_exactly(value: f64) {
            let output = write_value(|v| v.number(Number::Float(value)));
            if value.is_finite() {
                assert_eq!(value, serde_json::from_str::<f64>(&output).unwrap());
            } else {
                assert_eq!("null", output);
            }
        }

        #[test]
        fn strings_parse_back_with_serde_json(s in ".*") {
            let output = write_value(|v| v.string(&s));
            assert_eq!(s, serde_json::from_str::<String>(&output).unwrap());
        }
    }
}
