//! Byte cursor over descriptor text.

use refract_ir::{ClassName, Primitive, TypeRef};

use crate::ident::is_qualified;
use crate::{DescError, MAX_ARRAY_DIMENSIONS};

/// Reads descriptors left to right, reporting byte offsets on failure.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn error(&self, reason: &'static str) -> DescError {
        DescError::descriptor(self.input, self.pos, reason)
    }

    pub(crate) fn expect(&mut self, byte: u8, reason: &'static str) -> Result<(), DescError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(reason))
        }
    }

    /// Consume the longest prefix that is not `stop`.
    pub(crate) fn take_until(&mut self, stop: u8) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b != stop) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Fail unless every byte has been consumed.
    pub(crate) fn finish(&self) -> Result<(), DescError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error("trailing characters after descriptor"))
        }
    }

    /// Parse one complete `desc` production.
    pub(crate) fn parse_type(&mut self) -> Result<TypeRef, DescError> {
        let mut dimensions = 0;
        while self.peek() == Some(b'[') {
            if dimensions == MAX_ARRAY_DIMENSIONS {
                return Err(self.error("too many array dimensions"));
            }
            dimensions += 1;
            self.pos += 1;
        }

        let base = match self.peek() {
            None if dimensions > 0 => return Err(self.error("array prefix without component type")),
            None => return Err(self.error("unexpected end of descriptor")),
            Some(b'L') => self.parse_reference()?,
            Some(code) => match Primitive::from_descriptor(char::from(code)) {
                Some(primitive) => {
                    self.pos += 1;
                    TypeRef::Primitive(primitive)
                }
                None => return Err(self.error("unknown type code")),
            },
        };

        Ok(TypeRef::array(base, dimensions))
    }

    fn parse_reference(&mut self) -> Result<TypeRef, DescError> {
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        let slash_name = self.take_until(b';');

        if self.is_at_end() {
            return Err(DescError::descriptor(
                self.input,
                open,
                "unterminated reference name",
            ));
        }
        if slash_name.is_empty() {
            return Err(DescError::descriptor(self.input, start, "empty reference name"));
        }
        if !is_qualified(slash_name, '/') {
            return Err(DescError::descriptor(
                self.input,
                start,
                "invalid identifier in reference name",
            ));
        }
        if Primitive::from_keyword(slash_name).is_some() {
            return Err(DescError::descriptor(
                self.input,
                start,
                "primitive keyword as reference name",
            ));
        }

        // skip ';'
        self.pos += 1;
        Ok(TypeRef::Class(ClassName::from(slash_name.replace('/', "."))))
    }
}
