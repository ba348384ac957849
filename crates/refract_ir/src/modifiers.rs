//! Access and property modifiers of classes and members.
//!
//! Bit values match the host platform's modifier encoding, so metadata
//! read from class files can be stored without translation.

use bitflags::bitflags;

bitflags! {
    /// Modifier set of a class, field, method, or constructor.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        /// The class is an interface.
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        /// Compiler-generated member with no source counterpart.
        const SYNTHETIC = 0x1000;
        const ENUM = 0x4000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

impl Modifiers {
    #[inline]
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    #[inline]
    pub const fn is_transient(self) -> bool {
        self.contains(Self::TRANSIENT)
    }

    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.contains(Self::SYNTHETIC)
    }

    #[inline]
    pub const fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    #[inline]
    pub const fn is_enum(self) -> bool {
        self.contains(Self::ENUM)
    }
}
