//! Field-descriptor codec for 8-bit registers
//!
//! Every register is described by a table of [`Field`]s, each a `(name, offset,
//! width)` triple. Decoding extracts `(raw >> offset) & mask` per field; encoding
//! ORs `(value & mask) << offset` into a zeroed byte. Values wider than their
//! field are truncated to the declared width, so an encoded byte never carries a
//! bit outside the field table.

/// One bit field inside an 8-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Field name as listed in the register map
    pub name: &'static str,
    /// Position of the least significant bit
    pub offset: u8,
    /// Number of bits (1..=8)
    pub width: u8,
}

impl Field {
    /// Create a field descriptor
    #[must_use]
    pub const fn new(name: &'static str, offset: u8, width: u8) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Right-aligned mask of `width` ones
    #[must_use]
    pub const fn mask(&self) -> u8 {
        if self.width >= 8 {
            0xFF
        } else {
            (1u8 << self.width) - 1
        }
    }

    /// Mask of the bits this field occupies inside the register
    #[must_use]
    pub const fn register_mask(&self) -> u8 {
        self.mask() << self.offset
    }

    /// Extract this field from a raw register byte
    #[must_use]
    pub const fn extract(&self, raw: u8) -> u8 {
        (raw >> self.offset) & self.mask()
    }

    /// OR this field into `raw`, truncating `value` to the field width
    #[must_use]
    pub const fn insert(&self, raw: u8, value: u8) -> u8 {
        raw | ((value & self.mask()) << self.offset)
    }
}

/// A Rust type a field decodes into
pub trait FieldValue: Copy {
    /// Build the value from right-aligned field bits
    fn from_bits(bits: u8) -> Self;
    /// Right-aligned field bits of the value
    fn into_bits(self) -> u8;
}

impl FieldValue for bool {
    fn from_bits(bits: u8) -> Self {
        bits != 0
    }

    fn into_bits(self) -> u8 {
        u8::from(self)
    }
}

impl FieldValue for u8 {
    fn from_bits(bits: u8) -> Self {
        bits
    }

    fn into_bits(self) -> u8 {
        self
    }
}

/// Decoded view of one register byte
///
/// Decoding and encoding never fail: every raw byte has a view, and every view
/// encodes to a byte whose undefined bits are zero.
pub trait Bitfield: Sized {
    /// Field table of the register, most significant field first
    const FIELDS: &'static [Field];

    /// Decode a raw register byte
    fn decode(raw: u8) -> Self;

    /// Encode into a raw register byte
    fn encode(&self) -> u8;

    /// Bits covered by [`Self::FIELDS`]
    #[must_use]
    fn defined_mask() -> u8 {
        Self::FIELDS
            .iter()
            .fold(0, |mask, field| mask | field.register_mask())
    }
}

/// A bitfield living at a fixed register address
pub trait Register: Bitfield {
    /// Register address
    const ADDRESS: u8;
    /// Datasheet name
    const NAME: &'static str;
}

/// Declare register views from a field table
///
/// ```ignore
/// register! {
///     /// CONFIG - Configuration
///     Config @ RegisterAddress::Config {
///         /// Frame synchronization input
///         ext_sync_set: u8 = 3..6,
///         /// Digital low pass filter
///         dlpf_cfg: u8 = 0..3,
///     }
/// }
/// ```
///
/// Entries without `@ address` only implement [`Bitfield`]; they are used for
/// layouts shared by several registers (the slave channel blocks).
macro_rules! register {
    (
        $(
            $(#[$meta:meta])*
            $name:ident $(@ $address:path)? {
                $(
                    $(#[$field_meta:meta])*
                    $field:ident: $ty:ty = $start:literal..$end:literal
                ),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
            #[cfg_attr(feature = "defmt", derive(defmt::Format))]
            #[allow(clippy::struct_excessive_bools)]
            pub struct $name {
                $(
                    $(#[$field_meta])*
                    pub $field: $ty,
                )*
            }

            impl $crate::codec::Bitfield for $name {
                const FIELDS: &'static [$crate::codec::Field] = &[
                    $($crate::codec::Field::new(stringify!($field), $start, $end - $start),)*
                ];

                fn decode(raw: u8) -> Self {
                    Self {
                        $(
                            $field: <$ty as $crate::codec::FieldValue>::from_bits(
                                $crate::codec::Field::new(stringify!($field), $start, $end - $start)
                                    .extract(raw),
                            ),
                        )*
                    }
                }

                fn encode(&self) -> u8 {
                    let raw = 0u8;
                    $(
                        let raw = $crate::codec::Field::new(stringify!($field), $start, $end - $start)
                            .insert(raw, $crate::codec::FieldValue::into_bits(self.$field));
                    )*
                    raw
                }
            }

            $(
                impl $crate::codec::Register for $name {
                    const ADDRESS: u8 = $address.addr();
                    const NAME: &'static str = $address.name();
                }
            )?
        )*
    };
}

pub(crate) use register;
