//!
//! # ende
//!
//! (en)Encode and (de)Decode containers to bytes.
//!
//! The codec is picked at build time: `json_codec` (the default) writes the
//! same JSON the adapters produce, `msgpack_codec` writes MessagePack through
//! `rmp-serde`. When both are enabled JSON wins.
//!

use super::RawBytes;
use ruc::*;

#[cfg(feature = "serde_ende")]
use serde::{de::DeserializeOwned, Serialize};

#[cfg(all(feature = "msgpack_codec", not(feature = "json_codec")))]
use rmp_serde as msgpack;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Methods used to encode a value.
pub trait ValueEn: Sized {
    /// Encode the original type to bytes.
    fn try_encode_value(&self) -> Result<RawBytes>;

    fn encode_value(&self) -> RawBytes {
        pnk!(self.try_encode_value())
    }
}

/// Methods used to decode a value.
pub trait ValueDe: Sized {
    /// Decode from bytes to the original type.
    fn decode_value(bytes: &[u8]) -> Result<Self>;
}

/// Methods used to encode and decode a value.
pub trait ValueEnDe: Sized {
    /// Encode the original type to bytes.
    fn try_encode(&self) -> Result<RawBytes>;

    fn encode(&self) -> RawBytes {
        pnk!(self.try_encode())
    }

    /// Decode from bytes to the original type.
    fn decode(bytes: &[u8]) -> Result<Self>;
}

#[cfg(feature = "serde_ende")]
impl<T: Serialize> ValueEn for T {
    #[cfg(feature = "json_codec")]
    fn try_encode_value(&self) -> Result<RawBytes> {
        serde_json::to_vec(self).c(d!())
    }

    #[cfg(all(feature = "msgpack_codec", not(feature = "json_codec")))]
    fn try_encode_value(&self) -> Result<RawBytes> {
        msgpack::to_vec(self).c(d!())
    }
}

#[cfg(feature = "serde_ende")]
impl<T: DeserializeOwned> ValueDe for T {
    #[cfg(feature = "json_codec")]
    fn decode_value(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).c(d!())
    }

    #[cfg(all(feature = "msgpack_codec", not(feature = "json_codec")))]
    fn decode_value(bytes: &[u8]) -> Result<Self> {
        msgpack::from_slice(bytes).c(d!())
    }
}

impl<T: ValueEn + ValueDe> ValueEnDe for T {
    fn try_encode(&self) -> Result<RawBytes> {
        <Self as ValueEn>::try_encode_value(self).c(d!())
    }

    fn encode(&self) -> RawBytes {
        <Self as ValueEn>::encode_value(self)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        <Self as ValueDe>::decode_value(bytes).c(d!())
    }
}

/// The codec compiled in, for log lines and diagnostics.
pub const fn codec_name() -> &'static str {
    if cfg!(feature = "json_codec") {
        "json"
    } else if cfg!(feature = "msgpack_codec") {
        "msgpack"
    } else {
        "none"
    }
}
