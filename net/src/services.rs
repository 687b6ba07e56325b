use std::fmt::{self, Debug};
use std::io;

use bitflags::bitflags;

use crate::decode::{Buffer, Decode};
use crate::error::DecodeResult;
use crate::Encode;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct ServiceFlags: u64 {
        const NETWORK            = 1;
        const BLOOM              = 1 << 2;
        const NETWORK_LIMITED    = 1 << 10;
        const HEADERS_COMPRESSED = 1 << 11;
    }
}

/// The service bits relevant to header relay:
///
/// Value Name  Description
/// 1 NODE_NETWORK  This node can be asked for full blocks instead of just headers.
/// 4 NODE_BLOOM  See [BIP 0111](https://github.com/bitcoin/bips/blob/master/bip-0111.mediawiki)
/// 1024 NODE_NETWORK_LIMITED  Serves only the most recent blocks
/// 2048 NODE_HEADERS_COMPRESSED  Understands `getheaders2`/`headers2`/`sendheaders2` (DIP-0025)
///
/// Unknown bits are carried along untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Services {
    flags: ServiceFlags,
}

impl Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f,
               r"Services {{
    network: {},
    bloom: {},
    network_limited: {},
    headers_compressed: {}}}",
               self.network(),
               self.bloom(),
               self.network_limited(),
               self.headers_compressed())
    }
}

impl Services {
    pub const NETWORK: u64 = 1;
    pub const BLOOM: u64 = 1 << 2;
    pub const NETWORK_LIMITED: u64 = 1 << 10;
    pub const HEADERS_COMPRESSED: u64 = 1 << 11;

    pub fn as_u64(&self) -> u64 {
        self.flags.bits()
    }

    pub fn from(input: u64) -> Services {
        Services { flags: ServiceFlags::from_bits_retain(input) }
    }

    pub fn network(&self) -> bool {
        self.flags.contains(ServiceFlags::NETWORK)
    }

    pub fn bloom(&self) -> bool {
        self.flags.contains(ServiceFlags::BLOOM)
    }

    pub fn network_limited(&self) -> bool {
        self.flags.contains(ServiceFlags::NETWORK_LIMITED)
    }

    pub fn headers_compressed(&self) -> bool {
        self.flags.contains(ServiceFlags::HEADERS_COMPRESSED)
    }
}

impl Encode for Services {
    fn encode(&self, mut buff: &mut Vec<u8>) -> Result<(), io::Error> {
        self.flags.bits().encode(&mut buff)
    }
}

impl Decode for Services {
    fn decode(buf: &mut Buffer<'_>) -> DecodeResult<Services> {
        Ok(Services::from(buf.read_u64("services")?))
    }
}
