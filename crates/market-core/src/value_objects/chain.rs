//! Chain variants and their capability records
//!
//! Every subscription lives in exactly one chain namespace. The four
//! namespaces share one record shape; what differs between them is captured
//! by [`ChainSpec`] so the lifecycle code never branches on the chain itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Blockchain namespace a subscription token was minted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Default,
    #[serde(rename = "zkevm")]
    ZkEvm,
    Moonbeam,
    Metis,
}

/// Business key used to resolve a user for a chain's owner-facing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKey {
    WalletAddress,
    Email,
}

impl IdentityKey {
    /// Wire name of the field carrying this key
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::WalletAddress => "wallet address",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Listing fields a chain records when a subscription is put up for resale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingFields {
    pub price: bool,
    pub listing_id: bool,
}

/// Capability record for one chain namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSpec {
    /// Table holding this chain's subscriptions
    pub table: &'static str,
    /// Appended to every per-chain route (`/list-subscription{suffix}`)
    pub route_suffix: &'static str,
    pub listing: ListingFields,
    /// Key used by update/unlist and user-info lookups
    pub owner_key: IdentityKey,
}

const DEFAULT_SPEC: ChainSpec = ChainSpec {
    table: "subscriptions",
    route_suffix: "",
    listing: ListingFields {
        price: true,
        listing_id: true,
    },
    owner_key: IdentityKey::WalletAddress,
};

const ZKEVM_SPEC: ChainSpec = ChainSpec {
    table: "subscriptions_zkevm",
    route_suffix: "-zkevm",
    listing: ListingFields {
        price: false,
        listing_id: false,
    },
    owner_key: IdentityKey::Email,
};

const MOONBEAM_SPEC: ChainSpec = ChainSpec {
    table: "subscriptions_moonbeam",
    route_suffix: "-moonbeam",
    listing: ListingFields {
        price: true,
        listing_id: false,
    },
    owner_key: IdentityKey::Email,
};

const METIS_SPEC: ChainSpec = ChainSpec {
    table: "subscriptions_metis",
    route_suffix: "-metis",
    listing: ListingFields {
        price: true,
        listing_id: false,
    },
    owner_key: IdentityKey::Email,
};

impl Chain {
    pub const ALL: [Chain; 4] = [Chain::Default, Chain::ZkEvm, Chain::Moonbeam, Chain::Metis];

    /// Capability record for this chain
    pub const fn spec(self) -> &'static ChainSpec {
        match self {
            Self::Default => &DEFAULT_SPEC,
            Self::ZkEvm => &ZKEVM_SPEC,
            Self::Moonbeam => &MOONBEAM_SPEC,
            Self::Metis => &METIS_SPEC,
        }
    }

    pub const fn table(self) -> &'static str {
        self.spec().table
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ZkEvm => "zkevm",
            Self::Moonbeam => "moonbeam",
            Self::Metis => "metis",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
