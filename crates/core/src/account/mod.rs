mod error;
mod password;
mod types;

pub use error::{AddressError, KeyError};
pub use password::{hash_password, MIN_PASSWORD_LENGTH};
pub use types::{
    Address, NetworkType, PrivateKey, PublicKey, ADDRESS_BYTES, KEY_HEX_LENGTH,
    PLAIN_ADDRESS_LENGTH,
};
