use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::base58::{decode, encode};
use crate::error::Error;

pub const ID_CODE_LEN: usize = 1;
pub const ID_PREFIX_LEN: usize = 4;
pub const ID_ADDRESS_LEN: usize = 20;

/// Kind of object an [`Id`] points to. The discriminant is the code byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Code {
    Unknown = 0,
    Account,
    User,
    QLib,
    Q,
    QStateStore,
    QSpace,
    QFileUpload,
    QFilesJob,
    QNode,
    Network,
    Kms,
    CachedResultSet,
    Tenant,
    Group,
}

impl Code {
    pub const ALL: [Code; 15] = [
        Code::Unknown,
        Code::Account,
        Code::User,
        Code::QLib,
        Code::Q,
        Code::QStateStore,
        Code::QSpace,
        Code::QFileUpload,
        Code::QFilesJob,
        Code::QNode,
        Code::Network,
        Code::Kms,
        Code::CachedResultSet,
        Code::Tenant,
        Code::Group,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            Code::Unknown => "iukn",
            Code::Account => "iacc",
            Code::User => "iusr",
            Code::QLib => "ilib",
            Code::Q => "iq__",
            Code::QStateStore => "iqss",
            Code::QSpace => "ispc",
            Code::QFileUpload => "iqfu",
            Code::QFilesJob => "iqfj",
            Code::QNode => "inod",
            Code::Network => "inet",
            Code::Kms => "ikms",
            Code::CachedResultSet => "icrs",
            Code::Tenant => "iten",
            Code::Group => "igrp",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Code::Unknown => "unknown",
            Code::Account => "account",
            Code::User => "user",
            Code::QLib => "content library",
            Code::Q => "content",
            Code::QStateStore => "content state store",
            Code::QSpace => "content space",
            Code::QFileUpload => "content file upload",
            Code::QFilesJob => "content files job",
            Code::QNode => "fabric node",
            Code::Network => "network",
            Code::Kms => "KMS",
            Code::CachedResultSet => "cached result set",
            Code::Tenant => "tenant",
            Code::Group => "group",
        }
    }

    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Code> {
        Code::ALL.get(byte as usize).copied()
    }

    /// Unrecognised prefixes map to [`Code::Unknown`].
    pub fn from_prefix(prefix: &str) -> Code {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.prefix() == prefix)
            .unwrap_or(Code::Unknown)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.prefix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    InvalidPrefix,
    UnknownPrefix(String),
    InvalidAddressLength(usize),
    InvalidCode(u8),
    CodeMismatch { expected: Code, actual: Code },
    Decode(Error),
}

impl From<Error> for IdError {
    fn from(error: Error) -> Self {
        IdError::Decode(error)
    }
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::InvalidPrefix => write!(f, "id is shorter than its {}-character prefix", ID_PREFIX_LEN),
            IdError::UnknownPrefix(prefix) => write!(f, "unknown id prefix ({})", prefix),
            IdError::InvalidAddressLength(len) => {
                write!(f, "invalid address length {}, expected {}", len, ID_ADDRESS_LEN)
            }
            IdError::InvalidCode(byte) => write!(f, "invalid id code {}", byte),
            IdError::CodeMismatch { expected, actual } => {
                write!(f, "expecting {}, but received {}", expected, actual)
            }
            IdError::Decode(error) => write!(f, "invalid id address: {}", error),
        }
    }
}

impl core::error::Error for IdError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            IdError::Decode(error) => Some(error),
            _ => None,
        }
    }
}

/// Content-fabric identifier: a kind code and a 20-byte address.
///
/// The text form is the code's 4-character prefix followed by the Base58
/// encoding of the address, e.g. `iq__` + `encode(address)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id {
    code: Code,
    address: [u8; ID_ADDRESS_LEN],
}

impl Id {
    pub fn new(code: Code, address: &[u8]) -> Result<Id, IdError> {
        let address: [u8; ID_ADDRESS_LEN] = address
            .try_into()
            .map_err(|_| IdError::InvalidAddressLength(address.len()))?;
        Ok(Id { code, address })
    }

    /// Parses the binary form: code byte followed by the address.
    pub fn from_bytes(bytes: &[u8]) -> Result<Id, IdError> {
        let (&code_byte, address) = bytes
            .split_first()
            .ok_or(IdError::InvalidAddressLength(0))?;
        let code = Code::from_byte(code_byte).ok_or(IdError::InvalidCode(code_byte))?;
        Id::new(code, address)
    }

    pub fn to_bytes(&self) -> [u8; ID_CODE_LEN + ID_ADDRESS_LEN] {
        let mut bytes = [0u8; ID_CODE_LEN + ID_ADDRESS_LEN];
        bytes[0] = self.code.to_byte();
        bytes[ID_CODE_LEN..].copy_from_slice(&self.address);
        bytes
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn address(&self) -> &[u8; ID_ADDRESS_LEN] {
        &self.address
    }

    pub fn has_code(&self, code: Code) -> bool {
        self.code == code
    }

    /// Returns `self` for chaining when the code matches.
    pub fn assert_code(&self, code: Code) -> Result<&Id, IdError> {
        if self.code != code {
            return Err(IdError::CodeMismatch { expected: code, actual: self.code });
        }
        Ok(self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.code.prefix(), encode(&self.address))
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Id, IdError> {
        let prefix = s.get(..ID_PREFIX_LEN).ok_or(IdError::InvalidPrefix)?;
        let code = Code::from_prefix(prefix);
        if code == Code::Unknown {
            return Err(IdError::UnknownPrefix(String::from(prefix)));
        }
        let address = decode(&s[ID_PREFIX_LEN..])?;
        Id::new(code, &address)
    }
}
