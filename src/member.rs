use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A value that can be accumulated: any non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Integer", into = "Integer")]
pub struct Member(pub(crate) Integer);

impl TryFrom<Integer> for Member {
    type Error = Error;

    fn try_from(value: Integer) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(Error::NegativeMember(value));
        }
        Ok(Member(value))
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Member {
                fn from(value: $t) -> Self {
                    Member(Integer::from(value))
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for Member {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Integer = s.parse()?;
        value.try_into()
    }
}

impl From<Member> for Integer {
    fn from(member: Member) -> Integer {
        member.0
    }
}

impl AsRef<Integer> for Member {
    fn as_ref(&self) -> &Integer {
        &self.0
    }
}

impl Borrow<Integer> for Member {
    fn borrow(&self) -> &Integer {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
