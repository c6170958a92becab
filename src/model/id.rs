//! Strongly typed string identifiers that end up as URL path segments.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl TryFrom<&str> for $name {
			type Error = IdentifierError;

			fn try_from(value: &str) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier.
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier.
		kind: &'static str,
	},
	/// The identifier contains characters that would alter the request path.
	#[error("{kind} identifier contains a reserved path character.")]
	ReservedCharacter {
		/// Kind of identifier.
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier.
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { BookingNumber, "Human-facing booking reference.", "BookingNumber" }
def_id! { Nic, "National identity card number of a customer.", "Nic" }
def_id! { LicenseNumber, "Driving license number of a driver.", "LicenseNumber" }
def_id! { RegistrationNumber, "Vehicle registration plate.", "RegistrationNumber" }
def_id! { StatusLabel, "Status filter used by list-by-status endpoints.", "Status" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.chars().any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_control()) {
		return Err(IdentifierError::ReservedCharacter { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
