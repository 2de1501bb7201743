use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements text conversions for a fieldless enum that is stored as `TEXT` in the database.
///
/// Generates `as_str`, `ALL`, `Display`, `FromStr` (case-insensitive, `-` and `_` are
/// interchangeable) and the `rusqlite` `ToSql`/`FromSql` pair.
macro_rules! text_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            #[allow(dead_code)]
            pub const ALL: &[$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::shared::types::ParseEnumError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let normalised = input.trim().to_lowercase().replace('-', "_");
                match normalised.as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err($crate::shared::types::ParseEnumError {
                        kind: $kind,
                        value: input.to_string(),
                    }),
                }
            }
        }

        impl rusqlite::types::ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(self.as_str()))
            }
        }

        impl rusqlite::types::FromSql for $ty {
            fn column_result(
                value: rusqlite::types::ValueRef<'_>,
            ) -> rusqlite::types::FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|err| rusqlite::types::FromSqlError::Other(Box::new(err)))
            }
        }
    };
}

pub(crate) use text_enum;
