use crate::core::layout::BARCODE_LEN;
use crate::core::typeable::{typeable_line_from_barcode, CONVENIO_PREFIX};
use crate::utils::error::{Result, ScanError};
use std::fmt;

/// A decoded payment slip barcode: exactly 44 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    /// Utility and agreement billing (leading `8`).
    Convenio,
    /// Bank slip.
    Boleto,
}

impl Barcode {
    /// Checks the scanner output before it reaches the formatter.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != BARCODE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScanError::MalformedBarcode {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> BarcodeKind {
        if self.0.starts_with(CONVENIO_PREFIX) {
            BarcodeKind::Convenio
        } else {
            BarcodeKind::Boleto
        }
    }

    pub fn typeable_line(&self) -> Result<TypeableLine> {
        typeable_line_from_barcode(&self.0).map(TypeableLine)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-enterable form of a barcode, check digits included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeableLine(String);

impl TypeableLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_44_digits() {
        let barcode = Barcode::parse("00193373700000001000500940144816060680935031").unwrap();
        assert_eq!(barcode.kind(), BarcodeKind::Boleto);
        assert_eq!(
            barcode.typeable_line().unwrap().as_str(),
            "00190500954014481606906809350314337370000000100"
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for raw in [
            "",
            "0019337370000000100050094014481606068093503",
            "001933737000000010005009401448160606809350311",
        ] {
            match Barcode::parse(raw) {
                Err(ScanError::MalformedBarcode { value }) => assert_eq!(value, raw),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        let spaced = "0019337370000000100050094014481606068093503 ";
        let lettered = "0019337370000000100050094014481606068093503a";
        let unicode = "001933737000000010005009401448160606809350３";
        assert!(Barcode::parse(spaced).is_err());
        assert!(Barcode::parse(lettered).is_err());
        assert!(Barcode::parse(unicode).is_err());
    }

    #[test]
    fn test_convenio_kind() {
        let barcode = Barcode::parse("83640000001552201380074617500905001000000051").unwrap();
        assert_eq!(barcode.kind(), BarcodeKind::Convenio);
        assert_eq!(barcode.typeable_line().unwrap().as_str().len(), 51);
    }
}
