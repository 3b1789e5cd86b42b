//! Barcode to typeable line ("linha digitável") conversion.

use crate::core::layout::{BoletoFields, BARCODE_LEN};
use crate::core::mod10::append_mod10_digit;
use crate::utils::error::{Result, ScanError};

/// Leading digit of agreement (convênio) barcodes.
pub const CONVENIO_PREFIX: char = '8';

const CONVENIO_BLOCK_LEN: usize = 11;

/// Builds the typeable line for a 44-digit barcode.
///
/// Convênio barcodes become four check-digited blocks separated by spaces;
/// every other barcode follows the bank slip layout. Callers are expected to
/// have validated the input already, see [`crate::domain::model::Barcode::parse`].
pub fn typeable_line_from_barcode(barcode: &str) -> Result<String> {
    if barcode.len() != BARCODE_LEN {
        return Err(ScanError::invalid_input(format!(
            "expected {} digits, got {}",
            BARCODE_LEN,
            barcode.len()
        )));
    }

    if barcode.starts_with(CONVENIO_PREFIX) {
        convenio_line(barcode)
    } else {
        boleto_line(barcode)
    }
}

fn convenio_line(barcode: &str) -> Result<String> {
    // https://portal.febraban.org.br/pagina/3166/33/pt-br/layour-arrecadacao
    let blocks = (0..BARCODE_LEN / CONVENIO_BLOCK_LEN)
        .map(|i| {
            let start = i * CONVENIO_BLOCK_LEN;
            let chunk = barcode.get(start..start + CONVENIO_BLOCK_LEN).ok_or_else(|| {
                ScanError::invalid_input(format!("block {} is not on a character boundary", i))
            })?;
            append_mod10_digit(chunk)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks.join(" "))
}

fn boleto_line(barcode: &str) -> Result<String> {
    let fields = BoletoFields::split(barcode)?;

    let mut first = String::with_capacity(9);
    first.push_str(fields.banco_moeda);
    first.push_str(fields.campo_livre_1_5);

    let mut line = String::with_capacity(47);
    line.push_str(&append_mod10_digit(&first)?);
    line.push_str(&append_mod10_digit(fields.campo_livre_6_15)?);
    line.push_str(&append_mod10_digit(fields.campo_livre_16_25)?);
    // already carries the general check digit, appended as-is
    line.push_str(fields.digito_vencimento_valor);

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mod10::mod10_digit;

    const BOLETO: &str = "00193373700000001000500940144816060680935031";
    const CONVENIO: &str = "83640000001552201380074617500905001000000051";

    #[test]
    fn test_real_boleto() {
        let line = typeable_line_from_barcode(BOLETO).unwrap();
        assert_eq!(line, "00190500954014481606906809350314337370000000100");
        assert_eq!(line.len(), 47);
    }

    #[test]
    fn test_boleto_groups() {
        let barcode = "00190000090123456789012345678901234567890123";
        let line = typeable_line_from_barcode(barcode).unwrap();

        assert_eq!(&line[..10], "0019901230");
        assert_eq!(&line[10..21], "45678901237");
        assert_eq!(&line[21..32], "45678901237");
        assert_eq!(&line[32..], &barcode[4..19]);
        assert_eq!(line, "00199012304567890123745678901237000009012345678");
    }

    #[test]
    fn test_boleto_shape() {
        for barcode in [
            BOLETO,
            "23793381286000000000000000000000000000000000",
            "34191090080123456789012345678901234567890123",
            "99999999999999999999999999999999999999999999",
        ] {
            let line = typeable_line_from_barcode(barcode).unwrap();
            assert_eq!(line.len(), 47, "{}", barcode);
            assert!(line.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_real_convenio() {
        let line = typeable_line_from_barcode(CONVENIO).unwrap();
        assert_eq!(line, "836400000011 552201380078 461750090502 010000000512");
    }

    #[test]
    fn test_convenio_blocks() {
        let barcode = format!("8{}", "1".repeat(43));
        let line = typeable_line_from_barcode(&barcode).unwrap();

        assert_eq!(line.len(), 51);
        let spaces: Vec<usize> = line.match_indices(' ').map(|(i, _)| i).collect();
        assert_eq!(spaces, vec![12, 25, 38]);

        for (i, token) in line.split(' ').enumerate() {
            let chunk = &barcode[i * 11..(i + 1) * 11];
            assert_eq!(token.len(), 12);
            assert!(token.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(&token[..11], chunk);
            assert_eq!(token.chars().nth(11).unwrap(), mod10_digit(chunk).unwrap());
        }
        assert_eq!(line, "811111111118 111111111113 111111111113 111111111113");
    }

    #[test]
    fn test_contract_violations_are_errors() {
        assert!(matches!(
            typeable_line_from_barcode("0019"),
            Err(ScanError::InvalidInput { .. })
        ));
        let with_letter = format!("0019{}x", "0".repeat(39));
        assert!(matches!(
            typeable_line_from_barcode(&with_letter),
            Err(ScanError::InvalidInput { .. })
        ));
    }
}
