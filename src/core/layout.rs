//! Field layout of a 44-digit bank slip (boleto) barcode.
//!
//! Fields are laid out back to back in declaration order; their ranges are
//! derived at compile time from the length table.

use crate::utils::error::{Result, ScanError};
use std::ops::Range;

/// Number of digits in a payment slip barcode.
pub const BARCODE_LEN: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoletoField {
    /// Bank code (3) and currency code (1).
    BancoMoeda,
    /// General check digit (1), due date factor (4) and value (10).
    DigitoVencimentoValor,
    CampoLivre1To5,
    CampoLivre6To15,
    CampoLivre16To25,
}

impl BoletoField {
    pub const ALL: [BoletoField; 5] = [
        BoletoField::BancoMoeda,
        BoletoField::DigitoVencimentoValor,
        BoletoField::CampoLivre1To5,
        BoletoField::CampoLivre6To15,
        BoletoField::CampoLivre16To25,
    ];

    pub const fn width(self) -> usize {
        match self {
            BoletoField::BancoMoeda => 1 + 3,
            BoletoField::DigitoVencimentoValor => 1 + 4 + 10,
            BoletoField::CampoLivre1To5 => 5,
            BoletoField::CampoLivre6To15 => 10,
            BoletoField::CampoLivre16To25 => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoletoField::BancoMoeda => "banco_moeda",
            BoletoField::DigitoVencimentoValor => "digito_vencimento_valor",
            BoletoField::CampoLivre1To5 => "campo_livre_1_5",
            BoletoField::CampoLivre6To15 => "campo_livre_6_15",
            BoletoField::CampoLivre16To25 => "campo_livre_16_25",
        }
    }

    pub fn range(self) -> Range<usize> {
        let (start, end) = FIELD_BOUNDS[self as usize];
        start..end
    }
}

const FIELD_BOUNDS: [(usize, usize); 5] = field_bounds();

const fn field_bounds() -> [(usize, usize); 5] {
    let mut bounds = [(0, 0); 5];
    let mut offset = 0;
    let mut i = 0;
    while i < BoletoField::ALL.len() {
        let len = BoletoField::ALL[i].width();
        bounds[i] = (offset, offset + len);
        offset += len;
        i += 1;
    }
    bounds
}

const _: () = assert!(FIELD_BOUNDS[4].1 == BARCODE_LEN);

/// Returns the digits of `field` within `barcode`.
pub fn slice(barcode: &str, field: BoletoField) -> Result<&str> {
    let range = field.range();
    barcode.get(range.clone()).ok_or_else(|| {
        ScanError::invalid_input(format!(
            "field {} ({}..{}) is outside a {}-byte barcode",
            field.name(),
            range.start,
            range.end,
            barcode.len()
        ))
    })
}

/// The five boleto fields, borrowed from the barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoletoFields<'a> {
    pub banco_moeda: &'a str,
    pub digito_vencimento_valor: &'a str,
    pub campo_livre_1_5: &'a str,
    pub campo_livre_6_15: &'a str,
    pub campo_livre_16_25: &'a str,
}

impl<'a> BoletoFields<'a> {
    pub fn split(barcode: &'a str) -> Result<Self> {
        Ok(Self {
            banco_moeda: slice(barcode, BoletoField::BancoMoeda)?,
            digito_vencimento_valor: slice(barcode, BoletoField::DigitoVencimentoValor)?,
            campo_livre_1_5: slice(barcode, BoletoField::CampoLivre1To5)?,
            campo_livre_6_15: slice(barcode, BoletoField::CampoLivre6To15)?,
            campo_livre_16_25: slice(barcode, BoletoField::CampoLivre16To25)?,
        })
    }

    pub fn get(&self, field: BoletoField) -> &'a str {
        match field {
            BoletoField::BancoMoeda => self.banco_moeda,
            BoletoField::DigitoVencimentoValor => self.digito_vencimento_valor,
            BoletoField::CampoLivre1To5 => self.campo_livre_1_5,
            BoletoField::CampoLivre6To15 => self.campo_livre_6_15,
            BoletoField::CampoLivre16To25 => self.campo_livre_16_25,
        }
    }
}
