// src/common/format.rs
//
// Formatação de exibição no padrão brasileiro: moeda em BRL
// (R$ 1.234,56) e datas em dd/MM/yyyy.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formata um valor monetário como BRL: duas casas decimais,
/// vírgula como separador decimal e ponto agrupando milhares.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (integer, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    // Agrupa os milhares de trás para frente.
    let mut grouped = String::new();
    for (i, c) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let integer: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {},{}", integer, cents)
    } else {
        format!("R$ {},{}", integer, cents)
    }
}

/// Datas sempre em dd/MM/yyyy, como o restante do sistema exibe.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_moeda_com_agrupamento() {
        assert_eq!(format_currency(Decimal::new(1234_56, 2)), "R$ 1.234,56");
        assert_eq!(format_currency(Decimal::from(12500)), "R$ 12.500,00");
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn formata_moeda_pequena_e_negativa() {
        assert_eq!(format_currency(Decimal::new(750, 0)), "R$ 750,00");
        assert_eq!(format_currency(Decimal::new(-1000_50, 2)), "-R$ 1.000,50");
    }

    #[test]
    fn formata_data_no_padrao_brasileiro() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("data válida");
        assert_eq!(format_date(date), "07/03/2024");
    }
}
