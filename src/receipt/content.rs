//! Rent receipt fields and their block layout

use super::fonts::TextStyle;
use super::format::{format_amount, format_long_date, format_period};
use super::layout::{Anchor, Block};
use chrono::NaiveDate;
use image::Rgb;
use serde::{Deserialize, Serialize};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const DARK_BLUE: Rgb<u8> = Rgb([0, 0, 139]);
const ALICE_BLUE: Rgb<u8> = Rgb([240, 248, 255]);

/// Section label column
const LABEL_X: i32 = 50;
/// Indented detail column
const DETAIL_X: i32 = 80;

/// A named person and their postal address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: Vec<String>,
}

/// Everything printed on the receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptFields {
    pub landlord: Party,
    pub tenant: Party,
    pub property_address: Vec<String>,
    /// Any day of the month the rent covers
    pub rent_month: NaiveDate,
    pub amount: f64,
    /// Amount spelled out, printed verbatim
    pub amount_in_words: String,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    /// Place of issue ("Fait à ...")
    pub place: String,
    pub signature: String,
}

impl Default for ReceiptFields {
    fn default() -> Self {
        Self {
            landlord: Party {
                name: "Madame Isabelle MARTIN".to_string(),
                address: vec![
                    "85 Avenue de la Paix".to_string(),
                    "4020 LIÈGE".to_string(),
                ],
            },
            tenant: Party {
                name: "Monsieur Alex DUPONT".to_string(),
                address: vec!["16 Rue des Lilas".to_string(), "4000 LIÈGE".to_string()],
            },
            property_address: vec![
                "16 Rue des Lilas, Appartement 3B".to_string(),
                "4000 LIÈGE".to_string(),
            ],
            rent_month: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default(),
            amount: 746.00,
            amount_in_words: "Sept cent quarante-six euros".to_string(),
            payment_date: NaiveDate::from_ymd_opt(2025, 9, 5).unwrap_or_default(),
            payment_method: "Virement bancaire".to_string(),
            place: "Liège".to_string(),
            signature: "I. Martin".to_string(),
        }
    }
}

fn label(text: impl Into<String>, advance: i32) -> Block {
    Block::text(
        text,
        TextStyle::Normal,
        BLACK,
        Anchor::Start { x: LABEL_X },
        advance,
    )
}

fn detail(text: impl Into<String>, x: i32, advance: i32) -> Block {
    Block::text(text, TextStyle::Small, BLACK, Anchor::Start { x }, advance)
}

/// Label followed by indented lines: first line 30px below, then 25px apart
fn section(blocks: &mut Vec<Block>, title: &str, advance: i32, lines: &[String]) {
    blocks.push(label(title, advance));
    for (i, line) in lines.iter().enumerate() {
        blocks.push(detail(line.as_str(), DETAIL_X, if i == 0 { 30 } else { 25 }));
    }
}

/// Build the receipt blocks for a canvas `width` pixels wide
pub fn receipt_blocks(fields: &ReceiptFields, width: u32) -> Vec<Block> {
    let width = width as i32;
    let center = width / 2;
    let signature_x = width - 350;
    let signature_end = width - 100;
    let mut blocks = Vec::new();

    blocks.push(Block::text(
        "QUITTANCE DE LOYER",
        TextStyle::Title,
        BLACK,
        Anchor::Middle { x: center },
        60,
    ));

    let landlord: Vec<String> = std::iter::once(fields.landlord.name.clone())
        .chain(fields.landlord.address.iter().cloned())
        .collect();
    section(&mut blocks, "Propriétaire:", 60, &landlord);

    let tenant: Vec<String> = std::iter::once(fields.tenant.name.clone())
        .chain(fields.tenant.address.iter().cloned())
        .collect();
    section(&mut blocks, "Locataire:", 50, &tenant);

    section(
        &mut blocks,
        "Adresse du logement:",
        50,
        &fields.property_address,
    );

    blocks.push(Block::Rule {
        from_x: LABEL_X,
        to_x: width - LABEL_X,
        color: GRAY,
        thickness: 1,
        advance: 40,
    });

    blocks.push(label("Reçu pour loyer du mois de:", 40));
    blocks.push(Block::text(
        format_period(fields.rent_month),
        TextStyle::Title,
        BLUE,
        Anchor::Middle { x: center },
        35,
    ));

    blocks.push(Block::Panel {
        advance: 60,
        height: 120,
        inset: LABEL_X,
        outline: BLUE,
        fill: Some(ALICE_BLUE),
        thickness: 2,
        children: vec![
            Block::text(
                "Montant du loyer:",
                TextStyle::Normal,
                BLACK,
                Anchor::Middle { x: center },
                30,
            ),
            Block::text(
                format_amount(fields.amount),
                TextStyle::Amount,
                DARK_BLUE,
                Anchor::Middle { x: center },
                40,
            ),
            Block::text(
                format!("({})", fields.amount_in_words),
                TextStyle::Small,
                BLACK,
                Anchor::Middle { x: center },
                40,
            ),
        ],
    });

    let paid_on = format_long_date(fields.payment_date);
    blocks.push(detail(
        format!("Date de paiement: {}", paid_on),
        LABEL_X,
        40,
    ));
    blocks.push(detail(
        format!("Mode de paiement: {}", fields.payment_method),
        LABEL_X,
        30,
    ));
    blocks.push(detail(
        format!("Fait à {}, le {}", fields.place, paid_on),
        LABEL_X,
        80,
    ));

    blocks.push(detail("Signature du propriétaire:", signature_x, 60));
    blocks.push(Block::Rule {
        from_x: signature_x,
        to_x: signature_end,
        color: BLACK,
        thickness: 1,
        advance: 30,
    });
    blocks.push(Block::text(
        fields.signature.as_str(),
        TextStyle::Small,
        BLACK,
        Anchor::Middle {
            x: (signature_x + signature_end) / 2,
        },
        10,
    ));

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::fonts::Fonts;
    use crate::receipt::layout::{layout, DrawOp};

    fn texts(blocks: &[Block]) -> Vec<String> {
        let mut out = Vec::new();
        for block in blocks {
            match block {
                Block::Text { text, .. } => out.push(text.clone()),
                Block::Panel { children, .. } => out.extend(texts(children)),
                Block::Rule { .. } => {}
            }
        }
        out
    }

    #[test]
    fn test_default_receipt_text() {
        let blocks = receipt_blocks(&ReceiptFields::default(), 800);
        let texts = texts(&blocks);

        assert_eq!(texts[0], "QUITTANCE DE LOYER");
        assert!(texts.contains(&"SEPTEMBRE 2025".to_string()));
        assert!(texts.contains(&"746,00 €".to_string()));
        assert!(texts.contains(&"(Sept cent quarante-six euros)".to_string()));
        assert!(texts.contains(&"Date de paiement: 05 septembre 2025".to_string()));
        assert!(texts.contains(&"Fait à Liège, le 05 septembre 2025".to_string()));
        assert_eq!(texts.last().map(String::as_str), Some("I. Martin"));
    }

    #[test]
    fn test_default_receipt_positions() {
        let ops = layout(
            &receipt_blocks(&ReceiptFields::default(), 800),
            800,
            &Fonts::Bitmap,
        );

        let y_of = |needle: &str| {
            ops.iter().find_map(|op| match op {
                DrawOp::Text { text, y, .. } if text == needle => Some(*y),
                _ => None,
            })
        };
        assert_eq!(y_of("Propriétaire:"), Some(120));
        assert_eq!(y_of("4020 LIÈGE"), Some(200));
        assert_eq!(y_of("Locataire:"), Some(250));
        assert_eq!(y_of("Adresse du logement:"), Some(380));
        assert_eq!(y_of("Reçu pour loyer du mois de:"), Some(515));
        assert_eq!(y_of("Date de paiement: 05 septembre 2025"), Some(770));
        assert_eq!(y_of("Signature du propriétaire:"), Some(940));

        let panel = ops.iter().find_map(|op| match op {
            DrawOp::Rect { top, bottom, .. } => Some((*top, *bottom)),
            _ => None,
        });
        assert_eq!(panel, Some((610, 730)));
    }
}
