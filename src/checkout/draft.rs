//! The ephemeral gift-note draft folded into the order comment.

use std::fmt;

/// Whether the gift box should include an LED light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChoice {
    /// "Có" — include the LED.
    Co,
    /// "Không" — no LED.
    Khong,
}

impl fmt::Display for LedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedChoice::Co => f.write_str("Có"),
            LedChoice::Khong => f.write_str("Không"),
        }
    }
}

/// The four gift-note form fields. All of them must be filled in before
/// an order can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftNote {
    /// Requested accessory for the gift box.
    pub accessory: String,

    /// LED choice; `None` until the user picks one.
    pub led: Option<LedChoice>,

    /// Message printed on the card.
    pub card_message: String,

    /// Wish note accompanying the gift.
    pub wish: String,
}

/// Names one gift-note field in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftNoteField {
    /// The accessory field.
    Accessory,
    /// The LED choice.
    Led,
    /// The card message.
    CardMessage,
    /// The wish note.
    Wish,
}

impl fmt::Display for GiftNoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GiftNoteField::Accessory => f.write_str("phụ kiện"),
            GiftNoteField::Led => f.write_str("đèn LED"),
            GiftNoteField::CardMessage => f.write_str("thiệp"),
            GiftNoteField::Wish => f.write_str("lời chúc"),
        }
    }
}

impl GiftNote {
    /// The first missing field, in form order, if any.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<GiftNoteField> {
        if self.accessory.trim().is_empty() {
            return Some(GiftNoteField::Accessory);
        }

        if self.led.is_none() {
            return Some(GiftNoteField::Led);
        }

        if self.card_message.trim().is_empty() {
            return Some(GiftNoteField::CardMessage);
        }

        if self.wish.trim().is_empty() {
            return Some(GiftNoteField::Wish);
        }

        None
    }

    /// Fold the four fields into the single comment string submitted with
    /// the order, with fixed labels and separators.
    #[must_use]
    pub fn comment(&self) -> String {
        let led = self.led.map(|c| c.to_string()).unwrap_or_default();

        format!(
            "Phụ kiện: {} | Đèn LED: {} | Thiệp: {} | Lời chúc: {}",
            self.accessory.trim(),
            led,
            self.card_message.trim(),
            self.wish.trim(),
        )
    }
}
