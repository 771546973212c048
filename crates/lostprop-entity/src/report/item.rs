//! Lost item rows.

use serde::{Deserialize, Serialize};

/// Category code printed on the item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemCode {
    /// Dokumen.
    Dok,
    /// Elektronik.
    Elk,
    /// Kendaraan.
    Knd,
    /// Perhiasan.
    Prh,
    /// Uang.
    Ung,
    /// Lainnya.
    Lnn,
}

impl ItemCode {
    /// Indonesian category label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dok => "Dokumen",
            Self::Elk => "Elektronik",
            Self::Knd => "Kendaraan",
            Self::Prh => "Perhiasan",
            Self::Ung => "Uang",
            Self::Lnn => "Lainnya",
        }
    }
}

/// Counting unit for an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemUnit {
    /// Unit.
    #[default]
    Unit,
    /// Buah.
    Buah,
    /// Lembar.
    Lembar,
    /// Set.
    Set,
    /// Pasang.
    Pasang,
}

impl ItemUnit {
    /// Unit as printed after the quantity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Buah => "buah",
            Self::Lembar => "lembar",
            Self::Set => "set",
            Self::Pasang => "pasang",
        }
    }
}

/// One lost item on a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostItem {
    /// Category code.
    pub code: ItemCode,
    /// Item group (dokumen, elektronik, ...).
    #[serde(default)]
    pub group: String,
    /// Item type (handphone, ktp, ...).
    #[serde(default, rename = "type")]
    pub item_type: String,
    /// Physical shape (kartu, smartphone, ...).
    #[serde(default)]
    pub shape: String,
    /// Counting unit.
    #[serde(default)]
    pub unit: ItemUnit,
    /// How many were lost.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

impl LostItem {
    /// Quantity with unit, as printed in the loss table ("2 buah").
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.quantity, self.unit.as_str())
    }

    /// Description for the "Jenis" column, falling back to the category.
    pub fn type_label(&self) -> &str {
        if self.item_type.trim().is_empty() {
            self.code.label()
        } else {
            &self.item_type
        }
    }
}

fn default_quantity() -> u32 {
    1
}
