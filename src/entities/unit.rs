//! Unit entity - The purchase units an ingredient can be measured in.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Measurement unit for an ingredient purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Kilograms
    #[default]
    Kg,
    /// Grams
    G,
    /// Liters
    #[serde(alias = "l")]
    Litro,
    /// Milliliters
    Ml,
    /// Individual items (eggs, boxes, ...)
    #[serde(alias = "un")]
    Unidade,
}

impl Unit {
    /// Every unit offered by the ingredient form, in display order.
    pub const ALL: [Self; 5] = [Self::Kg, Self::G, Self::Litro, Self::Ml, Self::Unidade];

    /// Canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
            Self::Litro => "litro",
            Self::Ml => "ml",
            Self::Unidade => "unidade",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilo" | "kilos" | "quilo" | "quilos" => Ok(Self::Kg),
            "g" | "gr" | "grama" | "gramas" => Ok(Self::G),
            "l" | "lt" | "litro" | "litros" => Ok(Self::Litro),
            "ml" => Ok(Self::Ml),
            "un" | "und" | "unid" | "unidade" | "unidades" => Ok(Self::Unidade),
            other => Err(Error::validation(format!("Unknown unit: {other:?}"))),
        }
    }
}
