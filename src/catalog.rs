//! Dessert catalog
//!
//! An immutable, ordered list of desserts. The catalog is built once at
//! startup (from the builtin table or a config file) and only read afterwards.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{ClickerError, Result};

/// Image reference for a dessert.
///
/// The core treats this as an opaque identifier; the terminal UI maps it
/// to ASCII art and a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DessertImage {
    Cupcake,
    Donut,
    Eclair,
    Froyo,
    Gingerbread,
    Honeycomb,
    IceCreamSandwich,
    JellyBean,
    KitKat,
    Lollipop,
    Marshmallow,
    Nougat,
    Oreo,
}

impl DessertImage {
    /// Human-readable name for display
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cupcake => "Cupcake",
            Self::Donut => "Donut",
            Self::Eclair => "Eclair",
            Self::Froyo => "Froyo",
            Self::Gingerbread => "Gingerbread",
            Self::Honeycomb => "Honeycomb",
            Self::IceCreamSandwich => "Ice Cream Sandwich",
            Self::JellyBean => "Jelly Bean",
            Self::KitKat => "KitKat",
            Self::Lollipop => "Lollipop",
            Self::Marshmallow => "Marshmallow",
            Self::Nougat => "Nougat",
            Self::Oreo => "Oreo",
        }
    }
}

/// A single purchasable dessert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dessert {
    /// Sale price in whole dollars
    pub price: u64,
    /// Image shown while this dessert is on offer
    pub image: DessertImage,
}

impl Dessert {
    pub const fn new(price: u64, image: DessertImage) -> Self {
        Self { price, image }
    }
}

/// Builtin dessert table, in the order they are offered.
const BUILTIN_DESSERTS: &[Dessert] = &[
    Dessert::new(5, DessertImage::Cupcake),
    Dessert::new(10, DessertImage::Donut),
    Dessert::new(15, DessertImage::Eclair),
    Dessert::new(30, DessertImage::Froyo),
    Dessert::new(50, DessertImage::Gingerbread),
];

/// Ordered, non-empty, read-only list of desserts.
///
/// # Example
///
/// ```
/// use dessert_clicker::catalog::{Catalog, DessertImage};
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.get(0).unwrap().image, DessertImage::Cupcake);
/// assert!(catalog.get(catalog.len()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    desserts: Vec<Dessert>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog from an ordered list of desserts.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCatalog` if `desserts` is empty.
    pub fn new(desserts: Vec<Dessert>) -> Result<Self> {
        if desserts.is_empty() {
            return Err(ClickerError::EmptyCatalog);
        }
        Ok(Self { desserts })
    }

    /// The builtin dessert table
    pub fn builtin() -> Self {
        Self {
            desserts: BUILTIN_DESSERTS.to_vec(),
        }
    }

    /// Look up the dessert at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Dessert> {
        self.desserts
            .get(index)
            .ok_or(ClickerError::IndexOutOfRange {
                index,
                len: self.desserts.len(),
            })
    }

    /// Number of desserts in the catalog (never zero)
    #[inline]
    pub fn len(&self) -> usize {
        self.desserts.len()
    }

    /// Always false; kept for API symmetry with `len()`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.desserts.is_empty()
    }

    /// Iterate desserts in offer order
    pub fn iter(&self) -> impl Iterator<Item = &Dessert> {
        self.desserts.iter()
    }

    /// Iterate `(index, dessert)` pairs; the index is the one `get` takes
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Dessert)> {
        self.desserts.iter().enumerate()
    }

    /// All desserts as a slice
    pub fn desserts(&self) -> &[Dessert] {
        &self.desserts
    }
}
