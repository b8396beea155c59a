//! Static catalog of the three fixed-price service tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a pricing tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Basic,
    Standard,
    Premium,
}

impl PackageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Basic => "basic",
            PackageId::Standard => "standard",
            PackageId::Premium => "premium",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PackageId::Basic),
            "standard" => Ok(PackageId::Standard),
            "premium" => Ok(PackageId::Premium),
            _ => Err(()),
        }
    }
}

/// A fixed-price service tier bundling staffing and drink allotment
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub name: &'static str,
    /// Price in pence (GBP minor units)
    pub price_pence: i64,
    pub description: &'static str,
}

impl Package {
    /// Price formatted for display, e.g. `£390.00`
    pub fn price_display(&self) -> String {
        format!("£{}.{:02}", self.price_pence / 100, self.price_pence % 100)
    }
}

/// The three pricing tiers. Amounts are in pence.
pub const PACKAGE_CATALOG: &[Package] = &[
    Package {
        id: PackageId::Basic,
        name: "Basic Package",
        price_pence: 29_000,
        description: "Ideal for small parties, book launches, private events. \
                      1-30 guests, 1 bartender, 2 signature mocktails and classics.",
    },
    Package {
        id: PackageId::Standard,
        name: "Standard Package",
        price_pence: 39_000,
        description: "Ideal for weddings, private events, parties. 31-80 guests, \
                      1 bartender per 30 guests, welcome wine, 4 signature mocktails.",
    },
    Package {
        id: PackageId::Premium,
        name: "Premium Package",
        price_pence: 68_250,
        description: "Ideal for weddings, luxurious dinners. 81+ guests, \
                      1 bartender per 30 guests, all signature mocktails, \
                      custom mocktail creation.",
    },
];

/// Look up a package by its textual id (`basic`, `standard`, `premium`)
pub fn find_package(id: &str) -> Option<&'static Package> {
    let id: PackageId = id.parse().ok()?;
    PACKAGE_CATALOG.iter().find(|pkg| pkg.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_three_tiers() {
        assert_eq!(PACKAGE_CATALOG.len(), 3);
    }

    #[test]
    fn lookup_by_id() {
        let standard = find_package("standard").unwrap();
        assert_eq!(standard.name, "Standard Package");
        assert_eq!(standard.price_pence, 39_000);
        assert!(find_package("platinum").is_none());
        assert!(find_package("").is_none());
    }

    #[test]
    fn price_display_formats_minor_units() {
        assert_eq!(find_package("basic").unwrap().price_display(), "£290.00");
        assert_eq!(find_package("premium").unwrap().price_display(), "£682.50");
    }
}
