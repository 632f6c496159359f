//! Banks that buy debt packs and identity packs the hacker sells

/// Banks bidding on every debt pack
pub fn standard_banks() -> Vec<String> {
    ["Banco Aurora", "Caixa Verde", "Banco Meridional", "NuCapital"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A purchasable identity pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityOffer {
    pub quantity: u32,
    /// Level index at which the hacker starts offering it
    pub min_level: usize,
}

pub fn standard_identity_offers() -> Vec<IdentityOffer> {
    vec![
        IdentityOffer { quantity: 10, min_level: 0 },
        IdentityOffer { quantity: 50, min_level: 1 },
        IdentityOffer { quantity: 100, min_level: 2 },
    ]
}
