//! Supported networks and their chain IDs
//!
//! The table order is the report order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub chain_id: &'static str,
}

const fn network(name: &'static str, chain_id: &'static str) -> Network {
    Network { name, chain_id }
}

pub const NETWORKS: &[Network] = &[
    network("base", "8453"),
    network("base-sepolia", "84532"),
    network("ethereum", "1"),
    network("lyra", "957"),
    network("metal", "1750"),
    network("metal-sepolia", "1740"),
    network("mode", "34443"),
    network("mode-sepolia", "919"),
    network("optimism", "10"),
    network("optimism-sepolia", "11155420"),
    network("orderly", "291"),
    network("pgn", "424"),
    network("pgn-sepolia", "58008"),
    network("sepolia", "11155111"),
    network("superlumio", "8866"),
    network("zora", "7777777"),
    network("zora-sepolia", "999999999"),
];

/// Chain ID for a network name (exact, case-sensitive match)
pub fn chain_id(name: &str) -> Option<&'static str> {
    NETWORKS
        .iter()
        .find(|network| network.name == name)
        .map(|network| network.chain_id)
}

/// Section title for a network: first character upper-cased
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chain_ids_exact() {
        let expected = [
            ("base", "8453"),
            ("base-sepolia", "84532"),
            ("ethereum", "1"),
            ("lyra", "957"),
            ("metal", "1750"),
            ("metal-sepolia", "1740"),
            ("mode", "34443"),
            ("mode-sepolia", "919"),
            ("optimism", "10"),
            ("optimism-sepolia", "11155420"),
            ("orderly", "291"),
            ("pgn", "424"),
            ("pgn-sepolia", "58008"),
            ("sepolia", "11155111"),
            ("superlumio", "8866"),
            ("zora", "7777777"),
            ("zora-sepolia", "999999999"),
        ];

        assert_eq!(NETWORKS.len(), expected.len());
        for (network, (name, id)) in NETWORKS.iter().zip(expected.iter()) {
            assert_eq!(network.name, *name);
            assert_eq!(network.chain_id, *id);
            assert_eq!(chain_id(name), Some(*id));
        }
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = NETWORKS.iter().map(|n| n.name).collect();
        assert_eq!(names.len(), NETWORKS.len());
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(chain_id("solana"), None);
        assert_eq!(chain_id("Base"), None);
        assert_eq!(chain_id(""), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("base"), "Base");
        assert_eq!(display_name("base-sepolia"), "Base-sepolia");
        assert_eq!(display_name("pgn"), "Pgn");
        assert_eq!(display_name(""), "");
    }
}
