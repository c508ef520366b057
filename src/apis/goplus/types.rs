/// GoPlus API response types
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// CUSTOM DESERIALIZERS - Handle loosely typed API fields
// ============================================================================

/// Yes/No indicator as reported by the API
///
/// GoPlus encodes flags as `"1"`/`"0"` strings on token security and as
/// `1`/`0` numbers on rug-pull detection. Both spellings are accepted; any other
/// value (missing, null, `""`, `-1`, objects) is `Unknown`. Decoding never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flag {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Flag {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) if s == "1" => Flag::Yes,
            Value::String(s) if s == "0" => Flag::No,
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 1.0 => Flag::Yes,
                Some(v) if v == 0.0 => Flag::No,
                _ => Flag::Unknown,
            },
            _ => Flag::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
            Flag::Unknown => "Unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Flag::from_value(&value))
    }
}

/// Deserialize a free-text field
///
/// Empty values (null, `""`, `0`, `false`) become `None`; numbers and `true` are
/// stringified; nested structures are kept as compact JSON.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Deserialize an optional nested object, treating any non-object value as absent
fn deserialize_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Envelope shared by all GoPlus endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct GoPlusResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

/// Complete data (1) and partial data (2) both carry a usable result
pub const SUCCESS_CODES: [i64; 2] = [1, 2];

// ============================================================================
// TOKEN SECURITY
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FakeToken {
    #[serde(default)]
    pub value: Flag,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub true_token_address: Option<String>,
}

/// Token security entry for one contract address
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenSecurity {
    pub is_open_source: Flag,
    pub is_proxy: Flag,
    pub is_mintable: Flag,
    #[serde(deserialize_with = "deserialize_text")]
    pub owner_address: Option<String>,
    pub can_take_back_ownership: Flag,
    pub owner_change_balance: Flag,
    pub hidden_owner: Flag,
    pub selfdestruct: Flag,
    pub external_call: Flag,
    pub is_in_dex: Flag,
    #[serde(deserialize_with = "deserialize_text")]
    pub buy_tax: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub sell_tax: Option<String>,
    pub cannot_buy: Flag,
    pub cannot_sell_all: Flag,
    pub slippage_modifiable: Flag,
    pub is_honeypot: Flag,
    pub transfer_pausable: Flag,
    pub is_blacklisted: Flag,
    pub is_whitelisted: Flag,
    pub is_anti_whale: Flag,
    pub anti_whale_modifiable: Flag,
    pub trading_cooldown: Flag,
    pub personal_slippage_modifiable: Flag,
    #[serde(deserialize_with = "deserialize_text")]
    pub token_name: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub token_symbol: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub holder_count: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub total_supply: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub creator_address: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub creator_balance: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub creator_percent: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub lp_holder_count: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub lp_total_supply: Option<String>,
    pub is_true_token: Flag,
    pub is_airdrop_scam: Flag,
    pub trust_list: Flag,
    #[serde(deserialize_with = "deserialize_object")]
    pub fake_token: Option<FakeToken>,
}

// ============================================================================
// RUG-PULL DETECTION
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RugPullOwner {
    #[serde(deserialize_with = "deserialize_text")]
    pub owner_name: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub owner_address: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub owner_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RugPullSecurity {
    #[serde(deserialize_with = "deserialize_object")]
    pub owner: Option<RugPullOwner>,
    pub privilege_withdraw: Flag,
    pub withdraw_missing: Flag,
    pub is_open_source: Flag,
    pub blacklist: Flag,
    #[serde(deserialize_with = "deserialize_text")]
    pub contract_name: Option<String>,
    pub selfdestruct: Flag,
    pub approval_abuse: Flag,
    pub is_proxy: Flag,
}

// ============================================================================
// COMBINED RESULT
// ============================================================================

/// Both analyses for one token on one chain
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// Address that was queried
    pub address: String,
    /// Token security entries keyed by contract address
    pub token_security: BTreeMap<String, TokenSecurity>,
    /// Rug-pull detection result, absent when the API returned none
    pub rug_pull_security: Option<RugPullSecurity>,
}

impl AnalysisResult {
    /// Token security entry for the queried address
    ///
    /// The API lower-cases keys; when no key matches, the first entry is used.
    pub fn token_entry(&self) -> Option<&TokenSecurity> {
        self.token_security
            .get(&self.address)
            .or_else(|| self.token_security.get(&self.address.to_lowercase()))
            .or_else(|| self.token_security.values().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_from_strings_and_numbers() {
        assert_eq!(Flag::from_value(&json!("1")), Flag::Yes);
        assert_eq!(Flag::from_value(&json!("0")), Flag::No);
        assert_eq!(Flag::from_value(&json!(1)), Flag::Yes);
        assert_eq!(Flag::from_value(&json!(0)), Flag::No);
        assert_eq!(Flag::from_value(&json!(-1)), Flag::Unknown);
        assert_eq!(Flag::from_value(&json!("")), Flag::Unknown);
        assert_eq!(Flag::from_value(&json!("yes")), Flag::Unknown);
        assert_eq!(Flag::from_value(&json!(null)), Flag::Unknown);
        assert_eq!(Flag::from_value(&json!({ "value": 1 })), Flag::Unknown);
    }

    #[test]
    fn test_token_security_lenient_decode() {
        let entry: TokenSecurity = serde_json::from_value(json!({
            "is_open_source": "1",
            "is_proxy": 0,
            "is_mintable": [],
            "buy_tax": "0.05",
            "sell_tax": "",
            "holder_count": 1234,
            "total_supply": 0,
            "fake_token": "none",
            "unexpected_field": { "nested": true }
        }))
        .unwrap();

        assert_eq!(entry.is_open_source, Flag::Yes);
        assert_eq!(entry.is_proxy, Flag::No);
        assert_eq!(entry.is_mintable, Flag::Unknown);
        assert_eq!(entry.hidden_owner, Flag::Unknown);
        assert_eq!(entry.buy_tax.as_deref(), Some("0.05"));
        assert_eq!(entry.sell_tax, None);
        assert_eq!(entry.holder_count.as_deref(), Some("1234"));
        assert_eq!(entry.total_supply, None);
        assert!(entry.fake_token.is_none());
    }

    #[test]
    fn test_envelope_with_null_result() {
        let response: GoPlusResponse<RugPullSecurity> =
            serde_json::from_value(json!({ "code": 1, "message": "OK", "result": null })).unwrap();
        assert_eq!(response.code, 1);
        assert!(response.result.is_none());
    }

    #[test]
    fn test_token_entry_lookup() {
        let mut result = AnalysisResult {
            address: "0xAbCd".to_string(),
            ..Default::default()
        };
        assert!(result.token_entry().is_none());

        let entry = TokenSecurity {
            is_honeypot: Flag::Yes,
            ..Default::default()
        };
        result.token_security.insert("0xabcd".to_string(), entry);
        result
            .token_security
            .insert("0x0000".to_string(), TokenSecurity::default());

        assert_eq!(result.token_entry().unwrap().is_honeypot, Flag::Yes);
    }
}
