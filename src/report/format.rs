/// Markdown rendering of a single network's analysis
///
/// Every line is `- Label: Value`. Line order is fixed so reports diff cleanly
/// between runs.
use crate::apis::goplus::{AnalysisResult, Flag, RugPullSecurity, TokenSecurity};
use crate::networks;

const UNKNOWN: &str = "Unknown";

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("- {}: {}\n", label, value));
}

fn push_flag(out: &mut String, label: &str, flag: Flag) {
    push_line(out, label, flag.label());
}

fn push_text(out: &mut String, label: &str, value: &Option<String>) {
    push_line(out, label, value.as_deref().unwrap_or(UNKNOWN));
}

/// `## <Network>` heading followed by the analysis lines
pub fn format_network_section(network: &str, result: &AnalysisResult) -> String {
    let mut section = format!("## {}\n\n", networks::display_name(network));
    section.push_str(&format_analysis(result));
    section
}

/// Token security lines (if any entry came back), then rug-pull lines
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if let Some(token) = result.token_entry() {
        format_token_security(&mut out, token);
    }

    match &result.rug_pull_security {
        Some(rug_pull) => format_rug_pull(&mut out, rug_pull),
        None => out.push_str("No rug pull security data available.\n"),
    }

    out
}

fn format_token_security(out: &mut String, t: &TokenSecurity) {
    push_flag(out, "Open Source", t.is_open_source);
    push_flag(out, "Proxy Contract", t.is_proxy);
    push_flag(out, "Mint Function", t.is_mintable);
    push_text(out, "Owner Address", &t.owner_address);
    push_flag(out, "Can Take Back Ownership", t.can_take_back_ownership);
    push_flag(out, "Owner Can Change Balance", t.owner_change_balance);
    push_flag(out, "Hidden Owner", t.hidden_owner);
    push_flag(out, "Selfdestruct", t.selfdestruct);
    push_flag(out, "External Call", t.external_call);
    push_flag(out, "In DEX", t.is_in_dex);
    push_text(out, "Buy Tax", &t.buy_tax);
    push_text(out, "Sell Tax", &t.sell_tax);
    push_flag(out, "Can't Buy", t.cannot_buy);
    push_flag(out, "Can't Sell All", t.cannot_sell_all);
    push_flag(out, "Slippage Modifiable", t.slippage_modifiable);
    push_flag(out, "Honeypot", t.is_honeypot);
    push_flag(out, "Transfer Pausable", t.transfer_pausable);
    push_flag(out, "Blacklist", t.is_blacklisted);
    push_flag(out, "Whitelist", t.is_whitelisted);
    push_flag(out, "Anti Whale", t.is_anti_whale);
    push_flag(out, "Anti Whale Modifiable", t.anti_whale_modifiable);
    push_flag(out, "Trading Cooldown", t.trading_cooldown);
    push_flag(out, "Personal Slippage Modifiable", t.personal_slippage_modifiable);
    push_text(out, "Token Name", &t.token_name);
    push_text(out, "Token Symbol", &t.token_symbol);
    push_text(out, "Holder Count", &t.holder_count);
    push_text(out, "Total Supply", &t.total_supply);
    push_text(out, "Creator Address", &t.creator_address);
    push_text(out, "Creator Balance", &t.creator_balance);
    push_text(out, "Creator Percent", &t.creator_percent);
    push_text(out, "LP Holder Count", &t.lp_holder_count);
    push_text(out, "LP Total Supply", &t.lp_total_supply);
    push_flag(out, "Is True Token", t.is_true_token);
    push_flag(out, "Is Airdrop Scam", t.is_airdrop_scam);

    // Trust list only ever reports membership
    let trusted = match t.trust_list {
        Flag::Yes => "Yes",
        _ => UNKNOWN,
    };
    push_line(out, "Is In Trust List", trusted);

    match &t.fake_token {
        Some(fake) => {
            let is_fake = if fake.value == Flag::Yes { "Yes" } else { "No" };
            push_line(out, "Fake Token", is_fake);
            out.push_str(&format!(
                "  - True Token Address: {}\n",
                fake.true_token_address.as_deref().unwrap_or(UNKNOWN)
            ));
        }
        None => push_line(out, "Fake Token", UNKNOWN),
    }
}

fn format_rug_pull(out: &mut String, r: &RugPullSecurity) {
    match &r.owner {
        Some(owner) => {
            push_text(out, "Owner Name", &owner.owner_name);
            push_text(out, "Owner Address", &owner.owner_address);
            push_text(out, "Owner Type", &owner.owner_type);
        }
        None => out.push_str("- Owner: No owner information available.\n"),
    }

    push_flag(out, "Privilege Withdraw", r.privilege_withdraw);
    push_flag(out, "Cannot Withdraw", r.withdraw_missing);

    // Unverified unless the API says otherwise
    let verified = if r.is_open_source == Flag::Yes { "Yes" } else { "No" };
    push_line(out, "Contract Verified", verified);

    push_flag(out, "Blacklist Function", r.blacklist);
    push_text(out, "Contract Name", &r.contract_name);
    push_flag(out, "Self-Destruct", r.selfdestruct);
    push_flag(out, "Potential Approval Abuse", r.approval_abuse);
    push_flag(out, "Proxy Contract", r.is_proxy);
}
