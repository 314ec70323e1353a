/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::user::User;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Member, the top level AppNexus account
///
/// Only `id` and `name` are always present; every other attribute is
/// optional and left out of the JSON when unset.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Member {
    /// Member identifier
    #[serde(alias = "ID")]
    pub id: u64,
    /// Member name
    #[serde(alias = "Name", default)]
    pub name: String,
    /// Account state, e.g. `active`
    #[serde(alias = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Support address shown in white label UIs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelabel_support_email: Option<String>,
    /// Priority below which inventory is not resold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_reselling_priority: Option<i64>,
    /// Entity type, e.g. `network`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Reselling exposure setting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reselling_exposure: Option<String>,
    /// Date the inventory was exposed for reselling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reselling_exposed_on: Option<String>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Reporting timezone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Default currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_insertion_orders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_optimization_levers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_optimization_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_imps_verified: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_imps_self_audited: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_imps_unaudited: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_non_cpm_payment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_allow_cpc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_allow_cpa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_campaign_trust: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_campaign_allow_unaudited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_allows_unaudited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_facebook: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_decimal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_click_and_imp_trackers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ad_profile_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_credit_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_exposure: Option<String>,
    /// Main contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_ad_profile_override: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_eap_ecp_placement_settings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_external_audit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_placement_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_revshare_pct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dongle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_notify_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_profile_id: Option<u64>,
    #[serde(rename = "pops_enabled_UI", default, skip_serializing_if = "Option::is_none")]
    pub pops_enabled_ui: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_priority_audit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accept_data_provider_usersync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accept_demand_partner_usersync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accept_supply_partner_usersync: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_blacklist_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_facebook_preaudit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitbull_segment_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitbull_segment_value: Option<i64>,
    /// Free text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sherlock_notify_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_content_retrieval_timeout_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_enable_for_mediation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritize_margin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_visibility_profile_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<i64>,
    /// Console user owning the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_owner_user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,
    /// Content categories, passed through untyped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_categories: Option<Vec<Value>>,
    /// Standard creative sizes, passed through untyped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_sizes: Option<Vec<Value>>,
}
