//! ID prefix constants.
//!
//! Every record ID is `{prefix}-{8 hex chars}`, generated by the store.

pub const PREFIX_MODULE: &str = "mod";
pub const PREFIX_COMPONENT: &str = "cmp";
pub const PREFIX_STATUS: &str = "sts";
pub const PREFIX_TEAM: &str = "tea";
pub const PREFIX_ENVIRONMENT: &str = "env";
pub const PREFIX_DEVELOPER: &str = "dev";
pub const PREFIX_RELEASE: &str = "rel";
pub const PREFIX_TICKET: &str = "tkt";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_MODULE,
    PREFIX_COMPONENT,
    PREFIX_STATUS,
    PREFIX_TEAM,
    PREFIX_ENVIRONMENT,
    PREFIX_DEVELOPER,
    PREFIX_RELEASE,
    PREFIX_TICKET,
];
