//! Chat member permission lists for `restrictChatMember` and
//! `promoteChatMember`.
//!
//! Callers give either a plain list of permission names (each granted) or a
//! name to boolean mapping. [`PermissionSet::resolve`] checks every name
//! against the method's whitelist and produces the flags as a [`ParamMap`]
//! ready to merge into the request parameters.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::params::ParamMap;

/// A single chat member permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatPermission {
    CanSendMessages,
    CanSendMediaMessages,
    CanSendOtherMessages,
    CanAddWebPagePreviews,
    CanChangeInfo,
    CanPostMessages,
    CanEditMessages,
    CanDeleteMessages,
    CanInviteUsers,
    CanRestrictMembers,
    CanPinMessages,
    CanPromoteMembers,
}

/// Permissions accepted by `restrictChatMember`.
pub const RESTRICT_PERMISSIONS: [ChatPermission; 4] = [
    ChatPermission::CanSendMessages,
    ChatPermission::CanSendMediaMessages,
    ChatPermission::CanSendOtherMessages,
    ChatPermission::CanAddWebPagePreviews,
];

/// Permissions accepted by `promoteChatMember`.
pub const PROMOTE_PERMISSIONS: [ChatPermission; 8] = [
    ChatPermission::CanChangeInfo,
    ChatPermission::CanPostMessages,
    ChatPermission::CanEditMessages,
    ChatPermission::CanDeleteMessages,
    ChatPermission::CanInviteUsers,
    ChatPermission::CanRestrictMembers,
    ChatPermission::CanPinMessages,
    ChatPermission::CanPromoteMembers,
];

const ALL_PERMISSIONS: [ChatPermission; 12] = [
    ChatPermission::CanSendMessages,
    ChatPermission::CanSendMediaMessages,
    ChatPermission::CanSendOtherMessages,
    ChatPermission::CanAddWebPagePreviews,
    ChatPermission::CanChangeInfo,
    ChatPermission::CanPostMessages,
    ChatPermission::CanEditMessages,
    ChatPermission::CanDeleteMessages,
    ChatPermission::CanInviteUsers,
    ChatPermission::CanRestrictMembers,
    ChatPermission::CanPinMessages,
    ChatPermission::CanPromoteMembers,
];

impl ChatPermission {
    /// Wire name of this flag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanSendMessages => "can_send_messages",
            Self::CanSendMediaMessages => "can_send_media_messages",
            Self::CanSendOtherMessages => "can_send_other_messages",
            Self::CanAddWebPagePreviews => "can_add_web_page_previews",
            Self::CanChangeInfo => "can_change_info",
            Self::CanPostMessages => "can_post_messages",
            Self::CanEditMessages => "can_edit_messages",
            Self::CanDeleteMessages => "can_delete_messages",
            Self::CanInviteUsers => "can_invite_users",
            Self::CanRestrictMembers => "can_restrict_members",
            Self::CanPinMessages => "can_pin_messages",
            Self::CanPromoteMembers => "can_promote_members",
        }
    }
}

impl FromStr for ChatPermission {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        ALL_PERMISSIONS
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ApiError::invalid_argument(format!("unknown permission \"{s}\"")))
    }
}

impl fmt::Display for ChatPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied permission flags, validated on [`resolve`](Self::resolve).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionSet {
    entries: Vec<(String, Value)>,
}

impl PermissionSet {
    /// Grants every named permission.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names
                .into_iter()
                .map(|n| (n.into(), Value::Bool(true)))
                .collect(),
        }
    }

    /// Sets each named permission to the given value.
    pub fn flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            entries: flags
                .into_iter()
                .map(|(n, v)| (n.into(), Value::Bool(v)))
                .collect(),
        }
    }

    /// Builds a set from dynamic JSON: an array of names or an object of
    /// name to value.
    ///
    /// Object values are kept as-is and type-checked by [`resolve`](Self::resolve).
    pub fn from_json(value: Value) -> ApiResult<Self> {
        match value {
            Value::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(name) => names.push(name),
                        other => {
                            return Err(ApiError::invalid_argument(format!(
                                "permission name {other} is not a string"
                            )));
                        }
                    }
                }
                Ok(Self::names(names))
            }
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => Err(ApiError::invalid_argument(format!(
                "permissions must be a list or a mapping, got {other}"
            ))),
        }
    }

    /// Returns `true` if no permission was given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates the set against `allowed` and renders it as parameters.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidArgument`] naming the first unsupported permission
    /// or non-boolean value.
    pub fn resolve(&self, allowed: &[ChatPermission]) -> ApiResult<ParamMap> {
        let mut out = ParamMap::new();
        for (name, value) in &self.entries {
            if !allowed.iter().any(|p| p.as_str() == name) {
                return Err(ApiError::invalid_argument(format!(
                    "permission \"{name}\" is not supported by this method"
                )));
            }
            let Value::Bool(flag) = value else {
                return Err(ApiError::invalid_argument(format!(
                    "permission value {value} for \"{name}\" is not a boolean"
                )));
            };
            out.insert(name.as_str(), *flag);
        }
        Ok(out)
    }
}

impl FromIterator<ChatPermission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = ChatPermission>>(iter: I) -> Self {
        Self::names(iter.into_iter().map(ChatPermission::as_str))
    }
}

impl FromIterator<(ChatPermission, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (ChatPermission, bool)>>(iter: I) -> Self {
        Self::flags(iter.into_iter().map(|(p, v)| (p.as_str(), v)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::params::{ParamValue, render_params};

    #[test]
    fn test_names_granted() {
        let set = PermissionSet::names(["can_send_messages", "can_add_web_page_previews"]);
        let params = set.resolve(&RESTRICT_PERMISSIONS).unwrap();
        assert_eq!(
            Value::Object(render_params(&params).unwrap()),
            json!({ "can_send_messages": true, "can_add_web_page_previews": true })
        );
    }

    #[test]
    fn test_flags_and_typed_input() {
        let set: PermissionSet = [
            (ChatPermission::CanPinMessages, false),
            (ChatPermission::CanInviteUsers, true),
        ]
        .into_iter()
        .collect();
        let params = set.resolve(&PROMOTE_PERMISSIONS).unwrap();
        assert_eq!(
            params.get("can_pin_messages").and_then(ParamValue::as_bool),
            Some(false)
        );
        assert_eq!(
            params.get("can_invite_users").and_then(ParamValue::as_bool),
            Some(true)
        );
    }

    #[test]
    fn test_unsupported_name_rejected() {
        let set: PermissionSet = [ChatPermission::CanChangeInfo].into_iter().collect();
        let err = set.resolve(&RESTRICT_PERMISSIONS).unwrap_err();
        assert!(err.to_string().contains("can_change_info"));
    }

    #[test]
    fn test_from_json() {
        let set = PermissionSet::from_json(json!({ "can_post_messages": true })).unwrap();
        assert_eq!(set.resolve(&PROMOTE_PERMISSIONS).unwrap().len(), 1);

        let list = PermissionSet::from_json(json!(["can_send_messages"])).unwrap();
        assert!(!list.is_empty());

        let non_bool = PermissionSet::from_json(json!({ "can_post_messages": "yes" })).unwrap();
        assert!(matches!(
            non_bool.resolve(&PROMOTE_PERMISSIONS),
            Err(ApiError::InvalidArgument(_))
        ));

        assert!(PermissionSet::from_json(json!(5)).is_err());
        assert!(PermissionSet::from_json(json!([1])).is_err());
    }

    #[test]
    fn test_permission_from_str() {
        assert_eq!(
            "can_promote_members".parse::<ChatPermission>().unwrap(),
            ChatPermission::CanPromoteMembers
        );
        assert!("can_fly".parse::<ChatPermission>().is_err());
    }
}
