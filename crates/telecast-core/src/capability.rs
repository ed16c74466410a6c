//! Per-method request capabilities.
//!
//! Every Bot API method accepts a fixed subset of five optional behaviors.
//! A [`CapabilitySet`] records that subset when a [`Request`](crate::Request)
//! is created; behavior setters consult it before touching the parameters.
//!
//! | Capability | Parameter |
//! |------------|-----------|
//! | [`DisableNotification`](Capability::DisableNotification) | `disable_notification` |
//! | [`ReplyToMessage`](Capability::ReplyToMessage) | `reply_to_message_id` |
//! | [`ReplyMarkup`](Capability::ReplyMarkup) | `reply_markup` |
//! | [`DisableWebPagePreview`](Capability::DisableWebPagePreview) | `disable_web_page_preview` |
//! | [`ParseMode`](Capability::ParseMode) | `parse_mode` |

use std::fmt;

/// An optional request behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Send silently (`disable_notification`).
    DisableNotification,
    /// Thread the message as a reply (`reply_to_message_id`).
    ReplyToMessage,
    /// Attach a keyboard or force-reply markup (`reply_markup`).
    ReplyMarkup,
    /// Control link previews (`disable_web_page_preview`).
    DisableWebPagePreview,
    /// Select the text format mode (`parse_mode`).
    ParseMode,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Capability; 5] = [
        Self::DisableNotification,
        Self::ReplyToMessage,
        Self::ReplyMarkup,
        Self::DisableWebPagePreview,
        Self::ParseMode,
    ];

    /// Stable diagnostic name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DisableNotification => "CAN_DISABLE_NOTIFICATION",
            Self::ReplyToMessage => "CAN_REPLY_TO_MESSAGE",
            Self::ReplyMarkup => "CAN_ADD_REPLY_MARKUP",
            Self::DisableWebPagePreview => "CAN_DISABLE_WEB_PAGE_PREVIEW",
            Self::ParseMode => "CAN_SET_PARSE_MODE",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`Capability`] tags.
///
/// Sets are small, `Copy`, and built at compile time for the method presets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet {
    members: [bool; 5],
}

impl CapabilitySet {
    /// No optional behaviors.
    pub const EMPTY: Self = Self::of(&[]);

    /// Plain text messages: every behavior.
    pub const TEXT: Self = Self::of(&Capability::ALL);

    /// Media with captions: everything except link previews.
    pub const MEDIA: Self = Self::of(&[
        Capability::ParseMode,
        Capability::DisableNotification,
        Capability::ReplyToMessage,
        Capability::ReplyMarkup,
    ]);

    /// Non-text sends (stickers, locations, contacts).
    pub const NOTIFY_REPLY_MARKUP: Self = Self::of(&[
        Capability::DisableNotification,
        Capability::ReplyToMessage,
        Capability::ReplyMarkup,
    ]);

    /// Text and caption edits.
    pub const EDIT: Self = Self::of(&[
        Capability::ParseMode,
        Capability::ReplyToMessage,
        Capability::ReplyMarkup,
    ]);

    /// Methods that only accept `reply_markup`.
    pub const MARKUP_ONLY: Self = Self::of(&[Capability::ReplyMarkup]);

    /// Methods that only accept `disable_notification`.
    pub const NOTIFY_ONLY: Self = Self::of(&[Capability::DisableNotification]);

    /// Builds a set from a list of tags.
    pub const fn of(capabilities: &[Capability]) -> Self {
        let mut members = [false; 5];
        let mut i = 0;
        while i < capabilities.len() {
            members[capabilities[i].index()] = true;
            i += 1;
        }
        Self { members }
    }

    /// Returns an empty set.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns the set of all five capabilities.
    pub const fn all() -> Self {
        Self::TEXT
    }

    /// Returns a copy of this set with `capability` added.
    #[must_use]
    pub const fn with(mut self, capability: Capability) -> Self {
        self.members[capability.index()] = true;
        self
    }

    /// Returns `true` if `capability` is a member.
    pub const fn contains(&self, capability: Capability) -> bool {
        self.members[capability.index()]
    }

    /// Iterates the members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|m| **m).count()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(CapabilitySet::TEXT.len(), 5);
        assert!(CapabilitySet::EMPTY.is_empty());
        assert!(!CapabilitySet::MEDIA.contains(Capability::DisableWebPagePreview));
        assert!(CapabilitySet::MEDIA.contains(Capability::ParseMode));
        assert!(CapabilitySet::NOTIFY_ONLY.contains(Capability::DisableNotification));
        assert_eq!(CapabilitySet::NOTIFY_ONLY.len(), 1);
        assert!(!CapabilitySet::EDIT.contains(Capability::DisableNotification));
    }

    #[test]
    fn test_with_and_collect() {
        let set = CapabilitySet::empty()
            .with(Capability::ReplyMarkup)
            .with(Capability::ReplyMarkup);
        assert_eq!(set, CapabilitySet::MARKUP_ONLY);

        let collected: CapabilitySet = [Capability::ParseMode, Capability::ReplyToMessage]
            .into_iter()
            .collect();
        assert!(collected.contains(Capability::ParseMode));
        assert!(collected.contains(Capability::ReplyToMessage));
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_iter_order() {
        let tags: Vec<_> = CapabilitySet::EDIT.iter().collect();
        assert_eq!(
            tags,
            vec![
                Capability::ReplyToMessage,
                Capability::ReplyMarkup,
                Capability::ParseMode
            ]
        );
    }
}
