//! Account identifiers as shown in the navigation bar.
//!
//! The identifier itself is opaque, nothing here validates it. The only rule is how
//! it gets shortened for display, see [truncate_account].

use std::fmt;

/// End (exclusive) of the leading slice
pub const HEAD_END: usize = 5;

/// Start of the trailing slice
pub const TAIL_START: usize = 38;

/// End (exclusive) of the trailing slice
pub const TAIL_END: usize = 42;

/// Placed between the two slices
pub const SEPARATOR: &str = "...";

/// Shorten an account identifier for display
///
/// Returns the characters `[0, 5)`, the separator and the characters `[38, 42)`.
///
/// The offsets are fixed and tuned for 42 character `0x` addresses. Shorter inputs just
/// produce a shorter result, this never fails.
///
/// Positions are counted in chars so multi-byte input is never split.
///
/// ```
/// let short = dapp_account::truncate_account("0xABCDEF0123456789000000000000000000001234");
/// assert_eq!(short, "0xABC...1234");
/// ```
pub fn truncate_account(account: &str) -> String {
   let head: String = account.chars().take(HEAD_END).collect();
   let tail: String = account
      .chars()
      .skip(TAIL_START)
      .take(TAIL_END - TAIL_START)
      .collect();

   let mut short = String::with_capacity(head.len() + SEPARATOR.len() + tail.len());
   short.push_str(&head);
   short.push_str(SEPARATOR);
   short.push_str(&tail);
   short
}

/// The identifier of the connected account
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
   pub fn new(id: impl Into<String>) -> Self {
      Self(id.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }

   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   /// The shortened form shown in the UI
   pub fn truncated(&self) -> String {
      truncate_account(&self.0)
   }
}

impl fmt::Display for AccountId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

impl AsRef<str> for AccountId {
   fn as_ref(&self) -> &str {
      &self.0
   }
}

impl From<String> for AccountId {
   fn from(id: String) -> Self {
      Self(id)
   }
}

impl From<&str> for AccountId {
   fn from(id: &str) -> Self {
      Self(id.to_string())
   }
}

impl From<AccountId> for String {
   fn from(id: AccountId) -> Self {
      id.0
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   const ADDRESS: &str = "0xABCDEF0123456789000000000000000000001234";

   #[test]
   fn truncates_full_address() {
      assert_eq!(ADDRESS.chars().count(), 42);
      assert_eq!(truncate_account(ADDRESS), "0xABC...1234");
   }

   #[test]
   fn uses_fixed_offsets() {
      let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
      let expected = format!("{}...{}", &address[0..5], &address[38..42]);
      assert_eq!(truncate_account(address), expected);
      assert_eq!(truncate_account(address), "0x71C...976F");
   }

   #[test]
   fn empty_input_is_just_the_separator() {
      assert_eq!(truncate_account(""), "...");
   }

   #[test]
   fn short_input_keeps_only_the_head() {
      assert_eq!(truncate_account("0x12"), "0x12...");
      assert_eq!(truncate_account("0x1234567890"), "0x123...");

      let below_tail: String = "a".repeat(TAIL_START);
      assert_eq!(truncate_account(&below_tail), "aaaaa...");
   }

   #[test]
   fn partial_tail() {
      // 40 chars, the tail slice only gets positions 38 and 39
      let s = format!("{}XY", "0".repeat(38));
      assert_eq!(truncate_account(&s), "00000...XY");
   }

   #[test]
   fn ignores_chars_past_the_tail() {
      let s = format!("{}WXYZ-extra", "1".repeat(38));
      assert_eq!(truncate_account(&s), "11111...WXYZ");
   }

   #[test]
   fn never_panics_on_non_ascii() {
      let s = "ñ".repeat(45);
      let short = truncate_account(&s);
      assert_eq!(short, format!("{}...{}", "ñ".repeat(5), "ñ".repeat(4)));

      assert_eq!(truncate_account("not an address!"), "not a...");
      assert_eq!(truncate_account("🦀🦀"), "🦀🦀...");
   }

   #[test]
   fn account_id_display_is_the_full_identifier() {
      let id = AccountId::from(ADDRESS);
      assert_eq!(id.to_string(), ADDRESS);
      assert_eq!(id.truncated(), "0xABC...1234");
      assert!(!id.is_empty());
      assert!(AccountId::default().is_empty());
   }

   #[cfg(feature = "serde")]
   #[test]
   fn account_id_serializes_as_a_plain_string() {
      let id = AccountId::new(ADDRESS);
      let json = serde_json::to_string(&id).unwrap();
      assert_eq!(json, format!("\"{}\"", ADDRESS));

      let back: AccountId = serde_json::from_str(&json).unwrap();
      assert_eq!(back, id);
   }
}
