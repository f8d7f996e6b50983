/// Hints passed along a scheduling request describing what was just enqueued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScheduleHints {
  /// A system message was enqueued.
  pub has_system_messages: bool,
  /// A user message was enqueued.
  pub has_user_messages:   bool,
}

impl ScheduleHints {
  /// No hint; the mailbox is inspected instead.
  pub const NONE: Self = Self { has_system_messages: false, has_user_messages: false };
  /// A system message was enqueued.
  pub const SYSTEM: Self = Self { has_system_messages: true, has_user_messages: false };
  /// A user message was enqueued.
  pub const USER: Self = Self { has_system_messages: false, has_user_messages: true };
}
