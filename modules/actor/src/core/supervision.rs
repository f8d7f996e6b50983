//! Supervision directives, strategies and restart budgets.

mod child_restart_stats;
mod supervisor_directive;
mod supervisor_strategy;
mod supervisor_strategy_kind;

pub use child_restart_stats::ChildRestartStats;
pub use supervisor_directive::SupervisorDirective;
pub use supervisor_strategy::{SupervisorDecider, SupervisorStrategy};
pub use supervisor_strategy_kind::SupervisorStrategyKind;
