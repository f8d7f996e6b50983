//! Message envelopes, the system-message protocol and invocation seams.

mod any_message;
mod any_message_view;
mod ask_response;
mod failure_payload;
mod message_invoker;
mod message_verifier;
mod system_message;

pub use any_message::AnyMessage;
pub use any_message_view::AnyMessageView;
pub use ask_response::AskResponse;
pub use failure_payload::FailurePayload;
pub use message_invoker::MessageInvoker;
pub use message_verifier::MessageVerifier;
pub use system_message::SystemMessage;
