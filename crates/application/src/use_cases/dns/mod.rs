pub mod handle_query;

pub use handle_query::{AnswerSource, DnsReply, HandleDnsQueryUseCase};
