pub mod qna_flow;
pub mod session;

pub use qna_flow::QnaFlow;
pub use session::SessionState;
