//! Use case orchestration

mod complete_login;

pub use complete_login::{CompleteLogin, CompleteLoginInput, CompleteLoginOutput, verify_state};
