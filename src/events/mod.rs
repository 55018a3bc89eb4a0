pub mod keyboard;
pub mod pointer;
