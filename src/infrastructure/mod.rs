pub mod clipboard;
pub mod invoker;
