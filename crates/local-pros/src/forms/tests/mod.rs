mod common;
mod contact;
mod quote;
