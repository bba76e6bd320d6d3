pub mod signup;
pub mod web;
