pub mod signup_client;
