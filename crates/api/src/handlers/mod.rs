pub mod about_content;
pub mod admin;
pub mod contact_message;
pub mod thumbnail;
