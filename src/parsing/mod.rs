pub mod attachments;
pub mod company;
pub mod datetime;
pub mod filer;
pub mod header;
pub mod uue;
pub mod xml;
