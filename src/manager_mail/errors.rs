use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("MailError::InvalidAddress: {0}")]
    InvalidAddress(String),
    #[error("MailError::Build: {0}")]
    Build(String),
    #[error("MailError::Smtp: {0}")]
    Smtp(String),
}
impl From<lettre::address::AddressError> for MailError {
    fn from(e: lettre::address::AddressError) -> Self { MailError::InvalidAddress(e.to_string()) }
}
impl From<lettre::error::Error> for MailError {
    fn from(e: lettre::error::Error) -> Self { MailError::Build(e.to_string()) }
}
impl From<lettre::transport::smtp::Error> for MailError {
    fn from(e: lettre::transport::smtp::Error) -> Self { MailError::Smtp(e.to_string()) }
}
