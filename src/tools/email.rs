use crate::tools::email::Error::{
    CantConnectToSmtpServer, CantSendMessage, MissingEmailSenderAddress, MissingEmailSenderName,
    MissingSmtpLogin, MissingSmtpPassword,
};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::tools::log_message_and_return;
use mail_send::SmtpClientBuilder;
use mail_send::mail_builder::MessageBuilder;
use thiserror::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

const EMAIL_SENDER_NAME_ARG: &str = "--email-sender-name";
const EMAIL_SENDER_ADDRESS_ARG: &str = "--email-sender-address";
const REPLY_TO_ARG: &str = "--reply-to";
const SMTP_SERVER_ARG: &str = "--smtp-server";
const SMTP_PORT_ARG: &str = "--smtp-port";
const SMTP_LOGIN_ARG: &str = "--smtp-login";
const SMTP_PASSWORD_ARG: &str = "--smtp-password";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Send one email to one recipient, with distinct text and HTML renditions.
pub async fn send_email(
    recipient: &str,
    subject: &str,
    text_body: &str,
    html_body: &str,
) -> Result<()> {
    let message = create_message(recipient, subject, text_body, html_body)?;
    create_smtp_client_and_send_email(message).await
}

async fn create_smtp_client_and_send_email(message: MessageBuilder<'_>) -> Result<()> {
    let smtp_server = retrieve_smtp_server();
    let smtp_port = retrieve_smtp_port();
    let smtp_login = retrieve_smtp_login()?;
    let smtp_password = retrieve_smtp_password()?;
    let smtp_client = SmtpClientBuilder::new(smtp_server, smtp_port)
        .implicit_tls(false)
        .credentials((smtp_login, smtp_password))
        .connect()
        .await;

    smtp_client
        .map_err(log_message_and_return(
            "Couldn't connect to SMTP server",
            CantConnectToSmtpServer,
        ))?
        .send(message)
        .await
        .map_err(log_message_and_return(
            "Couldn't send message",
            CantSendMessage,
        ))
}

fn create_message<'a>(
    recipient: &'a str,
    subject: &'a str,
    text_body: &'a str,
    html_body: &'a str,
) -> Result<MessageBuilder<'a>> {
    let sender_name = retrieve_email_sender_name()?;
    let sender_address = retrieve_email_sender_address()?;
    let reply_to_address = retrieve_reply_to().unwrap_or_else(|| sender_address.clone());

    Ok(MessageBuilder::new()
        .from((sender_name, sender_address))
        .reply_to(reply_to_address)
        .to(recipient)
        .subject(subject)
        .text_body(text_body)
        .html_body(html_body))
}

// region Retrieve args
fn retrieve_smtp_server() -> String {
    retrieve_arg_value(SMTP_SERVER_ARG).unwrap_or(DEFAULT_SMTP_SERVER.to_owned())
}

fn retrieve_smtp_port() -> u16 {
    retrieve_arg_value(SMTP_PORT_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SMTP_PORT)
}

fn retrieve_smtp_login() -> Result<String> {
    retrieve_expected_arg_value(SMTP_LOGIN_ARG, MissingSmtpLogin)
}

fn retrieve_smtp_password() -> Result<String> {
    retrieve_expected_arg_value(SMTP_PASSWORD_ARG, MissingSmtpPassword)
}

fn retrieve_email_sender_name() -> Result<String> {
    retrieve_expected_arg_value(EMAIL_SENDER_NAME_ARG, MissingEmailSenderName)
}

fn retrieve_email_sender_address() -> Result<String> {
    retrieve_expected_arg_value(EMAIL_SENDER_ADDRESS_ARG, MissingEmailSenderAddress)
}

fn retrieve_reply_to() -> Option<String> {
    retrieve_arg_value(REPLY_TO_ARG)
}
// endregion

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Missing email sender name")]
    MissingEmailSenderName,
    #[error("Missing email sender address")]
    MissingEmailSenderAddress,
    #[error("Missing SMTP login")]
    MissingSmtpLogin,
    #[error("Missing SMTP password")]
    MissingSmtpPassword,
    #[error("Can't connect to SMTP server")]
    CantConnectToSmtpServer,
    #[error("Can't send message")]
    CantSendMessage,
}
