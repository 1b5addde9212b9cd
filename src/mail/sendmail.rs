use crate::Result;
use lettre::{
    message::header, transport::smtp::authentication::Credentials, Message, SmtpTransport,
    Transport,
};
use std::env::var;

pub async fn send_email(to: &str, subject: &str, body: &str) -> Result<()> {
    let smtp_username = var("SMTP_USERNAME").expect("SMTP_USERNAME must be set");
    let smtp_password = var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set");
    let smtp_server = var("SMTP_SERVER").expect("SMTP_SERVER must be set");
    let smtp_port: u16 = var("SMTP_PORT")
        .expect("SMTP_PORT must be set")
        .parse()
        .expect("SMTP_PORT must be a number");

    let email = Message::builder()
        .from(smtp_username.parse()?)
        .to(to.parse()?)
        .subject(subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(body.to_string())?;

    let creds = Credentials::new(smtp_username, smtp_password);
    let mailer = SmtpTransport::starttls_relay(&smtp_server)?
        .credentials(creds)
        .port(smtp_port)
        .build();

    mailer.send(&email)?;
    tracing::info!("Email sent to {}", to);

    Ok(())
}
